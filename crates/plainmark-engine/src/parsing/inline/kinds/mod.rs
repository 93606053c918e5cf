//! # Inline Kinds
//!
//! Inline-specific types that own their syntax delimiters.
//!
//! ## Types
//!
//! - **`Link`**: `[description](url)`
//! - **`Emphasis`**: `_text_` rendered as `<em>`
//! - **`Strong`**: `**text**` rendered as `<strong>`
//!
//! The formatter only calls these patterns; it never hardcodes `_` or `**`.

pub mod emphasis;
pub mod link;

pub use emphasis::{DelimitedSpan, Emphasis, Strong};
pub use link::Link;
