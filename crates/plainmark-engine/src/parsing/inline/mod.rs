//! # Inline Formatting
//!
//! Turns the text of one block line into inline HTML.
//!
//! ## Pipeline
//!
//! 1. **`escape`**: `&`, `"`, `<`, `>` become entity references
//! 2. **links**: `[description](url)` becomes an anchor
//! 3. **emphasis**: `_text_` becomes `<em>`
//! 4. **strong**: `**text**` becomes `<strong>`
//!
//! ## Overlap Rule
//!
//! Before wrapping a span, its content is checked by
//! [`balance::contains_unmatched_tags`]. Content holding half of an element
//! produced by an earlier stage (e.g. `_a **b_ c**`) is left as literal text,
//! so the output never has crossing tags.
//!
//! ## Modules
//!
//! - **`escape`**: entity escaping
//! - **`kinds`**: delimiter patterns (`Link`, `Emphasis`, `Strong`)
//! - **`balance`**: tag balance check for the overlap rule
//! - **`formatter`**: `format_inline()` and `format_code()` entry points

pub mod balance;
pub mod escape;
pub mod formatter;
pub mod kinds;

pub use escape::escape;
pub use formatter::{format_code, format_inline};
