//! # Block Handling
//!
//! Two-phase, single-pass block handling driven by a per-depth context stack.
//!
//! ## Phases
//!
//! 1. **Line Classification** (`classify`): Each line is classified into a
//!    `LineKind` (code, blank, header, blockquote, list item, paragraph).
//!    Earlier rules win, so four spaces alone is a code line, not a blank one.
//!
//! 2. **Context Transitions** (`builder`): An `HtmlBuilder` keeps the
//!    `Context` open at each depth and writes open/close tags whenever the
//!    context at a depth changes. Blockquote bodies are pushed again one
//!    level deeper.
//!
//! ## Modules
//!
//! - **`kinds`**: Block-specific types with owned delimiters (CodeBlock, Header, BlockQuote, ListMarker, Paragraph)
//! - **`classify`**: `MarkdownLineClassifier` produces a `LineKind` for each line
//! - **`context`**: `Context` and the HTML tags each context expands to
//! - **`containers`**: `ContextStack` holding the context recorded at each depth
//! - **`builder`**: `HtmlBuilder` state machine and output buffer
//!
//! ## Key Invariants
//!
//! - Recorded depths are contiguous from 0; changing the context at a depth
//!   closes every deeper one first
//! - Lists are single-level; depth only grows through blockquotes
//! - Code lines are only escaped, never inline-formatted

pub mod builder;
pub mod classify;
pub mod containers;
pub mod context;
pub mod kinds;

pub use builder::HtmlBuilder;
pub use classify::{LineKind, MarkdownLineClassifier};
pub use containers::ContextStack;
pub use context::{Context, Tag};
