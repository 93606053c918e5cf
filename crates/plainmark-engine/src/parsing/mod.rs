//! # Parsing and Rendering
//!
//! Single-pass, line-oriented conversion of the plainmark dialect to HTML.
//!
//! Data flows one line at a time: [`blocks::MarkdownLineClassifier`] assigns
//! the line a block role, [`blocks::HtmlBuilder`] opens and closes block
//! elements as roles change, and [`inline::format_inline`] renders the
//! line's text. At end of input every open block is closed and the output
//! is trimmed once.

pub mod blocks;
pub mod inline;
pub mod text;

use blocks::HtmlBuilder;

/// Renders a whole document to an HTML fragment.
///
/// Lines are split on `\n`; a trailing `\r` is dropped so CRLF input renders
/// like LF input. Pure function of its input: the same text always yields
/// the same HTML.
pub fn render_document(plain: &str) -> String {
    let mut builder = HtmlBuilder::new();

    for line in plain.split('\n') {
        builder.push(line.strip_suffix('\r').unwrap_or(line));
    }

    builder.finish()
}
