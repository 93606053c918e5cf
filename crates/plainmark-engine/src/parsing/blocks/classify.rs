use crate::parsing::text;

use super::kinds::{BlockQuote, CodeBlock, Header, ListMarker};

/// The block role of a single line, borrowing its captured text.
///
/// This is phase 1 of block handling: each line is classified independently
/// without reference to surrounding context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// A code line; text after the four-space indent, verbatim.
    Code(&'a str),
    /// An empty or whitespace-only line.
    Blank,
    /// A level 1-4 header and its text (untrimmed).
    Header { level: u8, text: &'a str },
    /// A quoted line; the body is classified again one level deeper.
    BlockQuote(&'a str),
    /// A `*` or `1.` list item and its text (untrimmed).
    ListItem { ordered: bool, text: &'a str },
    /// Anything else; the whole original line.
    Paragraph(&'a str),
}

/// Classifies individual lines for the block phase.
pub struct MarkdownLineClassifier;

impl MarkdownLineClassifier {
    /// Classifies a line (without its terminator) into a [`LineKind`].
    ///
    /// Rules are tried in priority order, so a line of exactly four spaces
    /// is `Code("")` rather than `Blank`; this keeps an empty line inside a
    /// code block from ending it.
    pub fn classify<'a>(&self, line: &'a str) -> LineKind<'a> {
        if let Some(code) = CodeBlock::strip_indent(line) {
            return LineKind::Code(code);
        }
        if text::is_blank(line) {
            return LineKind::Blank;
        }
        if let Some((level, text)) = Header::parse(line) {
            return LineKind::Header { level, text };
        }
        if let Some(body) = BlockQuote::strip_prefix(line) {
            return LineKind::BlockQuote(body);
        }
        if let Some(text) = ListMarker::strip_bullet(line) {
            return LineKind::ListItem {
                ordered: false,
                text,
            };
        }
        if let Some(text) = ListMarker::strip_ordinal(line) {
            return LineKind::ListItem {
                ordered: true,
                text,
            };
        }
        LineKind::Paragraph(line)
    }
}
