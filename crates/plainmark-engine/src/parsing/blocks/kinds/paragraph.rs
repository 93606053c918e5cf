use crate::parsing::text;

/// Paragraph block type.
///
/// Paragraphs have no delimiters - they are the fallback for any line
/// no other block opener claims, including malformed headers and list
/// markers. The classifier keeps the whole line; surrounding whitespace
/// is dropped only when the line is rendered.
pub struct Paragraph;

impl Paragraph {
    /// The renderable text of a paragraph (or header, list item) line.
    pub fn content(line: &str) -> &str {
        text::trim(line)
    }
}
