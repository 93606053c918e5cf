/// Indented code block type with owned indent constant.
///
/// Per the knowledge ownership principle, the indent rule lives here,
/// not in the classifier.
pub struct CodeBlock;

impl CodeBlock {
    /// Exactly four spaces open a code line. Tabs do not count.
    pub const INDENT: &'static str = "    ";

    /// Returns the code text after the indent, untouched.
    ///
    /// Anything after the fourth space is kept verbatim, including further
    /// indentation and trailing whitespace.
    pub fn strip_indent(line: &str) -> Option<&str> {
        line.strip_prefix(Self::INDENT)
    }
}
