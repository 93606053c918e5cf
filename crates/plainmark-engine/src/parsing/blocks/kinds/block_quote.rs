use crate::parsing::text;

/// Blockquote block type with owned delimiter constant.
///
/// Per the knowledge ownership principle, all blockquote-related
/// syntax knowledge lives here, not scattered in classifier code.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix character.
    pub const PREFIX: char = '>';

    /// Strips one `>` marker and the whitespace run after it.
    ///
    /// Leading whitespace before the marker is ignored, and the marker must be
    /// followed by at least one whitespace character. The body may be empty
    /// (`"> "`), which quotes a blank line.
    ///
    /// Only one level is stripped: `> > nested` yields `> nested`, which the
    /// builder re-classifies one level deeper.
    pub fn strip_prefix(line: &str) -> Option<&str> {
        let rest = text::trim_start(line).strip_prefix(Self::PREFIX)?;
        text::strip_space_run(rest)
    }
}
