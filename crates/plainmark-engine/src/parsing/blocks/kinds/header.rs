use crate::parsing::text;

/// ATX-style header with owned marker constants.
pub struct Header;

impl Header {
    pub const MARKER: char = '#';
    /// Deepest supported level; `#####` is not a header.
    pub const MAX_LEVEL: usize = 4;

    /// Parses `# text` through `#### text`, returning `(level, text)`.
    ///
    /// Leading whitespace before the markers is ignored. The markers must be
    /// followed by whitespace and then at least one non-whitespace character.
    /// The returned text keeps any trailing characters (including trailing
    /// `#`s and whitespace).
    pub fn parse(line: &str) -> Option<(u8, &str)> {
        let s = text::trim_start(line);
        let rest = s.trim_start_matches(Self::MARKER);
        let level = s.len() - rest.len();
        if level == 0 || level > Self::MAX_LEVEL {
            return None;
        }

        let content = text::strip_space_run(rest)?;
        if content.is_empty() {
            return None;
        }
        Some((level as u8, content))
    }
}
