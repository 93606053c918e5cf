use crate::parsing::text;

/// List item markers: `* item` and `1. item`.
pub struct ListMarker;

impl ListMarker {
    pub const BULLET: char = '*';
    pub const ORDINAL_DOT: char = '.';

    /// Strips a `*` bullet and the whitespace run after it.
    pub fn strip_bullet(line: &str) -> Option<&str> {
        let rest = text::trim_start(line).strip_prefix(Self::BULLET)?;
        text::strip_space_run(rest)
    }

    /// Strips a `<digits>.` marker and the whitespace run after it.
    ///
    /// Only ASCII digits count. `1)`, `2 item` and `3.item` are not markers.
    pub fn strip_ordinal(line: &str) -> Option<&str> {
        let s = text::trim_start(line);
        let rest = s.trim_start_matches(|c: char| c.is_ascii_digit());
        if rest.len() == s.len() {
            return None;
        }
        let rest = rest.strip_prefix(Self::ORDINAL_DOT)?;
        text::strip_space_run(rest)
    }
}
