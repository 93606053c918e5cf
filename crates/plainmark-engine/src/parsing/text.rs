//! Whitespace handling shared by the classifier and the block builder.
//!
//! The dialect only treats ASCII whitespace as significant: space, tab,
//! line feed, carriage return, vertical tab and form feed. Other Unicode
//! spaces (e.g. no-break space) are ordinary text.

/// Returns true for the characters the dialect treats as whitespace.
pub fn is_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0B' | '\x0C')
}

/// Returns true if `s` is empty or whitespace only.
pub fn is_blank(s: &str) -> bool {
    s.chars().all(is_space)
}

pub fn trim(s: &str) -> &str {
    s.trim_matches(is_space)
}

pub fn trim_start(s: &str) -> &str {
    s.trim_start_matches(is_space)
}

/// Strips one or more leading whitespace characters.
///
/// Returns `None` if `s` does not start with whitespace.
pub fn strip_space_run(s: &str) -> Option<&str> {
    let rest = trim_start(s);
    (rest.len() < s.len()).then_some(rest)
}
