use std::borrow::Cow;

/// Replaces `&`, `"`, `<` and `>` with their named entity references.
///
/// Single left-to-right pass: inserted references are never escaped again,
/// and every other character (including `'`) passes through unchanged.
pub fn escape(text: &str) -> Cow<'_, str> {
    html_escape::encode_double_quoted_attribute(text)
}
