use std::sync::LazyLock;

use regex::Regex;

/// Inline link type: `[description](url)`.
pub struct Link;

static LINK_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[(.+?)\]\((.+?)\)").expect("invalid link regex"));

impl Link {
    /// Non-greedy, so `[a](b) and [c](d)` yields two links.
    ///
    /// The `](` join must be contiguous: `[text] (url)` is not a link.
    pub fn pattern() -> &'static Regex {
        &LINK_PATTERN
    }

    /// Renders an anchor. Both parts are inserted verbatim.
    pub fn anchor(description: &str, url: &str) -> String {
        format!(r#"<a href="{url}">{description}</a>"#)
    }
}
