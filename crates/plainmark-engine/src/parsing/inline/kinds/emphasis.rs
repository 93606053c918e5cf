use std::sync::LazyLock;

use regex::Regex;

/// A delimiter pair that wraps its content in a single element.
pub trait DelimitedSpan {
    /// Element name used for the wrapper.
    const TAG: &'static str;

    /// Pattern capturing the delimited content in group 1.
    fn pattern() -> &'static Regex;

    fn wrap(content: &str) -> String {
        format!("<{tag}>{content}</{tag}>", tag = Self::TAG)
    }
}

/// `_emphasis_`
pub struct Emphasis;

/// `**strong**`
pub struct Strong;

static EMPHASIS_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"_(.*?)_").expect("invalid emphasis regex"));

static STRONG_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*(.*?)\*\*").expect("invalid strong regex"));

impl DelimitedSpan for Emphasis {
    const TAG: &'static str = "em";

    fn pattern() -> &'static Regex {
        &EMPHASIS_PATTERN
    }
}

impl DelimitedSpan for Strong {
    const TAG: &'static str = "strong";

    fn pattern() -> &'static Regex {
        &STRONG_PATTERN
    }
}
