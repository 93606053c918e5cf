use regex::Captures;

use super::{
    balance::contains_unmatched_tags,
    escape::escape,
    kinds::{DelimitedSpan, Emphasis, Link, Strong},
};

/// Formats the text of one line into inline HTML.
///
/// Stages run in a fixed order, each over the previous stage's output:
/// escape, links, emphasis, strong. Strong runs last so it can wrap
/// emphasis (and emphasis can wrap links). Malformed or overlapping
/// delimiters stay as literal text.
pub fn format_inline(line: &str) -> String {
    let escaped = escape(line);
    let linked = substitute_links(&escaped);
    let emphasized = wrap_spans::<Emphasis>(&linked);
    wrap_spans::<Strong>(&emphasized)
}

/// Formats a code line: escaping only, no inline markup.
pub fn format_code(line: &str) -> String {
    escape(line).into_owned()
}

fn substitute_links(text: &str) -> String {
    Link::pattern()
        .replace_all(text, |caps: &Captures<'_>| Link::anchor(&caps[1], &caps[2]))
        .into_owned()
}

/// Wraps every `S`-delimited span whose content is balanced.
///
/// Rejected spans keep their delimiters; scanning resumes after them.
fn wrap_spans<S: DelimitedSpan>(text: &str) -> String {
    S::pattern()
        .replace_all(text, |caps: &Captures<'_>| {
            let content = &caps[1];
            if contains_unmatched_tags(content) {
                caps[0].to_string()
            } else {
                S::wrap(content)
            }
        })
        .into_owned()
}
