use std::sync::LazyLock;

use regex::Regex;

static TAG_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<(/?)([a-z]+)[^>]*>").expect("invalid tag regex"));

/// Returns true if `html` holds a tag that no matching tag balances.
///
/// Complete pairs (`<x ...>` followed by `</x>` with only balanced markup in
/// between) reduce away, innermost first. Whatever tag is left after the
/// reduction is unmatched. A span whose content fails this check would
/// produce overlapping elements if wrapped, so callers leave it as text.
///
/// Text never contains a raw `<` at this point (it is escaped first), so
/// every tag-like fragment here was produced by an earlier inline stage.
pub fn contains_unmatched_tags(html: &str) -> bool {
    let mut open: Vec<&str> = Vec::new();

    for caps in TAG_PATTERN.captures_iter(html) {
        let closing = !caps[1].is_empty();
        let Some(name) = caps.get(2).map(|m| m.as_str()) else {
            continue;
        };

        if !closing {
            open.push(name);
            continue;
        }
        if open.last() != Some(&name) {
            // A closer with no opener directly inside it can never reduce.
            return true;
        }
        open.pop();
    }

    !open.is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("plain text")]
    #[case("")]
    #[case("a <strong>b</strong> c")]
    #[case(r#"<a href="u">x</a>"#)]
    #[case("<strong><em>x</em></strong>")]
    #[case("<em>a</em> and <em>b</em>")]
    #[case("&lt;b&gt; escaped")]
    fn balanced(#[case] html: &str) {
        assert!(!contains_unmatched_tags(html));
    }

    #[rstest]
    #[case("b</em> c")]
    #[case("a <em>b")]
    #[case(r#"a <a href="c">b"#)]
    #[case("<em><strong>x</em></strong>")]
    #[case("</em>x<em>")]
    fn unbalanced(#[case] html: &str) {
        assert!(contains_unmatched_tags(html));
    }
}
