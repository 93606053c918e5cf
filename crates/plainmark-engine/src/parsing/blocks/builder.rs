use log::{debug, trace};

use crate::parsing::{
    inline::{format_code, format_inline},
    text,
};

use super::{
    classify::{LineKind, MarkdownLineClassifier},
    containers::ContextStack,
    context::{Context, Tag},
    kinds::Paragraph,
};

/// Block state machine that writes HTML as lines arrive.
///
/// Each line moves the context at the current depth. When that context
/// changes, everything open at that depth and below is closed (deepest
/// first) before the new context opens. Quoted lines are pushed again one
/// level deeper, so a quote body gets its own set of contexts.
pub struct HtmlBuilder {
    classifier: MarkdownLineClassifier,
    contexts: ContextStack,
    depth: usize,
    out: String,
}

impl HtmlBuilder {
    pub fn new() -> Self {
        Self {
            classifier: MarkdownLineClassifier,
            contexts: ContextStack::default(),
            depth: 0,
            out: String::new(),
        }
    }

    /// Feeds one line (without its terminator) at the current depth.
    ///
    /// Each quote marker moves one level deeper; the remaining body is
    /// classified again at the new depth.
    pub fn push(&mut self, line: &str) {
        let outer = self.depth;
        let mut line = line;

        loop {
            let kind = self.classifier.classify(line);
            trace!("depth {}: {kind:?}", self.depth);

            match kind {
                LineKind::BlockQuote(body) => {
                    self.enter(Context::BlockQuote);
                    line = body;
                    continue;
                }
                LineKind::Code(code) => self.in_context(Context::Code, |b| {
                    b.out.push_str(&format_code(code));
                }),
                LineKind::Blank => self.in_context(Context::None, |_| {}),
                LineKind::Header { level, text } => self.element(Context::Header(level), text),
                LineKind::ListItem { ordered, text } => self.list_item(ordered, text),
                LineKind::Paragraph(line) => self.element(Context::Paragraph, line),
            }
            break;
        }

        self.depth = outer;
    }

    /// Closes everything still open and returns the trimmed HTML.
    pub fn finish(mut self) -> String {
        // EOF flush
        self.in_context(Context::None, |_| {});
        debug_assert_eq!(self.depth, 0);
        debug_assert_eq!(self.contexts.at(0), Context::None);
        debug_assert_eq!(self.contexts.max_depth(), 0);

        text::trim(&self.out).to_string()
    }

    fn element(&mut self, context: Context, line: &str) {
        self.in_context(context, |b| {
            b.out.push_str(&format_inline(Paragraph::content(line)));
        });
    }

    fn list_item(&mut self, ordered: bool, line: &str) {
        let context = if ordered {
            Context::OrderedList
        } else {
            Context::UnorderedList
        };
        self.in_context(context, |b| {
            Tag::Li.write_open(&mut b.out);
            b.out.push_str(&format_inline(Paragraph::content(line)));
            Tag::Li.write_close(&mut b.out);
        });
    }

    /// Moves the current depth to `context`, then runs `body` one level deeper.
    fn in_context(&mut self, context: Context, body: impl FnOnce(&mut Self)) {
        self.enter(context);
        body(self);
        self.depth -= 1;
    }

    /// Moves the current depth to `context` and steps one level deeper.
    fn enter(&mut self, context: Context) {
        let changed = self.contexts.at(self.depth) != context;

        if changed {
            self.close_from(self.depth);
        }
        self.separate();
        if changed {
            debug!("open {context:?} at depth {}", self.depth);
            context.write_open(&mut self.out);
        }
        self.contexts.set(self.depth, context);
        self.depth += 1;
    }

    /// Closes every context deeper than `depth`, then the one at `depth`.
    fn close_from(&mut self, depth: usize) {
        while let Some(deeper) = self.contexts.pop_below(depth) {
            debug!("close {deeper:?} below depth {depth}");
            deeper.write_close(&mut self.out);
        }
        let current = self.contexts.at(depth);
        if current != Context::None {
            debug!("close {current:?} at depth {depth}");
        }
        current.write_close(&mut self.out);
    }

    /// Line break between blocks and between lines of the same block.
    ///
    /// Only the deepest recorded level writes it, so a quoted line adds one
    /// break rather than one per enclosing quote.
    fn separate(&mut self) {
        if !self.out.is_empty() && self.depth == self.contexts.max_depth() {
            self.out.push('\n');
        }
    }
}

impl Default for HtmlBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn build(lines: &[&str]) -> String {
        let mut builder = HtmlBuilder::new();
        for line in lines {
            builder.push(line);
        }
        builder.finish()
    }

    #[test]
    fn empty_input_renders_nothing() {
        assert_eq!(build(&[]), "");
        assert_eq!(build(&["", "   ", ""]), "");
    }

    #[test]
    fn continuation_lines_share_a_block() {
        assert_eq!(build(&["one", "two"]), "<p>one\ntwo</p>");
    }

    #[test]
    fn blank_line_separates_siblings() {
        assert_eq!(build(&["one", "", "two"]), "<p>one</p>\n\n<p>two</p>");
    }

    #[test]
    fn context_change_without_blank_line() {
        assert_eq!(
            build(&["one", "# Two", "three"]),
            "<p>one</p>\n<h1>Two</h1>\n<p>three</p>"
        );
    }

    #[test]
    fn same_level_headers_merge() {
        assert_eq!(build(&["# A", "# B"]), "<h1>A\nB</h1>");
        assert_eq!(build(&["# A", "## B"]), "<h1>A</h1>\n<h2>B</h2>");
    }

    #[test]
    fn code_keeps_empty_lines() {
        assert_eq!(
            build(&["    a", "    ", "    b"]),
            "<pre><code>a\n\nb</code></pre>"
        );
    }

    #[test]
    fn list_items_share_one_wrapper() {
        assert_eq!(
            build(&["* a", "* b"]),
            "<ul>\n  <li>a</li>\n  <li>b</li>\n</ul>"
        );
    }

    #[test]
    fn switching_list_kind_starts_a_new_list() {
        assert_eq!(
            build(&["* a", "1. b"]),
            "<ul>\n  <li>a</li>\n</ul>\n<ol>\n  <li>b</li>\n</ol>"
        );
    }

    #[test]
    fn quote_with_two_paragraphs() {
        assert_eq!(
            build(&["> a", "> ", "> b"]),
            "<blockquote><p>a</p>\n\n<p>b</p></blockquote>"
        );
    }

    #[test]
    fn nested_quotes_close_deepest_first() {
        assert_eq!(
            build(&["> > deep", "> shallow"]),
            "<blockquote><blockquote><p>deep</p></blockquote>\n<p>shallow</p></blockquote>"
        );
        assert_eq!(
            build(&["> > deep"]),
            "<blockquote><blockquote><p>deep</p></blockquote></blockquote>"
        );
    }

    #[test]
    fn very_deep_quote_nesting() {
        let line = format!("{}x", "> ".repeat(100_000));
        let html = build(&[&line, "after"]);

        assert!(html.starts_with("<blockquote><blockquote>"));
        assert!(html.contains("<p>x</p></blockquote></blockquote>"));
        assert!(html.ends_with("</blockquote>\n<p>after</p>"));
        assert_eq!(html.matches("<blockquote>").count(), 100_000);
        assert_eq!(html.matches("</blockquote>").count(), 100_000);
    }

    #[test]
    fn depth_returns_to_top_level_after_quote() {
        let mut builder = HtmlBuilder::new();
        builder.push("> > a");
        assert_eq!(builder.depth, 0);
        builder.push("b");
        assert_eq!(
            builder.finish(),
            "<blockquote><blockquote><p>a</p></blockquote></blockquote>\n<p>b</p>"
        );
    }

    #[test]
    fn paragraph_after_quote() {
        assert_eq!(
            build(&["> quoted", "after"]),
            "<blockquote><p>quoted</p></blockquote>\n<p>after</p>"
        );
    }

    #[test]
    fn list_inside_quote() {
        assert_eq!(
            build(&["> * a", "> * b"]),
            "<blockquote><ul>\n  <li>a</li>\n  <li>b</li>\n</ul></blockquote>"
        );
    }
}
