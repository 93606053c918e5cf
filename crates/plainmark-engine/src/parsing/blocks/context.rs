/// The block-level element family open at one nesting depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Context {
    /// Nothing open (after a blank line, or before any content).
    #[default]
    None,
    Paragraph,
    Header(u8),
    /// Rendered as `<pre><code>`.
    Code,
    BlockQuote,
    UnorderedList,
    OrderedList,
}

/// A single HTML element name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    P,
    H(u8),
    Pre,
    Code,
    BlockQuote,
    Ul,
    Ol,
    Li,
}

impl Tag {
    pub fn name(self) -> &'static str {
        match self {
            Tag::P => "p",
            Tag::H(1) => "h1",
            Tag::H(2) => "h2",
            Tag::H(3) => "h3",
            Tag::H(_) => "h4",
            Tag::Pre => "pre",
            Tag::Code => "code",
            Tag::BlockQuote => "blockquote",
            Tag::Ul => "ul",
            Tag::Ol => "ol",
            Tag::Li => "li",
        }
    }

    fn is_list_wrapper(self) -> bool {
        matches!(self, Tag::Ul | Tag::Ol)
    }

    /// Writes the opening tag, aligned for list layout.
    ///
    /// List wrappers end their line; items are indented by two spaces.
    pub fn write_open(self, out: &mut String) {
        if self == Tag::Li {
            out.push_str("  ");
        }
        out.push('<');
        out.push_str(self.name());
        out.push('>');
        if self.is_list_wrapper() {
            out.push('\n');
        }
    }

    /// Writes the closing tag; list wrappers start a new line.
    pub fn write_close(self, out: &mut String) {
        if self.is_list_wrapper() {
            out.push('\n');
        }
        out.push_str("</");
        out.push_str(self.name());
        out.push('>');
    }
}

impl Context {
    /// The elements this context opens, outermost first.
    pub fn tags(self) -> &'static [Tag] {
        match self {
            Context::None => &[],
            Context::Paragraph => &[Tag::P],
            Context::Header(1) => &[Tag::H(1)],
            Context::Header(2) => &[Tag::H(2)],
            Context::Header(3) => &[Tag::H(3)],
            Context::Header(_) => &[Tag::H(4)],
            Context::Code => &[Tag::Pre, Tag::Code],
            Context::BlockQuote => &[Tag::BlockQuote],
            Context::UnorderedList => &[Tag::Ul],
            Context::OrderedList => &[Tag::Ol],
        }
    }

    pub fn write_open(self, out: &mut String) {
        for tag in self.tags() {
            tag.write_open(out);
        }
    }

    pub fn write_close(self, out: &mut String) {
        for tag in self.tags().iter().rev() {
            tag.write_close(out);
        }
    }
}
