use std::fmt;
use std::sync::OnceLock;

use crate::parsing::render_document;

/// Converts plainmark text to an HTML fragment.
///
/// Never fails: anything the dialect does not recognise is rendered as
/// paragraph text or left as literal characters.
pub fn format(plain: &str) -> String {
    render_document(plain)
}

/// A document together with its rendered HTML.
///
/// The HTML is produced on first use and cached, so repeated calls to
/// [`Formatter::to_html`] return the same text without rendering again.
#[derive(Debug, Clone, Default)]
pub struct Formatter {
    plain: String,
    html: OnceLock<String>,
}

impl Formatter {
    pub fn new(plain: impl Into<String>) -> Self {
        Self {
            plain: plain.into(),
            html: OnceLock::new(),
        }
    }

    /// The input text, exactly as given.
    pub fn plain(&self) -> &str {
        &self.plain
    }

    pub fn to_html(&self) -> &str {
        self.html.get_or_init(|| format(&self.plain))
    }
}

impl fmt::Display for Formatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_html())
    }
}

impl From<&str> for Formatter {
    fn from(plain: &str) -> Self {
        Self::new(plain)
    }
}

impl From<String> for Formatter {
    fn from(plain: String) -> Self {
        Self::new(plain)
    }
}
