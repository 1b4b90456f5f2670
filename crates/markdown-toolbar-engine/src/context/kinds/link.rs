use serde::Serialize;

use crate::text::Span;

/// Inline link `[text](url)`. Nested brackets or parentheses are not
/// supported.
pub struct Link;

impl Link {
    pub const TEXT_OPEN: &'static str = "[";
    pub const TEXT_CLOSE_URL_OPEN: &'static str = "](";
    pub const URL_CLOSE: &'static str = ")";

    /// Renders a link from its parts.
    pub fn render(text: &str, url: &str) -> String {
        let mut out = String::with_capacity(text.len() + url.len() + 4);
        out.push_str(Self::TEXT_OPEN);
        out.push_str(text);
        out.push_str(Self::TEXT_CLOSE_URL_OPEN);
        out.push_str(url);
        out.push_str(Self::URL_CLOSE);
        out
    }
}

/// A detected link with its extracted parts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkMatch {
    /// Full span including brackets and parentheses.
    pub span: Span,
    pub text: String,
    pub url: String,
}
