use log::debug;
use url::Url;

use super::FormattingResult;
use crate::{
    context::kinds::{Link, LinkMatch},
    text::Span,
};

/// Removes an existing link, or creates one. Links are never merged with
/// surrounding text.
pub(crate) fn format_link(
    text: &str,
    sel: Span,
    existing: Option<LinkMatch>,
    url: &str,
    placeholder: &str,
) -> FormattingResult {
    if let Some(link) = existing {
        debug!("link: unlinking {}..{}", link.span.start, link.span.end);
        let mut out = String::with_capacity(text.len());
        out.push_str(&text[..link.span.start]);
        out.push_str(&link.text);
        out.push_str(&text[link.span.end..]);
        let selection = Span::new(link.span.start, link.span.start + link.text.len());
        let mut result = FormattingResult::new(out, selection);
        result.extracted_url = Some(link.url);
        return result;
    }

    let label = if sel.is_empty() {
        debug!("link: inserting template at {}", sel.start);
        placeholder
    } else {
        debug!("link: linking {}..{}", sel.start, sel.end);
        &text[sel.start..sel.end]
    };

    let rendered = Link::render(label, url);
    let mut out = String::with_capacity(text.len() + rendered.len());
    out.push_str(&text[..sel.start]);
    out.push_str(&rendered);
    out.push_str(&text[sel.end..]);
    let start = sel.start + Link::TEXT_OPEN.len();
    FormattingResult::new(out, Span::new(start, start + label.len()))
}

/// Permissive link target check.
///
/// Anything that parses as an absolute URL passes, as does anything starting
/// with `/`, `#`, `.` or an ASCII letter or digit. Only strings failing both
/// (the empty string among them) are rejected.
pub fn is_valid_url(url: &str) -> bool {
    if url.is_empty() {
        return false;
    }
    if Url::parse(url).is_ok() {
        return true;
    }
    url.starts_with(['/', '#', '.']) || url.starts_with(|c: char| c.is_ascii_alphanumeric())
}
