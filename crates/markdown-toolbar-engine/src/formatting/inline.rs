use log::debug;

use super::FormattingResult;
use crate::text::Span;

/// How one delimiter-wrapped construct is toggled.
#[derive(Debug, Clone, Copy)]
pub(crate) struct InlineStyle<'a> {
    pub name: &'static str,
    pub delim: &'static str,
    pub placeholder: &'a str,
    /// Partial overlaps merge selection and match under one fresh pair of
    /// delimiters. Without it, any overlap strips the existing construct.
    pub merge_partial: bool,
}

/// Toggles `style` over `sel`, given the already-detected match (if any).
pub(crate) fn toggle(
    text: &str,
    sel: Span,
    existing: Option<Span>,
    style: InlineStyle<'_>,
) -> FormattingResult {
    let width = style.delim.len();

    if let Some(m) = existing {
        let inner = m.shrink(width);
        if !style.merge_partial || sel.contains_range(m) || inner.contains_range(sel) {
            debug!("{}: removing {}..{}", style.name, m.start, m.end);
            return strip(text, m, inner);
        }
        let union = sel.union(m);
        debug!(
            "{}: merging selection {}..{} into {}..{}",
            style.name, sel.start, sel.end, union.start, union.end
        );
        return merge(text, union, style.delim);
    }

    if sel.is_empty() {
        debug!("{}: inserting template at {}", style.name, sel.start);
        return surround(text, sel, style.delim, style.placeholder);
    }

    debug!("{}: wrapping {}..{}", style.name, sel.start, sel.end);
    surround(text, sel, style.delim, &text[sel.start..sel.end])
}

/// Replaces the match with its inner content.
fn strip(text: &str, m: Span, inner: Span) -> FormattingResult {
    let content = &text[inner.start..inner.end];
    let mut out = String::with_capacity(text.len());
    out.push_str(&text[..m.start]);
    out.push_str(content);
    out.push_str(&text[m.end..]);
    FormattingResult::new(out, Span::new(m.start, m.start + content.len()))
}

/// Drops every delimiter occurrence inside `union` and wraps it afresh.
fn merge(text: &str, union: Span, delim: &str) -> FormattingResult {
    let content = text[union.start..union.end].replace(delim, "");
    let mut out = String::with_capacity(text.len() + delim.len() * 2);
    out.push_str(&text[..union.start]);
    out.push_str(delim);
    out.push_str(&content);
    out.push_str(delim);
    out.push_str(&text[union.end..]);
    let start = union.start + delim.len();
    FormattingResult::new(out, Span::new(start, start + content.len()))
}

/// Replaces `sel` with `delim + body + delim`, selecting `body`.
fn surround(text: &str, sel: Span, delim: &str, body: &str) -> FormattingResult {
    let mut out = String::with_capacity(text.len() + body.len() + delim.len() * 2);
    out.push_str(&text[..sel.start]);
    out.push_str(delim);
    out.push_str(body);
    out.push_str(delim);
    out.push_str(&text[sel.end..]);
    let start = sel.start + delim.len();
    FormattingResult::new(out, Span::new(start, start + body.len()))
}
