use super::{offsets::clamp_selection, span::Span};

/// A single line of the document with its byte span.
///
/// `end` excludes the trailing newline, so `&doc[start..end] == text`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineRef<'a> {
    pub text: &'a str,
    pub start: usize,
    pub end: usize,
}

impl LineRef<'_> {
    pub fn span(&self) -> Span {
        Span::new(self.start, self.end)
    }
}

/// Returns the line containing `position`.
///
/// A position sitting on a line's trailing newline belongs to that line; the
/// byte after the newline starts the next one. Positions past the end of the
/// text resolve to the last line.
pub fn get_line_at(text: &str, position: usize) -> LineRef<'_> {
    let mut current = 0usize;
    for line in text.split('\n') {
        let end = current + line.len();
        if position <= end {
            return LineRef {
                text: line,
                start: current,
                end,
            };
        }
        current = end + 1;
    }

    let last = text.rsplit('\n').next().unwrap_or_default();
    LineRef {
        text: last,
        start: text.len().saturating_sub(last.len()),
        end: text.len(),
    }
}

/// Expands a selection to whole-line boundaries.
///
/// The result runs from the start of the first touched line to the end of the
/// last one, newline excluded. A non-empty selection that ends right after a
/// newline does not pull in the following line.
pub fn line_range_for_selection(text: &str, start: usize, end: usize) -> Span {
    let sel = clamp_selection(text, start, end);
    let mut last_pos = sel.end;
    if !sel.is_empty() && text.as_bytes()[sel.end - 1] == b'\n' {
        last_pos -= 1;
    }

    let first = get_line_at(text, sel.start);
    let last = get_line_at(text, last_pos);
    Span::new(first.start, last.end.max(first.end))
}
