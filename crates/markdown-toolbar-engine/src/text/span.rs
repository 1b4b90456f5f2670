use serde::Serialize;

/// A byte range `[start, end)` into the document text.
///
/// Every construct the detector reports is described by the span of the full
/// match, delimiters included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Span {
    /// Inclusive start byte offset.
    pub start: usize,
    /// Exclusive end byte offset.
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Zero-width span at `at`, i.e. a bare cursor.
    pub fn caret(at: usize) -> Self {
        Self { start: at, end: at }
    }

    /// Returns the length in bytes. Uses saturating subtraction for safety.
    #[must_use]
    pub fn len(self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns true if the span is empty (start >= end).
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.len() == 0
    }

    /// Half-open overlap test. Spans that only touch at an endpoint do not
    /// overlap, and a caret overlaps a span only when strictly inside it.
    #[must_use]
    pub fn overlaps(self, other: Span) -> bool {
        self.start < other.end && self.end > other.start
    }

    /// True when `other` lies within `self`, endpoints inclusive.
    #[must_use]
    pub fn contains_range(self, other: Span) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// Smallest span covering both `self` and `other`.
    #[must_use]
    pub fn union(self, other: Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    /// Span shrunk by `width` bytes on each side. Saturates to an empty span
    /// at the midpoint rather than inverting.
    #[must_use]
    pub fn shrink(self, width: usize) -> Span {
        if self.len() < width * 2 {
            let mid = self.start + self.len() / 2;
            return Span::caret(mid);
        }
        Span {
            start: self.start + width,
            end: self.end - width,
        }
    }
}
