//! # Context Detection
//!
//! Reports which markdown constructs overlap a cursor or selection.
//!
//! Every query rescans the whole buffer; nothing is cached between calls.
//! Inline constructs (bold, italic, code, strikethrough, link) are tested
//! against the full selection with the half-open overlap rule, so a caret
//! sitting exactly on a delimiter boundary is outside the construct.
//! Line-oriented facts (list, task, table, fenced block) are taken from the
//! line holding the selection start only.
//!
//! ## Modules
//!
//! - **`kinds`**: delimiter constants and per-construct line parsers
//! - **`cursor`**: byte cursor used by the hand-written italic scanner
//! - **`scan`**: first-overlapping-match finders for inline constructs

pub mod cursor;
pub mod kinds;
pub mod scan;

use log::trace;
use serde::Serialize;

use crate::text::{Span, clamp_selection, get_line_at};
use kinds::{CodeFence, LinkMatch, ListKind, ListMarker, TaskBox};

/// What surrounds a cursor or selection. Each `Option<Span>` holds the full
/// match, delimiters included.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MarkdownContext {
    pub bold: Option<Span>,
    pub italic: Option<Span>,
    pub code: Option<Span>,
    pub strikethrough: Option<Span>,
    pub link: Option<LinkMatch>,
    pub list: ListKind,
    pub in_code_block: bool,
    pub in_table: bool,
    pub on_task_line: bool,
}

impl MarkdownContext {
    pub fn is_bold(&self) -> bool {
        self.bold.is_some()
    }

    pub fn is_italic(&self) -> bool {
        self.italic.is_some()
    }

    pub fn is_code(&self) -> bool {
        self.code.is_some()
    }

    pub fn is_strikethrough(&self) -> bool {
        self.strikethrough.is_some()
    }

    pub fn is_link(&self) -> bool {
        self.link.is_some()
    }

    pub fn is_list(&self) -> bool {
        self.list != ListKind::None
    }
}

/// Stateless detector. Offsets are byte offsets; out-of-range or inverted
/// selections are clamped before scanning.
#[derive(Debug, Clone, Copy, Default)]
pub struct ContextDetector;

impl ContextDetector {
    pub fn new() -> Self {
        Self
    }

    /// Full context for the selection `[start, end)`.
    pub fn detect(&self, text: &str, start: usize, end: usize) -> MarkdownContext {
        let sel = clamp_selection(text, start, end);
        let ctx = MarkdownContext {
            bold: self.bold(text, sel),
            italic: self.italic(text, sel),
            code: self.code(text, sel),
            strikethrough: self.strikethrough(text, sel),
            link: self.link(text, sel),
            list: self.list(text, sel.start),
            in_code_block: self.in_code_block(text, sel.start),
            in_table: self.in_table(text, sel.start),
            on_task_line: self.on_task_line(text, sel.start),
        };
        trace!("context at {}..{}: {ctx:?}", sel.start, sel.end);
        ctx
    }

    /// Context for a bare cursor.
    pub fn detect_at(&self, text: &str, position: usize) -> MarkdownContext {
        self.detect(text, position, position)
    }

    pub fn bold(&self, text: &str, sel: Span) -> Option<Span> {
        scan::find_bold(text, sel)
    }

    pub fn italic(&self, text: &str, sel: Span) -> Option<Span> {
        scan::find_italic(text, sel)
    }

    pub fn code(&self, text: &str, sel: Span) -> Option<Span> {
        scan::find_code(text, sel)
    }

    pub fn strikethrough(&self, text: &str, sel: Span) -> Option<Span> {
        scan::find_strikethrough(text, sel)
    }

    pub fn link(&self, text: &str, sel: Span) -> Option<LinkMatch> {
        scan::find_link(text, sel)
    }

    /// List classification of the line holding `position`.
    pub fn list(&self, text: &str, position: usize) -> ListKind {
        ListMarker::classify(get_line_at(text, position).text)
    }

    pub fn on_task_line(&self, text: &str, position: usize) -> bool {
        TaskBox::parse(get_line_at(text, position).text).is_some()
    }

    pub fn in_table(&self, text: &str, position: usize) -> bool {
        get_line_at(text, position).text.trim().starts_with('|')
    }

    /// Whether the line holding `position` sits inside a fenced code block.
    /// Fence lines count as inside; an unclosed fence runs to the end.
    pub fn in_code_block(&self, text: &str, position: usize) -> bool {
        let target = get_line_at(text, position).start;
        let mut open = None;
        let mut line_start = 0usize;

        for line in text.split('\n') {
            let sig = CodeFence::sig(line);
            let inside = open.is_some() || sig.is_some();
            match open {
                None => open = sig,
                Some(kind) if CodeFence::closes(kind, sig) => open = None,
                Some(_) => {}
            }
            if line_start == target {
                return inside;
            }
            line_start += line.len() + 1;
        }
        false
    }
}
