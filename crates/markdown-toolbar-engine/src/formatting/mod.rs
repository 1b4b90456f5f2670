//! # Formatting
//!
//! Toggles markdown constructs over a selection and returns the whole new
//! text with the selection re-expressed as offsets into it.
//!
//! Decision order for the delimiter constructs:
//!
//! 1. **Already present**: strip the delimiters. Bold additionally merges a
//!    selection that spills past the match into one re-wrapped span.
//! 2. **Empty selection**: insert a placeholder template and select the
//!    placeholder word.
//! 3. **Otherwise**: wrap the selection, keeping the original text selected.
//!
//! Links are removed rather than merged and report the discarded URL; lists
//! and tasks work line by line over exactly the text they are given.
//!
//! No entry point fails. Offsets are clamped to the text first.

mod inline;
mod link;
mod list;
mod task;

pub use link::is_valid_url;
pub use list::ListType;

use serde::{Deserialize, Serialize};

use crate::{
    context::{
        ContextDetector,
        kinds::{Bold, CodeSpan, Italic, Strikethrough},
    },
    text::{Span, clamp_selection},
};
use inline::InlineStyle;

/// Outcome of one formatting call.
///
/// `text` is the entire new buffer; apply it as one replace, then select
/// `selection_start..selection_end` in the new text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormattingResult {
    pub text: String,
    pub selection_start: usize,
    pub selection_end: usize,
    /// URL dropped by removing a link, for the host to show the user.
    pub extracted_url: Option<String>,
}

impl FormattingResult {
    pub fn new(text: String, selection: Span) -> Self {
        Self {
            text,
            selection_start: selection.start,
            selection_end: selection.end,
            extracted_url: None,
        }
    }

    pub fn selection(&self) -> Span {
        Span::new(self.selection_start, self.selection_end)
    }
}

/// Text inserted when a command runs on an empty selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Placeholders {
    pub bold: String,
    pub italic: String,
    pub code: String,
    pub strikethrough: String,
    pub link_text: String,
    pub link_url: String,
}

impl Default for Placeholders {
    fn default() -> Self {
        Self {
            bold: "bold text".to_string(),
            italic: "italic text".to_string(),
            code: "code".to_string(),
            strikethrough: "strikethrough".to_string(),
            link_text: "link text".to_string(),
            link_url: "url".to_string(),
        }
    }
}

/// One toolbar command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatCmd {
    Bold,
    Italic,
    Code,
    Strikethrough,
    Link { url: Option<String> },
    List(ListType),
    Task,
}

#[derive(Debug, Clone, Default)]
pub struct Formatter {
    detector: ContextDetector,
    placeholders: Placeholders,
}

impl Formatter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_placeholders(placeholders: Placeholders) -> Self {
        Self {
            detector: ContextDetector::new(),
            placeholders,
        }
    }

    pub fn placeholders(&self) -> &Placeholders {
        &self.placeholders
    }

    /// Routes a command to its formatter.
    pub fn apply(&self, cmd: &FormatCmd, text: &str, start: usize, end: usize) -> FormattingResult {
        match cmd {
            FormatCmd::Bold => self.format_bold(text, start, end),
            FormatCmd::Italic => self.format_italic(text, start, end),
            FormatCmd::Code => self.format_code(text, start, end),
            FormatCmd::Strikethrough => self.format_strikethrough(text, start, end),
            FormatCmd::Link { url } => self.format_link(text, start, end, url.as_deref()),
            FormatCmd::List(list_type) => self.format_list(text, start, end, *list_type),
            FormatCmd::Task => self.toggle_task(text, start, end),
        }
    }

    /// Bold is the one construct whose partial overlaps merge.
    pub fn format_bold(&self, text: &str, start: usize, end: usize) -> FormattingResult {
        let sel = clamp_selection(text, start, end);
        let style = InlineStyle {
            name: "bold",
            delim: Bold::DELIM,
            placeholder: &self.placeholders.bold,
            merge_partial: true,
        };
        inline::toggle(text, sel, self.detector.bold(text, sel), style)
    }

    /// Removes `*..*` or `_.._`, or applies `*..*`.
    pub fn format_italic(&self, text: &str, start: usize, end: usize) -> FormattingResult {
        let sel = clamp_selection(text, start, end);
        let style = InlineStyle {
            name: "italic",
            delim: Italic::DELIM,
            placeholder: &self.placeholders.italic,
            merge_partial: false,
        };
        inline::toggle(text, sel, self.detector.italic(text, sel), style)
    }

    pub fn format_code(&self, text: &str, start: usize, end: usize) -> FormattingResult {
        let sel = clamp_selection(text, start, end);
        let style = InlineStyle {
            name: "code",
            delim: CodeSpan::DELIM,
            placeholder: &self.placeholders.code,
            merge_partial: false,
        };
        inline::toggle(text, sel, self.detector.code(text, sel), style)
    }

    pub fn format_strikethrough(&self, text: &str, start: usize, end: usize) -> FormattingResult {
        let sel = clamp_selection(text, start, end);
        let style = InlineStyle {
            name: "strikethrough",
            delim: Strikethrough::DELIM,
            placeholder: &self.placeholders.strikethrough,
            merge_partial: false,
        };
        inline::toggle(text, sel, self.detector.strikethrough(text, sel), style)
    }

    /// Unlinks an existing link (reporting its URL) or creates one. An absent
    /// or empty `url` falls back to the placeholder URL.
    pub fn format_link(
        &self,
        text: &str,
        start: usize,
        end: usize,
        url: Option<&str>,
    ) -> FormattingResult {
        let sel = clamp_selection(text, start, end);
        let url = url
            .filter(|u| !u.is_empty())
            .unwrap_or(&self.placeholders.link_url);
        link::format_link(
            text,
            sel,
            self.detector.link(text, sel),
            url,
            &self.placeholders.link_text,
        )
    }

    /// Formats the given lines as a list. The selection is not expanded to
    /// line boundaries here; see [`crate::text::line_range_for_selection`].
    pub fn format_list(
        &self,
        text: &str,
        start: usize,
        end: usize,
        list_type: ListType,
    ) -> FormattingResult {
        list::format_list(text, clamp_selection(text, start, end), list_type)
    }

    /// Toggles task checkboxes over the given lines, which like
    /// [`Formatter::format_list`] are not expanded here.
    pub fn toggle_task(&self, text: &str, start: usize, end: usize) -> FormattingResult {
        task::toggle_task(text, clamp_selection(text, start, end))
    }
}
