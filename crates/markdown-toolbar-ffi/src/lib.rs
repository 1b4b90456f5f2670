//! UniFFI bindings for markdown-toolbar editor hosts
//!
//! Editor hosts address text in UTF-16 code units, so every offset crossing
//! this boundary is UTF-16 and is converted to and from the engine's byte
//! offsets here.

use markdown_toolbar_engine::{
    ContextDetector, FormatCmd, Formatter, FormattingResult, ListKind, ListType, MarkdownContext,
    OffsetError, Span, byte_to_utf16, utf16_to_byte_clamped,
};

uniffi::setup_scaffolding!();

// ============ Errors ============

/// Errors that can cross the FFI boundary
/// Note: Field is named `reason` not `message` to avoid conflict with Throwable.message in Kotlin
#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum FfiError {
    #[error("Invalid offset: {reason}")]
    InvalidOffset { reason: String },
}

impl From<OffsetError> for FfiError {
    fn from(e: OffsetError) -> Self {
        FfiError::InvalidOffset {
            reason: e.to_string(),
        }
    }
}

fn to_byte(text: &str, offset: u32) -> usize {
    utf16_to_byte_clamped(text, offset as usize)
}

fn to_utf16(text: &str, offset: usize) -> Result<u32, FfiError> {
    let units = byte_to_utf16(text, offset)?;
    u32::try_from(units).map_err(|_| FfiError::InvalidOffset {
        reason: format!("offset {units} does not fit in 32 bits"),
    })
}

// ============ DTOs ============

/// A `[start, end)` range in UTF-16 code units.
#[derive(Debug, Clone, PartialEq, Eq, uniffi::Record)]
pub struct RangeDto {
    pub start: u32,
    pub end: u32,
}

impl RangeDto {
    fn from_engine(text: &str, span: Span) -> Result<Self, FfiError> {
        Ok(Self {
            start: to_utf16(text, span.start)?,
            end: to_utf16(text, span.end)?,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, uniffi::Enum)]
pub enum ListTypeDto {
    Bullet,
    Numbered,
}

impl From<ListTypeDto> for ListType {
    fn from(dto: ListTypeDto) -> Self {
        match dto {
            ListTypeDto::Bullet => ListType::Bullet,
            ListTypeDto::Numbered => ListType::Numbered,
        }
    }
}

/// A toolbar command.
#[derive(Debug, Clone, PartialEq, Eq, uniffi::Enum)]
pub enum FormatCommandDto {
    Bold,
    Italic,
    Code,
    Strikethrough,
    Link { url: Option<String> },
    List { list_type: ListTypeDto },
    Task,
}

impl From<FormatCommandDto> for FormatCmd {
    fn from(dto: FormatCommandDto) -> Self {
        match dto {
            FormatCommandDto::Bold => FormatCmd::Bold,
            FormatCommandDto::Italic => FormatCmd::Italic,
            FormatCommandDto::Code => FormatCmd::Code,
            FormatCommandDto::Strikethrough => FormatCmd::Strikethrough,
            FormatCommandDto::Link { url } => FormatCmd::Link { url },
            FormatCommandDto::List { list_type } => FormatCmd::List(list_type.into()),
            FormatCommandDto::Task => FormatCmd::Task,
        }
    }
}

/// Context around a selection, ranges in UTF-16 code units.
#[derive(Debug, Clone, PartialEq, Eq, uniffi::Record)]
pub struct ContextDto {
    pub bold: Option<RangeDto>,
    pub italic: Option<RangeDto>,
    pub code: Option<RangeDto>,
    pub strikethrough: Option<RangeDto>,
    pub link: Option<RangeDto>,
    pub link_text: Option<String>,
    pub link_url: Option<String>,
    /// "bullet", "numbered" or "none"
    pub list_type: String,
    pub in_code_block: bool,
    pub in_table: bool,
    pub on_task_line: bool,
}

impl ContextDto {
    fn from_engine(text: &str, ctx: MarkdownContext) -> Result<Self, FfiError> {
        let range = |span: Option<Span>| span.map(|s| RangeDto::from_engine(text, s)).transpose();
        let list_type = match ctx.list {
            ListKind::None => "none",
            ListKind::Bullet => "bullet",
            ListKind::Numbered => "numbered",
        };
        let link_span = ctx.link.as_ref().map(|l| l.span);
        let (link_text, link_url) = match ctx.link {
            Some(link) => (Some(link.text), Some(link.url)),
            None => (None, None),
        };

        Ok(Self {
            bold: range(ctx.bold)?,
            italic: range(ctx.italic)?,
            code: range(ctx.code)?,
            strikethrough: range(ctx.strikethrough)?,
            link: range(link_span)?,
            link_text,
            link_url,
            list_type: list_type.to_string(),
            in_code_block: ctx.in_code_block,
            in_table: ctx.in_table,
            on_task_line: ctx.on_task_line,
        })
    }
}

/// The full new text plus the selection to set in it.
#[derive(Debug, Clone, PartialEq, Eq, uniffi::Record)]
pub struct FormattingResultDto {
    pub text: String,
    pub selection_start: u32,
    pub selection_end: u32,
    /// URL removed by unlinking, to be shown to the user
    pub extracted_url: Option<String>,
}

impl FormattingResultDto {
    fn from_engine(result: FormattingResult) -> Result<Self, FfiError> {
        let selection = RangeDto::from_engine(&result.text, result.selection())?;
        Ok(Self {
            text: result.text,
            selection_start: selection.start,
            selection_end: selection.end,
            extracted_url: result.extracted_url,
        })
    }
}

// ============ Standalone Functions ============

/// Detect the markdown constructs around a selection.
#[uniffi::export]
pub fn detect_context(
    text: String,
    selection_start: u32,
    selection_end: u32,
) -> Result<ContextDto, FfiError> {
    let start = to_byte(&text, selection_start);
    let end = to_byte(&text, selection_end);
    let ctx = ContextDetector::new().detect(&text, start, end);
    ContextDto::from_engine(&text, ctx)
}

/// Apply one toolbar command. List and task commands format exactly the given
/// range; expand it with `line_range_for_selection` first.
#[uniffi::export]
pub fn apply_format(
    text: String,
    command: FormatCommandDto,
    selection_start: u32,
    selection_end: u32,
) -> Result<FormattingResultDto, FfiError> {
    let start = to_byte(&text, selection_start);
    let end = to_byte(&text, selection_end);
    let result = Formatter::new().apply(&command.into(), &text, start, end);
    FormattingResultDto::from_engine(result)
}

/// Expand a selection to whole lines.
#[uniffi::export]
pub fn line_range_for_selection(
    text: String,
    selection_start: u32,
    selection_end: u32,
) -> Result<RangeDto, FfiError> {
    let start = to_byte(&text, selection_start);
    let end = to_byte(&text, selection_end);
    let lines = markdown_toolbar_engine::line_range_for_selection(&text, start, end);
    RangeDto::from_engine(&text, lines)
}

/// Check a proposed link target before creating a link.
#[uniffi::export]
pub fn is_valid_url(url: String) -> bool {
    markdown_toolbar_engine::is_valid_url(&url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_bold() {
        let result = apply_format("hello world".to_string(), FormatCommandDto::Bold, 0, 11).unwrap();
        assert_eq!(result.text, "**hello world**");
        assert_eq!((result.selection_start, result.selection_end), (2, 13));
    }

    #[test]
    fn test_offsets_are_utf16() {
        // "日本" is two UTF-16 units but six bytes
        let result = apply_format("日本 go".to_string(), FormatCommandDto::Code, 3, 5).unwrap();
        assert_eq!(result.text, "日本 `go`");
        assert_eq!((result.selection_start, result.selection_end), (4, 6));
    }

    #[test]
    fn test_offset_inside_surrogate_pair_floors() {
        let result = apply_format("😀".to_string(), FormatCommandDto::Italic, 1, 1).unwrap();
        assert_eq!(result.text, "*italic text*😀");
        assert_eq!((result.selection_start, result.selection_end), (1, 12));
    }

    #[test]
    fn test_unlink_with_end_past_text() {
        let text = "[GitHub](https://github.com)".to_string();
        let result = apply_format(text, FormatCommandDto::Link { url: None }, 0, 29).unwrap();
        assert_eq!(result.text, "GitHub");
        assert_eq!((result.selection_start, result.selection_end), (0, 6));
        assert_eq!(result.extracted_url.as_deref(), Some("https://github.com"));
    }

    #[test]
    fn test_caret_past_end_is_clamped() {
        let result = apply_format("hello".to_string(), FormatCommandDto::Bold, 10, 10).unwrap();
        assert_eq!(result.text, "hello**bold text**");
        assert_eq!((result.selection_start, result.selection_end), (7, 16));

        let ctx = detect_context("**b**".to_string(), 40, 40).unwrap();
        assert_eq!(ctx.bold, None);

        let range = line_range_for_selection("one\ntwo".to_string(), 2, 50).unwrap();
        assert_eq!(range, RangeDto { start: 0, end: 7 });
    }

    #[test]
    fn test_unlink_returns_url() {
        let text = "[docs](https://docs.rs)".to_string();
        let result = apply_format(text, FormatCommandDto::Link { url: None }, 2, 2).unwrap();
        assert_eq!(result.text, "docs");
        assert_eq!(result.extracted_url, Some("https://docs.rs".to_string()));
    }

    #[test]
    fn test_numbered_list_command() {
        let text = "Item 1\nItem 2\nItem 3".to_string();
        let command = FormatCommandDto::List {
            list_type: ListTypeDto::Numbered,
        };
        let result = apply_format(text, command, 0, 20).unwrap();
        assert_eq!(result.text, "1. Item 1\n2. Item 2\n3. Item 3");
    }

    #[test]
    fn test_detect_context_ranges() {
        let ctx = detect_context("é **b** [l](u)".to_string(), 4, 4).unwrap();
        assert_eq!(ctx.bold, Some(RangeDto { start: 2, end: 7 }));
        assert_eq!(ctx.link, None);
        assert_eq!(ctx.list_type, "none");

        let ctx = detect_context("é **b** [l](u)".to_string(), 9, 9).unwrap();
        assert_eq!(ctx.link, Some(RangeDto { start: 8, end: 14 }));
        assert_eq!(ctx.link_text.as_deref(), Some("l"));
        assert_eq!(ctx.link_url.as_deref(), Some("u"));
    }

    #[test]
    fn test_line_range_for_selection() {
        let range = line_range_for_selection("ü one\nü two".to_string(), 8, 8).unwrap();
        assert_eq!(range, RangeDto { start: 6, end: 11 });
    }

    #[test]
    fn test_is_valid_url() {
        assert!(is_valid_url("#anchor".to_string()));
        assert!(!is_valid_url(String::new()));
    }
}
