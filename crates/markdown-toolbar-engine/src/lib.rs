//! Context detection and formatting transformations behind a markdown
//! formatting toolbar.
//!
//! The engine is pure: every call takes the full document text plus a
//! selection and returns the full new text plus a selection into it. Hosts
//! apply the result as one atomic replace.
//!
//! ```rust
//! use markdown_toolbar_engine::{Formatter, ListType};
//!
//! let fmt = Formatter::new();
//! let bold = fmt.format_bold("hello world", 0, 11);
//! assert_eq!(bold.text, "**hello world**");
//! assert_eq!((bold.selection_start, bold.selection_end), (2, 13));
//!
//! let list = fmt.format_list("a\nb", 0, 3, ListType::Numbered);
//! assert_eq!(list.text, "1. a\n2. b");
//! ```

pub mod context;
pub mod formatting;
pub mod text;

// Re-export key types for easier usage
pub use context::{
    ContextDetector, MarkdownContext,
    kinds::{LinkMatch, ListKind},
};
pub use formatting::{
    FormatCmd, Formatter, FormattingResult, ListType, Placeholders, is_valid_url,
};
pub use text::{
    LineRef, OffsetError, Span, byte_to_utf16, get_line_at, line_range_for_selection,
    utf16_to_byte, utf16_to_byte_clamped,
};
