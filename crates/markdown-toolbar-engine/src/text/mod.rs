//! # Text Addressing
//!
//! Spans, line lookup and offset handling shared by detection and formatting.
//!
//! The engine addresses text in UTF-8 byte offsets. Hosts that speak UTF-16
//! (most editors) convert at the boundary with [`utf16_to_byte_clamped`] and
//! [`byte_to_utf16`].

pub mod lines;
pub mod offsets;
pub mod span;

pub use lines::{LineRef, get_line_at, line_range_for_selection};
pub use offsets::{
    OffsetError, byte_to_utf16, clamp_selection, floor_char_boundary, utf16_to_byte,
    utf16_to_byte_clamped,
};
pub use span::Span;
