use thiserror::Error;

use super::span::Span;

/// Failure converting between the host's UTF-16 addressing and byte offsets.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OffsetError {
    #[error("offset {offset} is beyond the end of the text ({len} units)")]
    OutOfBounds { offset: usize, len: usize },

    #[error("offset {offset} falls inside a character")]
    SplitsCharacter { offset: usize },
}

/// Moves `offset` back onto the nearest char boundary at or before it,
/// clamped to the text length.
pub fn floor_char_boundary(text: &str, offset: usize) -> usize {
    let mut offset = offset.min(text.len());
    while !text.is_char_boundary(offset) {
        offset -= 1;
    }
    offset
}

/// Normalises a caller-supplied selection so it can be sliced safely.
///
/// Both offsets are clamped to the text and floored to char boundaries, then
/// ordered. Every formatting entry point runs its input through this.
pub fn clamp_selection(text: &str, start: usize, end: usize) -> Span {
    let a = floor_char_boundary(text, start);
    let b = floor_char_boundary(text, end);
    Span::new(a.min(b), a.max(b))
}

/// Converts a UTF-16 code unit offset into a byte offset into `text`,
/// rejecting offsets past the end or inside a surrogate pair.
pub fn utf16_to_byte(text: &str, offset: usize) -> Result<usize, OffsetError> {
    let byte = utf16_to_byte_clamped(text, offset);
    let units = text[..byte].encode_utf16().count();
    if units == offset {
        Ok(byte)
    } else if byte == text.len() {
        Err(OffsetError::OutOfBounds { offset, len: units })
    } else {
        Err(OffsetError::SplitsCharacter { offset })
    }
}

/// Converts a UTF-16 code unit offset into a byte offset into `text`.
///
/// The UTF-16 counterpart of [`clamp_selection`]: offsets past the end land on
/// `text.len()` and an offset inside a surrogate pair floors to the start of
/// that character.
pub fn utf16_to_byte_clamped(text: &str, offset: usize) -> usize {
    let mut units = 0usize;
    for (byte, ch) in text.char_indices() {
        units += ch.len_utf16();
        if units > offset {
            return byte;
        }
    }
    text.len()
}

/// Converts a byte offset into `text` to a UTF-16 code unit offset.
pub fn byte_to_utf16(text: &str, offset: usize) -> Result<usize, OffsetError> {
    if offset > text.len() {
        return Err(OffsetError::OutOfBounds {
            offset,
            len: text.len(),
        });
    }
    if !text.is_char_boundary(offset) {
        return Err(OffsetError::SplitsCharacter { offset });
    }
    Ok(text[..offset].encode_utf16().count())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_orders_and_bounds() {
        assert_eq!(clamp_selection("hello", 4, 1), Span::new(1, 4));
        assert_eq!(clamp_selection("hello", 2, 99), Span::new(2, 5));
    }

    #[test]
    fn clamp_floors_to_char_boundary() {
        // "é" is two bytes
        assert_eq!(clamp_selection("aé", 2, 3), Span::new(1, 3));
    }

    #[test]
    fn ascii_offsets_are_identical() {
        assert_eq!(utf16_to_byte("hello", 3), Ok(3));
        assert_eq!(byte_to_utf16("hello", 5), Ok(5));
    }

    #[test]
    fn multibyte_and_surrogate_pairs() {
        // é: 2 bytes, 1 unit; 🎉: 4 bytes, 2 units
        let text = "é🎉x";
        assert_eq!(utf16_to_byte(text, 1), Ok(2));
        assert_eq!(utf16_to_byte(text, 3), Ok(6));
        assert_eq!(utf16_to_byte(text, 4), Ok(7));
        assert_eq!(byte_to_utf16(text, 6), Ok(3));
    }

    #[test]
    fn offset_inside_surrogate_pair_is_rejected() {
        assert_eq!(
            utf16_to_byte("🎉", 1),
            Err(OffsetError::SplitsCharacter { offset: 1 })
        );
        assert_eq!(
            byte_to_utf16("🎉", 2),
            Err(OffsetError::SplitsCharacter { offset: 2 })
        );
    }

    #[test]
    fn clamped_conversion_never_fails() {
        let text = "é🎉x";
        assert_eq!(utf16_to_byte_clamped(text, 0), 0);
        assert_eq!(utf16_to_byte_clamped(text, 3), 6);
        // inside the surrogate pair of 🎉
        assert_eq!(utf16_to_byte_clamped(text, 2), 2);
        assert_eq!(utf16_to_byte_clamped(text, 4), 7);
        assert_eq!(utf16_to_byte_clamped(text, 99), 7);
        assert_eq!(utf16_to_byte_clamped("", 3), 0);
    }

    #[test]
    fn out_of_bounds_reports_length() {
        assert_eq!(
            utf16_to_byte("ab", 5),
            Err(OffsetError::OutOfBounds { offset: 5, len: 2 })
        );
        assert!(matches!(
            byte_to_utf16("ab", 3),
            Err(OffsetError::OutOfBounds { .. })
        ));
    }
}
