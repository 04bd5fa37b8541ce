#[cfg(feature = "simdutf8")]
use simdutf8::basic as simd_utf8;

use crate::{CborError, ErrorCode};

/// Validates UTF-8 bytes and returns a borrowed `&str` on success.
///
/// `off` is the stream offset reported on failure.
#[inline]
pub fn validate(bytes: &[u8], off: usize) -> Result<&str, CborError> {
    #[cfg(feature = "simdutf8")]
    {
        simd_utf8::from_utf8(bytes).map_err(|_| CborError::new(ErrorCode::Utf8Invalid, off))
    }

    #[cfg(not(feature = "simdutf8"))]
    {
        core::str::from_utf8(bytes).map_err(|_| CborError::new(ErrorCode::Utf8Invalid, off))
    }
}

/// Splits `text` into pieces of at most `max` bytes, never inside a code point.
///
/// Each piece takes as many bytes as fit and backs off to the previous char boundary.
pub fn split_chunks(text: &str, max: usize) -> impl Iterator<Item = &str> {
    let mut rest = text;
    core::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        let mut end = rest.len().min(max);
        while !rest.is_char_boundary(end) {
            end -= 1;
        }
        // A single code point is at most 4 bytes; `max` is never that small in practice.
        if end == 0 {
            end = rest.chars().next().map_or(rest.len(), char::len_utf8);
        }
        let (head, tail) = rest.split_at(end);
        rest = tail;
        Some(head)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn split_never_cuts_code_points() {
        let text = "aé€😀".repeat(20);
        let pieces: Vec<&str> = split_chunks(&text, 64).collect();
        assert!(pieces.iter().all(|p| p.len() <= 64));
        assert_eq!(pieces.concat(), text);
        assert!(pieces[0].len() < 64);
    }

    #[test]
    fn split_of_short_text_is_one_piece() {
        assert_eq!(split_chunks("abc", 64).collect::<Vec<_>>(), ["abc"]);
        assert_eq!(split_chunks("", 64).count(), 0);
    }

    #[test]
    fn invalid_utf8_reports_offset() {
        let err = validate(&[0xc3, 0x28], 7).unwrap_err();
        assert_eq!(err.code, ErrorCode::Utf8Invalid);
        assert_eq!(err.offset, 7);
    }
}
