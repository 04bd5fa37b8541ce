use alloc::vec::Vec;

use crate::head::{decode_def_head, encode_def_head, peek_major, Major};
use crate::{CborError, CborStream, ErrorCode};

/// Returns `true` if the next item is a tag.
///
/// # Errors
///
/// Returns `UnexpectedEof` on empty input.
pub fn is_tag(s: &CborStream<'_>) -> Result<bool, CborError> {
    Ok(peek_major(s)? == Major::Tag)
}

/// Encode a tag head; the tagged item must follow.
#[must_use]
pub fn encode_tag(tag: u64) -> Vec<u8> {
    encode_def_head(Major::Tag, tag)
}

/// Decode a tag head and return the tag number, leaving the stream at the tagged item.
///
/// # Errors
///
/// Returns `ExpectedTag` if the next item is not a tag.
pub fn decode_tag(s: &mut CborStream<'_>) -> Result<u64, CborError> {
    let off = s.position();
    if !is_tag(s)? {
        return Err(CborError::new(ErrorCode::ExpectedTag, off));
    }
    decode_def_head(s).map(|(_, tag)| tag)
}

/// Read the tag number of the next item without consuming it.
///
/// # Errors
///
/// Same as [`decode_tag`].
pub fn peek_tag(s: &CborStream<'_>) -> Result<u64, CborError> {
    let mut look = *s;
    decode_tag(&mut look)
}
