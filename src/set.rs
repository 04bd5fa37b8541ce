//! Sets: lists optionally prefixed by tag 258.

use alloc::vec::Vec;

use crate::generic::{Decoder, Encodeable};
use crate::list::{decode_list, encode_def_list};
use crate::tag::{decode_tag, encode_tag, is_tag, peek_tag};
use crate::{CborError, CborStream, ErrorCode};

/// Tag number marking a set.
pub const SET_TAG: u64 = 258;

/// Returns `true` if the next item is a list tagged 258.
///
/// An untagged list decodes as a set but is not reported as one.
///
/// # Errors
///
/// Returns `UnexpectedEof` on empty input.
pub fn is_set(s: &CborStream<'_>) -> Result<bool, CborError> {
    Ok(is_tag(s)? && peek_tag(s)? == SET_TAG)
}

/// Encode items as tag 258 over a definite-length list.
#[must_use]
pub fn encode_set<'e, I>(items: I) -> Vec<u8>
where
    I: IntoIterator,
    I::Item: Into<Encodeable<'e>>,
{
    let mut out = encode_tag(SET_TAG);
    out.extend_from_slice(&encode_def_list(items));
    out
}

/// Decode a set, with or without its 258 tag.
///
/// # Errors
///
/// Returns `UnexpectedTag` for any other tag, `ExpectedList` if no list follows, or the first
/// item error.
pub fn decode_set<'a, D: Decoder<'a>>(
    s: &mut CborStream<'a>,
    decoder: D,
) -> Result<Vec<D::Output>, CborError> {
    if is_tag(s)? {
        let off = s.position();
        if decode_tag(s)? != SET_TAG {
            return Err(CborError::new(ErrorCode::UnexpectedTag, off));
        }
    }
    decode_list(s, decoder)
}
