//! Constructor-tagged data: a variant index carried in the tag, fields in a list.
//!
//! | index      | tag                                  |
//! |------------|--------------------------------------|
//! | `0..=6`    | `121 + index`                        |
//! | `7..=127`  | `1280 + (index - 7)`                 |
//! | `128..`    | `102`, then `[index, fields]`        |

use alloc::vec::Vec;

use crate::generic::{Decoder, Decoders, Encodeable};
use crate::head::{decode_def_head, encode_head_into, peek_major, Major};
use crate::int::{decode_u64, encode_int_into};
use crate::list::{decode_list, decode_list_lazy, encode_list, ListReader};
use crate::tag::decode_tag;
use crate::{BigInt, CborError, CborStream, ErrorCode};

const ESCAPE_TAG: u64 = 102;
const SMALL_BASE: u64 = 121;
const SMALL_LAST: u64 = 127;
const LARGE_BASE: u64 = 1280;
const LARGE_LAST: u64 = 1400;
const LARGE_FIRST_INDEX: u64 = 7;

const fn is_constr_tag(tag: u64) -> bool {
    matches!(tag, ESCAPE_TAG | SMALL_BASE..=SMALL_LAST | LARGE_BASE..=LARGE_LAST)
}

/// Returns `true` if the next item is a tag in one of the constructor ranges.
///
/// # Errors
///
/// Returns `UnexpectedEof` on empty input, or a header error for a malformed tag head.
pub fn is_constr(s: &CborStream<'_>) -> Result<bool, CborError> {
    if peek_major(s)? != Major::Tag {
        return Ok(false);
    }
    let mut look = *s;
    let (_, tag) = decode_def_head(&mut look)?;
    Ok(is_constr_tag(tag))
}

/// Append the tag part of a constructor with variant `index` to `out`.
pub fn encode_constr_tag_into(out: &mut Vec<u8>, index: u64) {
    match index {
        0..=6 => encode_head_into(out, Major::Tag, SMALL_BASE + index),
        LARGE_FIRST_INDEX..=127 => {
            encode_head_into(out, Major::Tag, LARGE_BASE + (index - LARGE_FIRST_INDEX));
        }
        _ => {
            encode_head_into(out, Major::Tag, ESCAPE_TAG);
            encode_head_into(out, Major::List, 2);
            encode_int_into(out, &BigInt::from(index));
        }
    }
}

/// Encode a constructor: the tag for `index`, then `fields` as a list.
///
/// Zero fields give the definite empty list; otherwise the list is indefinite.
#[must_use]
pub fn encode_constr<'e, I>(index: u64, fields: I) -> Vec<u8>
where
    I: IntoIterator,
    I::Item: Into<Encodeable<'e>>,
{
    let mut out = Vec::new();
    encode_constr_tag_into(&mut out, index);
    out.extend_from_slice(&encode_list(fields));
    out
}

/// Decode the tag part of a constructor and return the variant index, leaving the stream at the
/// field list.
///
/// # Errors
///
/// Returns `ExpectedTag` if no tag is present, `ConstrTagOutOfRange` for tags outside the
/// constructor ranges, and `MalformedConstrEscape` if a tag-102 payload does not start with a
/// definite two-element list head.
pub fn decode_constr_tag(s: &mut CborStream<'_>) -> Result<u64, CborError> {
    let off = s.position();
    let tag = decode_tag(s)?;
    match tag {
        ESCAPE_TAG => {
            let inner = s.position();
            match decode_def_head(s) {
                Ok((Major::List, 2)) => decode_u64(s),
                Ok(_) | Err(_) => Err(CborError::new(ErrorCode::MalformedConstrEscape, inner)),
            }
        }
        SMALL_BASE..=SMALL_LAST => Ok(tag - SMALL_BASE),
        LARGE_BASE..=LARGE_LAST => Ok(tag - LARGE_BASE + LARGE_FIRST_INDEX),
        _ => Err(CborError::new(ErrorCode::ConstrTagOutOfRange, off)),
    }
}

/// Decode a constructor whose fields all share one decoder.
///
/// # Errors
///
/// Same as [`decode_constr_tag`], plus list and field errors.
pub fn decode_constr<'a, D: Decoder<'a>>(
    s: &mut CborStream<'a>,
    field_decoder: D,
) -> Result<(u64, Vec<D::Output>), CborError> {
    let index = decode_constr_tag(s)?;
    let fields = decode_list(s, field_decoder)?;
    Ok((index, fields))
}

/// Decode a constructor with one decoder per field position.
///
/// # Errors
///
/// Same as [`decode_constr`], plus `TooFewItems`/`TooManyItems` unless the field count equals
/// the number of decoders.
pub fn decode_constr_fields<'a, F: Decoders<'a>>(
    s: &mut CborStream<'a>,
    field_decoders: F,
) -> Result<(u64, F::Output), CborError> {
    let index = decode_constr_tag(s)?;
    let mut r = decode_list_lazy(s)?;
    let fields = field_decoders.decode_required(&mut r)?;
    r.finish()?;
    Ok((index, fields))
}

/// Decode the constructor tag and return it with a reader over the fields.
///
/// # Errors
///
/// Same as [`decode_constr_tag`], plus `ExpectedList` if no field list follows.
pub fn decode_constr_lazy<'s, 'a>(
    s: &'s mut CborStream<'a>,
) -> Result<(u64, ListReader<'s, 'a>), CborError> {
    let index = decode_constr_tag(s)?;
    Ok((index, decode_list_lazy(s)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tag_bytes(index: u64) -> Vec<u8> {
        let mut out = Vec::new();
        encode_constr_tag_into(&mut out, index);
        out
    }

    #[test]
    fn range_edges() {
        assert_eq!(tag_bytes(0), [0xd8, 121]);
        assert_eq!(tag_bytes(6), [0xd8, 127]);
        assert_eq!(tag_bytes(7), [0xd9, 0x05, 0x00]);
        assert_eq!(tag_bytes(127), [0xd9, 0x05, 0x78]);
        assert_eq!(tag_bytes(128), [0xd8, 102, 0x82, 0x18, 128]);
    }

    #[test]
    fn tag_round_trips_across_ranges() {
        for index in [0, 3, 6, 7, 100, 127, 128, 1000, u64::MAX] {
            let bytes = tag_bytes(index);
            let mut s = CborStream::new(&bytes);
            assert_eq!(decode_constr_tag(&mut s).unwrap(), index);
            assert!(s.is_at_end());
        }
    }

    #[test]
    fn gaps_are_rejected() {
        for tag in [101, 103, 120, 128, 1279, 1401] {
            let bytes = crate::tag::encode_tag(tag);
            let err = decode_constr_tag(&mut CborStream::new(&bytes)).unwrap_err();
            assert_eq!(err.code, ErrorCode::ConstrTagOutOfRange, "tag {tag}");
            assert!(!is_constr(&CborStream::new(&bytes)).unwrap());
        }
    }

    #[test]
    fn escape_requires_two_element_list() {
        let bytes = [0xd8, 102, 0x83, 0x18, 200, 0x80, 0x80];
        let err = decode_constr_tag(&mut CborStream::new(&bytes)).unwrap_err();
        assert_eq!(err.code, ErrorCode::MalformedConstrEscape);
        assert_eq!(err.offset, 2);
    }
}
