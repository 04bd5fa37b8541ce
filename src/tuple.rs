//! Tuples: lists decoded positionally by a fixed group of decoders.

use alloc::vec::Vec;

use crate::generic::{Decoders, Encodeable};
use crate::list::{decode_list_lazy, encode_def_list, is_list, ListReader};
use crate::{CborError, CborStream};

/// Returns `true` if the next item is a tuple (a list).
///
/// # Errors
///
/// Returns `UnexpectedEof` on empty input.
pub fn is_tuple(s: &CborStream<'_>) -> Result<bool, CborError> {
    is_list(s)
}

/// Encode items as a tuple (a definite-length list).
#[must_use]
pub fn encode_tuple<'e, I>(items: I) -> Vec<u8>
where
    I: IntoIterator,
    I::Item: Into<Encodeable<'e>>,
{
    encode_def_list(items)
}

/// Decode a tuple with mandatory `required` decoders followed by `optional` ones.
///
/// Optional positions past the end of the input come back as `None`.
///
/// # Errors
///
/// Returns `TooFewItems` if fewer items than required decoders are present, `TooManyItems` if
/// more items than decoders are present, or the first item error.
pub fn decode_tuple<'a, R, O>(
    s: &mut CborStream<'a>,
    required: R,
    optional: O,
) -> Result<(R::Output, O::OptionalOutput), CborError>
where
    R: Decoders<'a>,
    O: Decoders<'a>,
{
    let mut r = decode_list_lazy(s)?;
    let head = required.decode_required(&mut r)?;
    let tail = optional.decode_optional(&mut r)?;
    r.finish()?;
    Ok((head, tail))
}

/// Consume a tuple head and return a reader over its items.
///
/// # Errors
///
/// Returns `ExpectedList` if the next item is not a list.
pub fn decode_tuple_lazy<'s, 'a>(s: &'s mut CborStream<'a>) -> Result<ListReader<'s, 'a>, CborError> {
    decode_list_lazy(s)
}
