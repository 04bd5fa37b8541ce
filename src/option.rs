use alloc::vec::Vec;

use crate::generic::Decoder;
use crate::scalar::{decode_null, encode_null, is_null};
use crate::{CborError, CborStream};

/// Encode `Some(v)` with `encode_some`, and `None` as `null`.
pub fn encode_option<T>(option: Option<T>, encode_some: impl FnOnce(T) -> Vec<u8>) -> Vec<u8> {
    option.map_or_else(encode_null, encode_some)
}

/// Decode `null` as `None`, anything else with `decoder`.
///
/// # Errors
///
/// Returns the decoder's error.
pub fn decode_option<'a, D: Decoder<'a>>(
    s: &mut CborStream<'a>,
    mut decoder: D,
) -> Result<Option<D::Output>, CborError> {
    if is_null(s)? {
        decode_null(s)?;
        return Ok(None);
    }
    decoder.decode_from(s).map(Some)
}
