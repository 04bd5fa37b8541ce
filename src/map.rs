//! Maps, encoded as a flat key/value sequence.
//!
//! The encoder writes definite maps; the decoder also accepts indefinite ones. Keys are passed
//! through in input order with no ordering or uniqueness check.

use alloc::vec::Vec;

use crate::generic::{Decoder, Encodeable};
use crate::head::{decode_len, encode_indef_head, encode_len_into, is_indef, peek_major, Major, BREAK};
use crate::{CborError, CborStream, ErrorCode};

/// Returns `true` if the next item is a map.
///
/// # Errors
///
/// Returns `UnexpectedEof` on empty input.
pub fn is_map(s: &CborStream<'_>) -> Result<bool, CborError> {
    Ok(peek_major(s)? == Major::Map)
}

fn encode_pairs_into<'e, I, K, V>(out: &mut Vec<u8>, pairs: I) -> usize
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<Encodeable<'e>>,
    V: Into<Encodeable<'e>>,
{
    let mut n = 0;
    for (k, v) in pairs {
        k.into().write_into(out);
        v.into().write_into(out);
        n += 1;
    }
    n
}

/// Encode key/value pairs as a definite-length map.
#[must_use]
pub fn encode_def_map<'e, I, K, V>(pairs: I) -> Vec<u8>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<Encodeable<'e>>,
    V: Into<Encodeable<'e>>,
{
    let mut body = Vec::new();
    let n = encode_pairs_into(&mut body, pairs);
    let mut out = Vec::with_capacity(body.len() + 9);
    encode_len_into(&mut out, Major::Map, n);
    out.extend_from_slice(&body);
    out
}

/// Encode key/value pairs as an indefinite-length map.
#[must_use]
pub fn encode_indef_map<'e, I, K, V>(pairs: I) -> Vec<u8>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<Encodeable<'e>>,
    V: Into<Encodeable<'e>>,
{
    let mut out = encode_indef_head(Major::Map).to_vec();
    encode_pairs_into(&mut out, pairs);
    out.push(BREAK);
    out
}

/// Encode key/value pairs as a map (always definite).
#[must_use]
pub fn encode_map<'e, I, K, V>(pairs: I) -> Vec<u8>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<Encodeable<'e>>,
    V: Into<Encodeable<'e>>,
{
    encode_def_map(pairs)
}

/// Consume a map head and call `entry` once per pair with the stream at the key.
///
/// `entry` must consume exactly one key and one value.
pub(crate) fn decode_map_entries<'a, F>(s: &mut CborStream<'a>, mut entry: F) -> Result<(), CborError>
where
    F: FnMut(&mut CborStream<'a>) -> Result<(), CborError>,
{
    if is_indef(s, Major::Map)? {
        s.read_u8()?;
        loop {
            if s.is_at_end() {
                return Err(CborError::new(ErrorCode::MissingBreak, s.position()));
            }
            if s.eat_break()? {
                return Ok(());
            }
            entry(s)?;
        }
    }
    let n = decode_len(s, Major::Map, ErrorCode::ExpectedMap)?;
    for _ in 0..n {
        entry(s)?;
    }
    Ok(())
}

/// Decode a map into its pairs, in input order.
///
/// # Errors
///
/// Returns `ExpectedMap` if the next item is not a map, `MissingBreak` for an unterminated
/// indefinite map, or the first key/value error.
pub fn decode_map<'a, K, V>(
    s: &mut CborStream<'a>,
    mut key_decoder: K,
    mut value_decoder: V,
) -> Result<Vec<(K::Output, V::Output)>, CborError>
where
    K: Decoder<'a>,
    V: Decoder<'a>,
{
    let mut out = Vec::new();
    decode_map_entries(s, |s| {
        let k = key_decoder.decode_from(s)?;
        let v = value_decoder.decode_from(s)?;
        out.push((k, v));
        Ok(())
    })?;
    Ok(out)
}
