//! Records encoded as maps from field key to field value.
//!
//! Keys are small integers (`ikey`) or text (`skey`). Decoding is table driven: each known key
//! has its own decoder, an unknown key is an error, and absent keys are simply missing from the
//! sparse result.

use alloc::borrow::Borrow;
use alloc::boxed::Box;
use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::generic::{Decoder, Encodeable};
use crate::int::{decode_u64, encode_int};
use crate::map::{decode_map_entries, encode_def_map, is_map};
use crate::string::{decode_string, encode_string};
use crate::{BigInt, CborError, CborStream, ErrorCode};

/// Returns `true` if the next item is an object (a map).
///
/// # Errors
///
/// Returns `UnexpectedEof` on empty input.
pub fn is_object(s: &CborStream<'_>) -> Result<bool, CborError> {
    is_map(s)
}

/// Encode fields keyed by integers.
#[must_use]
pub fn encode_object_ikey<'e, I, V>(fields: I) -> Vec<u8>
where
    I: IntoIterator<Item = (u64, V)>,
    V: Into<Encodeable<'e>>,
{
    encode_def_map(
        fields
            .into_iter()
            .map(|(k, v)| (encode_int(&BigInt::from(k)), v)),
    )
}

/// Encode fields keyed by text.
#[must_use]
pub fn encode_object_skey<'e, I, S, V>(fields: I) -> Vec<u8>
where
    I: IntoIterator<Item = (S, V)>,
    S: AsRef<str>,
    V: Into<Encodeable<'e>>,
{
    encode_def_map(
        fields
            .into_iter()
            .map(|(k, v)| (encode_string(k.as_ref(), false), v)),
    )
}

/// Key to decoder table for object decoding.
///
/// Every field decoder yields the same `T`, typically an enum over the record's field types.
pub struct ObjectDecoder<'f, 'a, K, T> {
    fields: BTreeMap<K, Box<dyn Decoder<'a, Output = T> + 'f>>,
}

impl<'f, 'a, K: Ord, T> ObjectDecoder<'f, 'a, K, T> {
    /// An empty table.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            fields: BTreeMap::new(),
        }
    }

    /// Register the decoder for `key`.
    #[must_use]
    pub fn field<D>(mut self, key: impl Into<K>, decoder: D) -> Self
    where
        D: Decoder<'a, Output = T> + 'f,
    {
        self.fields.insert(key.into(), Box::new(decoder));
        self
    }

    fn decode_with<Q, KD>(
        &mut self,
        s: &mut CborStream<'a>,
        mut key_decoder: KD,
    ) -> Result<BTreeMap<K, T>, CborError>
    where
        K: Borrow<Q> + From<KD::Output>,
        Q: Ord + ?Sized,
        KD: Decoder<'a>,
        KD::Output: Borrow<Q>,
    {
        let mut out = BTreeMap::new();
        decode_map_entries(s, |s| {
            let off = s.position();
            let key = key_decoder.decode_from(s)?;
            let decoder = self
                .fields
                .get_mut::<Q>(Borrow::<Q>::borrow(&key))
                .ok_or_else(|| CborError::new(ErrorCode::UnhandledField, off))?;
            let value = decoder.decode_from(s)?;
            out.insert(K::from(key), value);
            Ok(())
        })?;
        Ok(out)
    }
}

impl<K: Ord, T> Default for ObjectDecoder<'_, '_, K, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: fmt::Debug, T> fmt::Debug for ObjectDecoder<'_, '_, K, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.fields.keys()).finish()
    }
}

/// Decode an integer-keyed object into a sparse key to value map.
///
/// # Errors
///
/// Returns `ExpectedMap`, `ExpectedInteger` for a non-integer key, `UnhandledField` for a key
/// with no registered decoder, or the first field error.
pub fn decode_object_ikey<'a, T>(
    s: &mut CborStream<'a>,
    mut fields: ObjectDecoder<'_, 'a, u64, T>,
) -> Result<BTreeMap<u64, T>, CborError> {
    fields.decode_with::<u64, _>(s, decode_u64)
}

/// Decode a text-keyed object into a sparse key to value map.
///
/// # Errors
///
/// Returns `ExpectedMap`, `ExpectedText` for a non-text key, `UnhandledField` for a key with no
/// registered decoder, or the first field error.
pub fn decode_object_skey<'a, T>(
    s: &mut CborStream<'a>,
    mut fields: ObjectDecoder<'_, 'a, String, T>,
) -> Result<BTreeMap<String, T>, CborError> {
    fields.decode_with::<str, _>(s, decode_string)
}
