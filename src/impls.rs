//! [`ToCbor`] and [`FromCbor`] for standard types.

use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;
use core::ops::Deref;

use half::f16;

use crate::bytes::{decode_bytes, encode_bytes_into};
use crate::float::{
    decode_float, decode_float16, encode_float16, encode_float32, encode_float64,
};
use crate::generic::{decoder, Encodeable, FromCbor, ToCbor};
use crate::int::{decode_int, encode_int_into};
use crate::list::{decode_list, encode_list};
use crate::map::{decode_map, encode_def_map};
use crate::option::decode_option;
use crate::scalar::{decode_bool, decode_null, encode_bool, encode_null};
use crate::string::{decode_string, encode_string};
use crate::{BigInt, CborError, CborStream, ErrorCode};

impl ToCbor for bool {
    fn encode_cbor(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&encode_bool(*self));
    }
}

impl FromCbor for bool {
    fn from_cbor(s: &mut CborStream<'_>) -> Result<Self, CborError> {
        decode_bool(s)
    }
}

impl ToCbor for () {
    fn encode_cbor(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&encode_null());
    }
}

impl FromCbor for () {
    fn from_cbor(s: &mut CborStream<'_>) -> Result<Self, CborError> {
        decode_null(s)
    }
}

impl ToCbor for BigInt {
    fn encode_cbor(&self, out: &mut Vec<u8>) {
        encode_int_into(out, self);
    }
}

impl FromCbor for BigInt {
    fn from_cbor(s: &mut CborStream<'_>) -> Result<Self, CborError> {
        decode_int(s)
    }
}

macro_rules! impl_int {
    ($($t:ty),*) => {$(
        impl ToCbor for $t {
            fn encode_cbor(&self, out: &mut Vec<u8>) {
                encode_int_into(out, &BigInt::from(*self));
            }
        }

        impl FromCbor for $t {
            fn from_cbor(s: &mut CborStream<'_>) -> Result<Self, CborError> {
                let off = s.position();
                let n = decode_int(s)?;
                <$t>::try_from(&n).map_err(|err| CborError::new(err.code, off))
            }
        }
    )*};
}

impl_int!(u8, u16, u32, u64, usize, u128, i8, i16, i32, i64, isize, i128);

impl ToCbor for f16 {
    fn encode_cbor(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&encode_float16(*self));
    }
}

impl FromCbor for f16 {
    fn from_cbor(s: &mut CborStream<'_>) -> Result<Self, CborError> {
        decode_float16(s)
    }
}

impl ToCbor for f32 {
    fn encode_cbor(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&encode_float32(*self));
    }
}

impl FromCbor for f32 {
    /// Accepts float16 and float32; a float64 is rejected rather than rounded.
    fn from_cbor(s: &mut CborStream<'_>) -> Result<Self, CborError> {
        let off = s.position();
        if crate::float::is_float64(s)? {
            return Err(CborError::new(ErrorCode::ExpectedFloat32, off));
        }
        let v = decode_float(s)?;
        #[allow(clippy::cast_possible_truncation)]
        let v = v as f32;
        Ok(v)
    }
}

impl ToCbor for f64 {
    fn encode_cbor(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&encode_float64(*self));
    }
}

impl FromCbor for f64 {
    fn from_cbor(s: &mut CborStream<'_>) -> Result<Self, CborError> {
        decode_float(s)
    }
}

impl ToCbor for str {
    fn encode_cbor(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&encode_string(self, false));
    }
}

impl ToCbor for String {
    fn encode_cbor(&self, out: &mut Vec<u8>) {
        self.as_str().encode_cbor(out);
    }
}

impl FromCbor for String {
    fn from_cbor(s: &mut CborStream<'_>) -> Result<Self, CborError> {
        decode_string(s)
    }
}

/// A byte string.
///
/// `Vec<u8>` already means "a list of small integers" through the blanket `Vec<T>` impl, so raw
/// bytes go through this wrapper.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Bytes(pub Vec<u8>);

impl Bytes {
    /// Unwrap the bytes.
    #[must_use]
    pub fn into_inner(self) -> Vec<u8> {
        self.0
    }
}

impl Deref for Bytes {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.0
    }
}

impl AsRef<[u8]> for Bytes {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<Vec<u8>> for Bytes {
    fn from(v: Vec<u8>) -> Self {
        Self(v)
    }
}

impl From<&[u8]> for Bytes {
    fn from(v: &[u8]) -> Self {
        Self(v.to_vec())
    }
}

impl ToCbor for Bytes {
    fn encode_cbor(&self, out: &mut Vec<u8>) {
        encode_bytes_into(out, &self.0, false);
    }
}

impl FromCbor for Bytes {
    fn from_cbor(s: &mut CborStream<'_>) -> Result<Self, CborError> {
        decode_bytes(s).map(Self)
    }
}

impl<T: ToCbor + ?Sized> ToCbor for &T {
    fn encode_cbor(&self, out: &mut Vec<u8>) {
        (**self).encode_cbor(out);
    }
}

impl<T: ToCbor> ToCbor for [T] {
    fn encode_cbor(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&encode_list(self.iter().map(|v| Encodeable::Value(v))));
    }
}

impl<T: ToCbor> ToCbor for Vec<T> {
    fn encode_cbor(&self, out: &mut Vec<u8>) {
        self.as_slice().encode_cbor(out);
    }
}

impl<T: FromCbor> FromCbor for Vec<T> {
    fn from_cbor(s: &mut CborStream<'_>) -> Result<Self, CborError> {
        decode_list(s, decoder::<T>())
    }
}

impl<T: ToCbor> ToCbor for Option<T> {
    fn encode_cbor(&self, out: &mut Vec<u8>) {
        match self {
            Some(v) => v.encode_cbor(out),
            None => out.extend_from_slice(&encode_null()),
        }
    }
}

impl<T: FromCbor> FromCbor for Option<T> {
    fn from_cbor(s: &mut CborStream<'_>) -> Result<Self, CborError> {
        decode_option(s, decoder::<T>())
    }
}

impl<K: ToCbor, V: ToCbor> ToCbor for BTreeMap<K, V> {
    fn encode_cbor(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&encode_def_map(
            self.iter()
                .map(|(k, v)| (Encodeable::Value(k), Encodeable::Value(v))),
        ));
    }
}

impl<K: FromCbor + Ord, V: FromCbor> FromCbor for BTreeMap<K, V> {
    /// Later duplicates of a key replace earlier ones.
    fn from_cbor(s: &mut CborStream<'_>) -> Result<Self, CborError> {
        let pairs = decode_map(s, decoder::<K>(), decoder::<V>())?;
        Ok(pairs.into_iter().collect())
    }
}

macro_rules! impl_tuple {
    ($($t:ident $i:tt),+) => {
        impl<$($t: ToCbor),+> ToCbor for ($($t,)+) {
            fn encode_cbor(&self, out: &mut Vec<u8>) {
                out.extend_from_slice(&crate::tuple::encode_tuple([
                    $(Encodeable::Value(&self.$i)),+
                ]));
            }
        }

        impl<$($t: FromCbor),+> FromCbor for ($($t,)+) {
            fn from_cbor(s: &mut CborStream<'_>) -> Result<Self, CborError> {
                let (items, ()) = crate::tuple::decode_tuple(s, ($(decoder::<$t>(),)+), ())?;
                Ok(items)
            }
        }
    };
}

impl_tuple!(A 0);
impl_tuple!(A 0, B 1);
impl_tuple!(A 0, B 1, C 2);
impl_tuple!(A 0, B 1, C 2, D 3);
impl_tuple!(A 0, B 1, C 2, D 3, E 4);
impl_tuple!(A 0, B 1, C 2, D 3, E 4, F 5);
impl_tuple!(A 0, B 1, C 2, D 3, E 4, F 5, G 6);
impl_tuple!(A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7);
