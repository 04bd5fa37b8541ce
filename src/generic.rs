//! Decoder and encodeable polymorphism.
//!
//! A [`Decoder`] is either a plain function over the stream or a [`SelfDecoding`] marker for a
//! [`FromCbor`] type. An [`Encodeable`] is either already-encoded bytes or a [`ToCbor`] value.
//! Every composite codec accepts these shapes interchangeably.

use alloc::borrow::Cow;
use alloc::vec::Vec;
use core::fmt;
use core::marker::PhantomData;

use crate::list::ListReader;
use crate::{CborError, CborStream, ErrorCode};

/// Types that can be constructed by decoding one item from a stream.
pub trait FromCbor: Sized {
    /// Decode one item, advancing the stream past it.
    ///
    /// # Errors
    ///
    /// Returns the first error encountered while decoding.
    fn from_cbor(s: &mut CborStream<'_>) -> Result<Self, CborError>;
}

/// Types that can be serialized as one CBOR item.
pub trait ToCbor {
    /// Append the encoding of `self` to `out`.
    fn encode_cbor(&self, out: &mut Vec<u8>);

    /// Encode `self` into a fresh buffer.
    fn to_cbor(&self) -> Vec<u8> {
        let mut out = Vec::new();
        self.encode_cbor(&mut out);
        out
    }
}

/// Something that decodes one item from a stream positioned at it.
pub trait Decoder<'a> {
    /// The decoded value.
    type Output;

    /// Decode one item, advancing the stream past it.
    ///
    /// # Errors
    ///
    /// Returns the first error encountered while decoding.
    fn decode_from(&mut self, s: &mut CborStream<'a>) -> Result<Self::Output, CborError>;
}

impl<'a, T, F> Decoder<'a> for F
where
    F: FnMut(&mut CborStream<'a>) -> Result<T, CborError>,
{
    type Output = T;

    #[inline]
    fn decode_from(&mut self, s: &mut CborStream<'a>) -> Result<T, CborError> {
        self(s)
    }
}

/// Decoder for any [`FromCbor`] type.
pub struct SelfDecoding<T>(PhantomData<fn() -> T>);

impl<T> SelfDecoding<T> {
    /// Create the decoder.
    #[must_use]
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T> Default for SelfDecoding<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for SelfDecoding<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for SelfDecoding<T> {}

impl<T> fmt::Debug for SelfDecoding<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SelfDecoding")
    }
}

impl<'a, T: FromCbor> Decoder<'a> for SelfDecoding<T> {
    type Output = T;

    #[inline]
    fn decode_from(&mut self, s: &mut CborStream<'a>) -> Result<T, CborError> {
        T::from_cbor(s)
    }
}

/// Shorthand for [`SelfDecoding::new`].
#[must_use]
pub const fn decoder<T: FromCbor>() -> SelfDecoding<T> {
    SelfDecoding::new()
}

/// Run `decoder` on the stream.
///
/// # Errors
///
/// Returns whatever the decoder returns.
#[inline]
pub fn decode_generic<'a, D: Decoder<'a>>(
    s: &mut CborStream<'a>,
    mut decoder: D,
) -> Result<D::Output, CborError> {
    decoder.decode_from(s)
}

/// Decode exactly one item from `bytes`.
///
/// # Errors
///
/// Returns the decoder's error, or `TrailingBytes` if input remains after the item.
pub fn decode_exact<'a, D: Decoder<'a>>(
    bytes: &'a [u8],
    decoder: D,
) -> Result<D::Output, CborError> {
    let mut s = CborStream::new(bytes);
    let v = decode_generic(&mut s, decoder)?;
    if !s.is_at_end() {
        return Err(CborError::new(ErrorCode::TrailingBytes, s.position()));
    }
    Ok(v)
}

/// Decode exactly one `T` from `bytes`.
///
/// # Errors
///
/// Same as [`decode_exact`].
pub fn from_cbor_bytes<T: FromCbor>(bytes: &[u8]) -> Result<T, CborError> {
    decode_exact(bytes, decoder::<T>())
}

/// An item ready to be placed into a container: raw encoded bytes or a [`ToCbor`] value.
pub enum Encodeable<'a> {
    /// Already-encoded CBOR.
    Encoded(Cow<'a, [u8]>),
    /// A value encoded on demand.
    Value(&'a dyn ToCbor),
}

impl<'a> Encodeable<'a> {
    /// Wrap a [`ToCbor`] value.
    #[must_use]
    pub fn value<T: ToCbor>(v: &'a T) -> Self {
        Self::Value(v)
    }

    /// Append the encoded bytes to `out`.
    pub fn write_into(&self, out: &mut Vec<u8>) {
        match self {
            Self::Encoded(bytes) => out.extend_from_slice(bytes),
            Self::Value(v) => v.encode_cbor(out),
        }
    }
}

impl fmt::Debug for Encodeable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Encoded(bytes) => f.debug_tuple("Encoded").field(bytes).finish(),
            Self::Value(_) => f.write_str("Value(..)"),
        }
    }
}

impl From<Vec<u8>> for Encodeable<'_> {
    fn from(bytes: Vec<u8>) -> Self {
        Self::Encoded(Cow::Owned(bytes))
    }
}

impl<'a> From<&'a [u8]> for Encodeable<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        Self::Encoded(Cow::Borrowed(bytes))
    }
}

impl<'a> From<&'a Vec<u8>> for Encodeable<'a> {
    fn from(bytes: &'a Vec<u8>) -> Self {
        Self::Encoded(Cow::Borrowed(bytes))
    }
}

impl<'a, const N: usize> From<&'a [u8; N]> for Encodeable<'a> {
    fn from(bytes: &'a [u8; N]) -> Self {
        Self::Encoded(Cow::Borrowed(bytes))
    }
}

impl<'a> From<&'a dyn ToCbor> for Encodeable<'a> {
    fn from(v: &'a dyn ToCbor) -> Self {
        Self::Value(v)
    }
}

/// Normalize an encodeable into its bytes.
#[must_use]
pub fn encode_generic<'e>(item: impl Into<Encodeable<'e>>) -> Vec<u8> {
    match item.into() {
        Encodeable::Encoded(bytes) => bytes.into_owned(),
        Encodeable::Value(v) => v.to_cbor(),
    }
}

/// A fixed, ordered group of decoders applied positionally to list items.
///
/// Implemented for tuples of up to twelve [`Decoder`]s.
pub trait Decoders<'a> {
    /// Tuple of decoded values.
    type Output;
    /// Tuple of decoded values, each absent once the list is exhausted.
    type OptionalOutput;
    /// Number of decoders in the group.
    const LEN: usize;

    /// Decode one item per decoder, failing with `TooFewItems` if the list ends early.
    ///
    /// # Errors
    ///
    /// Returns the first item error or `TooFewItems`.
    fn decode_required(self, r: &mut ListReader<'_, 'a>) -> Result<Self::Output, CborError>;

    /// Decode one item per decoder while items remain; the rest come back as `None`.
    ///
    /// # Errors
    ///
    /// Returns the first item error.
    fn decode_optional(self, r: &mut ListReader<'_, 'a>)
        -> Result<Self::OptionalOutput, CborError>;
}

macro_rules! impl_decoders {
    ($len:expr; $($d:ident),*) => {
        impl<'a, $($d: Decoder<'a>),*> Decoders<'a> for ($($d,)*) {
            type Output = ($($d::Output,)*);
            type OptionalOutput = ($(Option<$d::Output>,)*);
            const LEN: usize = $len;

            #[allow(non_snake_case, unused_variables)]
            fn decode_required(
                self,
                r: &mut ListReader<'_, 'a>,
            ) -> Result<Self::Output, CborError> {
                let ($($d,)*) = self;
                Ok(($(r.next_required($d)?,)*))
            }

            #[allow(non_snake_case, unused_variables)]
            fn decode_optional(
                self,
                r: &mut ListReader<'_, 'a>,
            ) -> Result<Self::OptionalOutput, CborError> {
                let ($($d,)*) = self;
                Ok(($(r.next_opt($d)?,)*))
            }
        }
    };
}

impl_decoders!(0;);
impl_decoders!(1; D0);
impl_decoders!(2; D0, D1);
impl_decoders!(3; D0, D1, D2);
impl_decoders!(4; D0, D1, D2, D3);
impl_decoders!(5; D0, D1, D2, D3, D4);
impl_decoders!(6; D0, D1, D2, D3, D4, D5);
impl_decoders!(7; D0, D1, D2, D3, D4, D5, D6);
impl_decoders!(8; D0, D1, D2, D3, D4, D5, D6, D7);
impl_decoders!(9; D0, D1, D2, D3, D4, D5, D6, D7, D8);
impl_decoders!(10; D0, D1, D2, D3, D4, D5, D6, D7, D8, D9);
impl_decoders!(11; D0, D1, D2, D3, D4, D5, D6, D7, D8, D9, D10);
impl_decoders!(12; D0, D1, D2, D3, D4, D5, D6, D7, D8, D9, D10, D11);
