use alloc::string::String;
use alloc::vec::Vec;
use core::cmp::Ordering;
use core::fmt;

use crate::bytes::{decode_bytes, encode_bytes_into};
use crate::head::{decode_def_head, encode_head_into, peek_major, peek_major_and_minor, Major};
use crate::{CborError, CborStream, ErrorCode};

const TAG_POS_BIGNUM: u64 = 2;
const TAG_NEG_BIGNUM: u64 = 3;

/// An arbitrary-precision signed integer.
///
/// Stored as a sign flag plus the minimal big-endian magnitude (no leading zero bytes; zero has
/// an empty magnitude and is never negative), so derived equality is numeric equality.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct BigInt {
    negative: bool,
    magnitude: Vec<u8>,
}

impl BigInt {
    /// Zero.
    #[must_use]
    pub const fn zero() -> Self {
        Self {
            negative: false,
            magnitude: Vec::new(),
        }
    }

    /// Construct from a sign flag and a big-endian magnitude.
    ///
    /// Leading zero bytes are stripped and negative zero is normalized to zero.
    #[must_use]
    pub fn from_be_bytes(negative: bool, magnitude: &[u8]) -> Self {
        let start = magnitude
            .iter()
            .position(|&b| b != 0)
            .unwrap_or(magnitude.len());
        let magnitude = magnitude[start..].to_vec();
        Self {
            negative: negative && !magnitude.is_empty(),
            magnitude,
        }
    }

    /// Returns `true` if this integer is below zero.
    #[inline]
    #[must_use]
    pub const fn is_negative(&self) -> bool {
        self.negative
    }

    /// Returns `true` if this integer is zero.
    #[inline]
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.magnitude.is_empty()
    }

    /// The minimal big-endian magnitude (`|self|`).
    #[inline]
    #[must_use]
    pub fn magnitude(&self) -> &[u8] {
        &self.magnitude
    }

    fn magnitude_u128(&self) -> Option<u128> {
        if self.magnitude.len() > 16 {
            return None;
        }
        let mut buf = [0u8; 16];
        buf[16 - self.magnitude.len()..].copy_from_slice(&self.magnitude);
        Some(u128::from_be_bytes(buf))
    }

    fn magnitude_u64(&self) -> Option<u64> {
        self.magnitude_u128().and_then(|m| u64::try_from(m).ok())
    }

    fn from_u128_signed(negative: bool, magnitude: u128) -> Self {
        Self::from_be_bytes(negative, &magnitude.to_be_bytes())
    }
}

/// `mag + 1` on a minimal big-endian magnitude.
fn increment(mag: &mut Vec<u8>) {
    for b in mag.iter_mut().rev() {
        if *b == 0xff {
            *b = 0;
        } else {
            *b += 1;
            return;
        }
    }
    mag.insert(0, 1);
}

/// `mag - 1` on a non-zero minimal big-endian magnitude; the result stays minimal.
fn decrement(mag: &mut Vec<u8>) {
    for b in mag.iter_mut().rev() {
        if *b == 0 {
            *b = 0xff;
        } else {
            *b -= 1;
            break;
        }
    }
    if mag.first() == Some(&0) {
        mag.remove(0);
    }
}

/// Divide a big-endian magnitude by `divisor` in place, returning the remainder.
fn div_rem_small(mag: &mut Vec<u8>, divisor: u8) -> u8 {
    let mut rem: u16 = 0;
    for b in mag.iter_mut() {
        let cur = (rem << 8) | u16::from(*b);
        *b = (cur / u16::from(divisor)) as u8;
        rem = cur % u16::from(divisor);
    }
    let start = mag.iter().position(|&b| b != 0).unwrap_or(mag.len());
    mag.drain(..start);
    rem as u8
}

impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        let by_magnitude = self
            .magnitude
            .len()
            .cmp(&other.magnitude.len())
            .then_with(|| self.magnitude.cmp(&other.magnitude));
        match (self.negative, other.negative) {
            (false, false) => by_magnitude,
            (true, true) => by_magnitude.reverse(),
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
        }
    }
}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return f.write_str("0");
        }
        let mut mag = self.magnitude.clone();
        let mut digits = Vec::new();
        while !mag.is_empty() {
            digits.push(b'0' + div_rem_small(&mut mag, 10));
        }
        let s: String = digits.iter().rev().map(|&d| char::from(d)).collect();
        f.pad_integral(!self.negative, "", &s)
    }
}

macro_rules! bigint_from_unsigned {
    ($($t:ty),*) => {$(
        impl From<$t> for BigInt {
            fn from(v: $t) -> Self {
                Self::from_u128_signed(false, v as u128)
            }
        }
    )*};
}

macro_rules! bigint_from_signed {
    ($($t:ty),*) => {$(
        impl From<$t> for BigInt {
            fn from(v: $t) -> Self {
                Self::from_u128_signed(v < 0, v.unsigned_abs() as u128)
            }
        }
    )*};
}

bigint_from_unsigned!(u8, u16, u32, u64, usize, u128);
bigint_from_signed!(i8, i16, i32, i64, isize, i128);

macro_rules! bigint_try_into {
    ($($t:ty),*) => {$(
        impl TryFrom<&BigInt> for $t {
            type Error = CborError;

            fn try_from(v: &BigInt) -> Result<Self, Self::Error> {
                let overflow = || CborError::new(ErrorCode::IntegerOverflow, 0);
                let mag = v.magnitude_u128().ok_or_else(overflow)?;
                if v.negative {
                    let neg = match i128::try_from(mag) {
                        Ok(m) => -m,
                        Err(_) if mag == i128::MIN.unsigned_abs() => i128::MIN,
                        Err(_) => return Err(overflow()),
                    };
                    <$t>::try_from(neg).map_err(|_| overflow())
                } else {
                    <$t>::try_from(mag).map_err(|_| overflow())
                }
            }
        }

        impl TryFrom<BigInt> for $t {
            type Error = CborError;

            fn try_from(v: BigInt) -> Result<Self, Self::Error> {
                <$t>::try_from(&v)
            }
        }
    )*};
}

bigint_try_into!(u8, u16, u32, u64, usize, u128, i8, i16, i32, i64, isize, i128);

/// Returns `true` if the next item is an integer: major 0/1, or a bignum tag 2/3.
///
/// # Errors
///
/// Returns `UnexpectedEof` on empty input.
pub fn is_int(s: &CborStream<'_>) -> Result<bool, CborError> {
    let (major, minor) = peek_major_and_minor(s)?;
    Ok(match major {
        Major::Unsigned | Major::Negative => true,
        Major::Tag => u64::from(minor) == TAG_POS_BIGNUM || u64::from(minor) == TAG_NEG_BIGNUM,
        _ => false,
    })
}

/// Append the encoding of `n` to `out`.
///
/// Values in `[-2^64, 2^64-1]` use major 0/1; everything else uses bignum tag 2/3 over a
/// byte-string magnitude (for negatives the magnitude is `-n - 1`).
pub fn encode_int_into(out: &mut Vec<u8>, n: &BigInt) {
    if !n.negative {
        match n.magnitude_u64() {
            Some(v) => encode_head_into(out, Major::Unsigned, v),
            None => {
                encode_head_into(out, Major::Tag, TAG_POS_BIGNUM);
                encode_bytes_into(out, &n.magnitude, false);
            }
        }
        return;
    }

    let mut arg = n.magnitude.clone();
    decrement(&mut arg);
    let arg = BigInt::from_be_bytes(false, &arg);
    match arg.magnitude_u64() {
        Some(v) => encode_head_into(out, Major::Negative, v),
        None => {
            encode_head_into(out, Major::Tag, TAG_NEG_BIGNUM);
            encode_bytes_into(out, &arg.magnitude, false);
        }
    }
}

/// Encode an arbitrary-precision integer.
#[must_use]
pub fn encode_int(n: &BigInt) -> Vec<u8> {
    let mut out = Vec::new();
    encode_int_into(&mut out, n);
    out
}

/// Decode an integer (major 0/1 or bignum tag 2/3) into a [`BigInt`].
///
/// # Errors
///
/// Returns `ExpectedInteger` for non-integer items and `UnexpectedTag` for tags other than 2/3.
pub fn decode_int(s: &mut CborStream<'_>) -> Result<BigInt, CborError> {
    let off = s.position();
    let major = peek_major(s)?;
    if !matches!(major, Major::Unsigned | Major::Negative | Major::Tag) {
        return Err(CborError::new(ErrorCode::ExpectedInteger, off));
    }
    let (major, n) = decode_def_head(s)?;
    match major {
        Major::Unsigned => Ok(BigInt::from(n)),
        Major::Negative => Ok(BigInt::from_u128_signed(true, u128::from(n) + 1)),
        _ => match n {
            TAG_POS_BIGNUM => Ok(BigInt::from_be_bytes(false, &decode_bytes(s)?)),
            TAG_NEG_BIGNUM => {
                let mut mag = BigInt::from_be_bytes(false, &decode_bytes(s)?).magnitude;
                increment(&mut mag);
                Ok(BigInt::from_be_bytes(true, &mag))
            }
            _ => Err(CborError::new(ErrorCode::UnexpectedTag, off)),
        },
    }
}

/// Decode an integer that must fit in a `u64`.
pub(crate) fn decode_u64(s: &mut CborStream<'_>) -> Result<u64, CborError> {
    let off = s.position();
    let n = decode_int(s)?;
    u64::try_from(&n).map_err(|err| CborError::new(err.code, off))
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use alloc::vec;

    #[test]
    fn increment_carries() {
        let mut m = vec![0xff, 0xff];
        increment(&mut m);
        assert_eq!(m, vec![1, 0, 0]);
        let mut m = Vec::new();
        increment(&mut m);
        assert_eq!(m, vec![1]);
    }

    #[test]
    fn decrement_borrows_and_stays_minimal() {
        let mut m = vec![1, 0, 0];
        decrement(&mut m);
        assert_eq!(m, vec![0xff, 0xff]);
        let mut m = vec![1];
        decrement(&mut m);
        assert!(m.is_empty());
    }

    #[test]
    fn display_is_decimal() {
        assert_eq!(BigInt::from(0u8).to_string(), "0");
        assert_eq!(BigInt::from(-1000i32).to_string(), "-1000");
        assert_eq!(
            BigInt::from(u128::from(u64::MAX) + 1).to_string(),
            "18446744073709551616"
        );
    }

    #[test]
    fn ordering_is_numeric() {
        let mut v = vec![
            BigInt::from(3),
            BigInt::from(-300),
            BigInt::from(0),
            BigInt::from(-2),
            BigInt::from(256),
        ];
        v.sort();
        let back: Vec<i64> = v.iter().map(|n| i64::try_from(n).unwrap()).collect();
        assert_eq!(back, vec![-300, -2, 0, 3, 256]);
    }

    #[test]
    fn try_from_checks_range() {
        assert_eq!(i128::try_from(&BigInt::from(i128::MIN)).unwrap(), i128::MIN);
        assert_eq!(
            u8::try_from(&BigInt::from(256)).unwrap_err().code,
            ErrorCode::IntegerOverflow
        );
        assert_eq!(
            u64::try_from(&BigInt::from(-1)).unwrap_err().code,
            ErrorCode::IntegerOverflow
        );
        let huge = BigInt::from_be_bytes(false, &[1; 17]);
        assert!(u128::try_from(&huge).is_err());
    }

    #[test]
    fn negative_zero_normalizes() {
        assert_eq!(BigInt::from_be_bytes(true, &[0, 0]), BigInt::zero());
    }
}
