//! Item heads: the major type plus its length/argument.
//!
//! The encoder always picks the shortest form (inline for `0..=23`, then 1, 2, 4 or 8 trailing
//! big-endian bytes). The decoder accepts any argument width and only rejects reserved bit
//! patterns.

use alloc::vec::Vec;

use crate::{CborError, CborStream, ErrorCode};

/// The `0xff` break byte terminating indefinite-length items.
pub const BREAK: u8 = 0xff;

const AI_INDEFINITE: u8 = 31;

/// The 3-bit CBOR major type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Major {
    /// Unsigned integer.
    Unsigned = 0,
    /// Negative integer (`-1 - argument`).
    Negative = 1,
    /// Byte string.
    Bytes = 2,
    /// UTF-8 text string.
    Text = 3,
    /// List (CBOR array).
    List = 4,
    /// Map.
    Map = 5,
    /// Tag.
    Tag = 6,
    /// Simple values and floats.
    Simple = 7,
}

impl Major {
    /// Extract the major type from an initial byte.
    #[inline]
    #[must_use]
    pub const fn from_initial_byte(ib: u8) -> Self {
        match ib >> 5 {
            0 => Self::Unsigned,
            1 => Self::Negative,
            2 => Self::Bytes,
            3 => Self::Text,
            4 => Self::List,
            5 => Self::Map,
            6 => Self::Tag,
            _ => Self::Simple,
        }
    }

    const fn allows_indefinite(self) -> bool {
        matches!(
            self,
            Self::Bytes | Self::Text | Self::List | Self::Map | Self::Simple
        )
    }

    #[inline]
    const fn bits(self) -> u8 {
        (self as u8) << 5
    }
}

/// The argument carried by a head.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arg {
    /// A definite argument: length, integer value, or tag number.
    Value(u64),
    /// The indefinite-length marker (additional info 31).
    Indefinite,
}

/// A decoded item head.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Head {
    /// Major type.
    pub major: Major,
    /// Argument or indefinite marker.
    pub arg: Arg,
}

/// Append the shortest head for `(major, arg)` to `out`.
pub fn encode_head_into(out: &mut Vec<u8>, major: Major, arg: u64) {
    let m = major.bits();
    if let Ok(v8) = u8::try_from(arg) {
        if v8 < 24 {
            out.push(m | v8);
        } else {
            out.extend_from_slice(&[m | 24, v8]);
        }
    } else if let Ok(v16) = u16::try_from(arg) {
        out.push(m | 25);
        out.extend_from_slice(&v16.to_be_bytes());
    } else if let Ok(v32) = u32::try_from(arg) {
        out.push(m | 26);
        out.extend_from_slice(&v32.to_be_bytes());
    } else {
        out.push(m | 27);
        out.extend_from_slice(&arg.to_be_bytes());
    }
}

/// Encode a definite head.
#[must_use]
pub fn encode_def_head(major: Major, arg: u64) -> Vec<u8> {
    let mut out = Vec::with_capacity(9);
    encode_head_into(&mut out, major, arg);
    out
}

pub(crate) fn encode_len_into(out: &mut Vec<u8>, major: Major, len: usize) {
    encode_head_into(out, major, len as u64);
}

/// Encode the one-byte indefinite head for `major`.
#[must_use]
pub const fn encode_indef_head(major: Major) -> [u8; 1] {
    [major.bits() | AI_INDEFINITE]
}

fn read_arg(s: &mut CborStream<'_>, major: Major, ai: u8, off: usize) -> Result<Arg, CborError> {
    match ai {
        0..=23 => Ok(Arg::Value(u64::from(ai))),
        24 => Ok(Arg::Value(u64::from(s.read_u8()?))),
        25..=27 if major == Major::Simple => Err(CborError::new(ErrorCode::FloatHead, off)),
        25 => Ok(Arg::Value(u64::from(s.read_be_u16()?))),
        26 => Ok(Arg::Value(u64::from(s.read_be_u32()?))),
        27 => Ok(Arg::Value(s.read_be_u64()?)),
        AI_INDEFINITE if major.allows_indefinite() => Ok(Arg::Indefinite),
        AI_INDEFINITE => Err(CborError::new(ErrorCode::IndefiniteLengthForbidden, off)),
        _ => Err(CborError::new(ErrorCode::ReservedAdditionalInfo, off)),
    }
}

/// Decode one head, advancing the stream past it.
///
/// # Errors
///
/// Fails on empty input, on missing argument bytes, on reserved additional info (28..=30), on
/// the indefinite marker for majors 0, 1 and 6, and with `FloatHead` for float16/32/64 heads.
pub fn decode_head(s: &mut CborStream<'_>) -> Result<Head, CborError> {
    let off = s.position();
    let ib = s.read_u8()?;
    let major = Major::from_initial_byte(ib);
    let arg = read_arg(s, major, ib & 0x1f, off)?;
    Ok(Head { major, arg })
}

/// Decode one definite head, returning `(major, argument)`.
///
/// # Errors
///
/// Same as [`decode_head`], plus `IndefiniteLengthForbidden` for an indefinite head.
pub fn decode_def_head(s: &mut CborStream<'_>) -> Result<(Major, u64), CborError> {
    let off = s.position();
    match decode_head(s)? {
        Head {
            major,
            arg: Arg::Value(n),
        } => Ok((major, n)),
        Head {
            arg: Arg::Indefinite,
            ..
        } => Err(CborError::new(ErrorCode::IndefiniteLengthForbidden, off)),
    }
}

/// Decode a definite head of the given major type and return its argument as a length.
pub(crate) fn decode_len(
    s: &mut CborStream<'_>,
    expected: Major,
    mismatch: ErrorCode,
) -> Result<usize, CborError> {
    let off = s.position();
    if peek_major(s)? != expected {
        return Err(CborError::new(mismatch, off));
    }
    let (_, n) = decode_def_head(s)?;
    usize::try_from(n).map_err(|_| CborError::new(ErrorCode::LengthOverflow, off))
}

/// Read the major type of the next item without consuming it.
///
/// # Errors
///
/// Returns `UnexpectedEof` on empty input.
pub fn peek_major(s: &CborStream<'_>) -> Result<Major, CborError> {
    s.peek_u8().map(Major::from_initial_byte)
}

/// Read the major type and the low five bits of the next item without consuming it.
///
/// # Errors
///
/// Returns `UnexpectedEof` on empty input.
pub fn peek_major_and_minor(s: &CborStream<'_>) -> Result<(Major, u8), CborError> {
    let ib = s.peek_u8()?;
    Ok((Major::from_initial_byte(ib), ib & 0x1f))
}

/// Returns `true` if the next byte is the indefinite head of `major`.
pub(crate) fn is_indef(s: &CborStream<'_>, major: Major) -> Result<bool, CborError> {
    Ok(s.peek_u8()? == encode_indef_head(major)[0])
}
