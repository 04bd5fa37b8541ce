use alloc::vec::Vec;

use crate::{CborError, CborStream, ErrorCode};

const FALSE_BYTE: u8 = 0xf4;
const TRUE_BYTE: u8 = 0xf5;
const NULL_BYTE: u8 = 0xf6;

/// Returns `true` if the next item is `false` or `true`.
///
/// # Errors
///
/// Returns `UnexpectedEof` on empty input.
pub fn is_bool(s: &CborStream<'_>) -> Result<bool, CborError> {
    Ok(matches!(s.peek_u8()?, FALSE_BYTE | TRUE_BYTE))
}

/// Encode a boolean.
#[must_use]
pub fn encode_bool(b: bool) -> Vec<u8> {
    alloc::vec![if b { TRUE_BYTE } else { FALSE_BYTE }]
}

/// Decode a boolean.
///
/// # Errors
///
/// Returns `ExpectedBool` if the next byte is neither `0xf4` nor `0xf5`.
pub fn decode_bool(s: &mut CborStream<'_>) -> Result<bool, CborError> {
    let off = s.position();
    match s.read_u8()? {
        TRUE_BYTE => Ok(true),
        FALSE_BYTE => Ok(false),
        _ => Err(CborError::new(ErrorCode::ExpectedBool, off)),
    }
}

/// Returns `true` if the next item is `null`.
///
/// # Errors
///
/// Returns `UnexpectedEof` on empty input.
pub fn is_null(s: &CborStream<'_>) -> Result<bool, CborError> {
    Ok(s.peek_u8()? == NULL_BYTE)
}

/// Encode `null`.
#[must_use]
pub fn encode_null() -> Vec<u8> {
    alloc::vec![NULL_BYTE]
}

/// Decode `null`.
///
/// # Errors
///
/// Returns `ExpectedNull` if the next byte is not `0xf6`.
pub fn decode_null(s: &mut CborStream<'_>) -> Result<(), CborError> {
    let off = s.position();
    if s.read_u8()? == NULL_BYTE {
        Ok(())
    } else {
        Err(CborError::new(ErrorCode::ExpectedNull, off))
    }
}
