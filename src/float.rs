use alloc::vec::Vec;

use half::f16;

use crate::{CborError, CborStream, ErrorCode};

const FLOAT16_HEAD: u8 = 0xf9;
const FLOAT32_HEAD: u8 = 0xfa;
const FLOAT64_HEAD: u8 = 0xfb;

/// Returns `true` if the next item is a float16.
///
/// # Errors
///
/// Returns `UnexpectedEof` on empty input.
pub fn is_float16(s: &CborStream<'_>) -> Result<bool, CborError> {
    Ok(s.peek_u8()? == FLOAT16_HEAD)
}

/// Returns `true` if the next item is a float32.
///
/// # Errors
///
/// Returns `UnexpectedEof` on empty input.
pub fn is_float32(s: &CborStream<'_>) -> Result<bool, CborError> {
    Ok(s.peek_u8()? == FLOAT32_HEAD)
}

/// Returns `true` if the next item is a float64.
///
/// # Errors
///
/// Returns `UnexpectedEof` on empty input.
pub fn is_float64(s: &CborStream<'_>) -> Result<bool, CborError> {
    Ok(s.peek_u8()? == FLOAT64_HEAD)
}

/// Returns `true` if the next item is a float of any width.
///
/// # Errors
///
/// Returns `UnexpectedEof` on empty input.
pub fn is_float(s: &CborStream<'_>) -> Result<bool, CborError> {
    Ok(matches!(
        s.peek_u8()?,
        FLOAT16_HEAD | FLOAT32_HEAD | FLOAT64_HEAD
    ))
}

fn expect_head(s: &mut CborStream<'_>, head: u8, code: ErrorCode) -> Result<(), CborError> {
    let off = s.position();
    if s.peek_u8()? != head {
        return Err(CborError::new(code, off));
    }
    s.read_u8().map(|_| ())
}

/// Decode a float16.
///
/// # Errors
///
/// Returns `ExpectedFloat16` if the next item is not a float16 (other widths included).
pub fn decode_float16(s: &mut CborStream<'_>) -> Result<f16, CborError> {
    expect_head(s, FLOAT16_HEAD, ErrorCode::ExpectedFloat16)?;
    s.read_be_u16().map(f16::from_bits)
}

/// Decode a float32.
///
/// # Errors
///
/// Returns `ExpectedFloat32` if the next item is not a float32 (other widths included).
pub fn decode_float32(s: &mut CborStream<'_>) -> Result<f32, CborError> {
    expect_head(s, FLOAT32_HEAD, ErrorCode::ExpectedFloat32)?;
    s.read_be_u32().map(f32::from_bits)
}

/// Decode a float64.
///
/// # Errors
///
/// Returns `ExpectedFloat64` if the next item is not a float64 (other widths included).
pub fn decode_float64(s: &mut CborStream<'_>) -> Result<f64, CborError> {
    expect_head(s, FLOAT64_HEAD, ErrorCode::ExpectedFloat64)?;
    s.read_be_u64().map(f64::from_bits)
}

/// Decode a float of any width, widened to `f64`.
///
/// # Errors
///
/// Returns `ExpectedFloat` if the next item is not a float16/32/64.
pub fn decode_float(s: &mut CborStream<'_>) -> Result<f64, CborError> {
    let off = s.position();
    match s.peek_u8()? {
        FLOAT16_HEAD => decode_float16(s).map(f64::from),
        FLOAT32_HEAD => decode_float32(s).map(f64::from),
        FLOAT64_HEAD => decode_float64(s),
        _ => Err(CborError::new(ErrorCode::ExpectedFloat, off)),
    }
}

fn encode_float_bits(head: u8, be: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(1 + be.len());
    out.push(head);
    out.extend_from_slice(be);
    out
}

/// Encode a float16.
#[must_use]
pub fn encode_float16(v: f16) -> Vec<u8> {
    encode_float_bits(FLOAT16_HEAD, &v.to_bits().to_be_bytes())
}

/// Encode a float32.
#[must_use]
pub fn encode_float32(v: f32) -> Vec<u8> {
    encode_float_bits(FLOAT32_HEAD, &v.to_bits().to_be_bytes())
}

/// Encode a float64.
#[must_use]
pub fn encode_float64(v: f64) -> Vec<u8> {
    encode_float_bits(FLOAT64_HEAD, &v.to_bits().to_be_bytes())
}
