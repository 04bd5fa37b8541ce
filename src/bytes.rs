//! Byte strings: definite, or indefinite as a run of definite chunks of at most
//! [`MAX_CHUNK_LEN`] bytes terminated by a break.

use alloc::vec::Vec;

use crate::head::{decode_len, encode_indef_head, encode_len_into, is_indef, peek_major, Major, BREAK};
use crate::{CborError, CborStream, ErrorCode};

/// Largest chunk of an indefinite byte or text string.
pub const MAX_CHUNK_LEN: usize = 64;

/// Returns `true` if the next item is a byte string (definite or indefinite).
///
/// # Errors
///
/// Returns `UnexpectedEof` on empty input.
pub fn is_bytes(s: &CborStream<'_>) -> Result<bool, CborError> {
    Ok(peek_major(s)? == Major::Bytes)
}

/// Returns `true` if the next item is a definite byte string.
///
/// # Errors
///
/// Returns `UnexpectedEof` on empty input.
pub fn is_def_bytes(s: &CborStream<'_>) -> Result<bool, CborError> {
    Ok(is_bytes(s)? && !is_indef(s, Major::Bytes)?)
}

/// Returns `true` if the next item is an indefinite (chunked) byte string.
///
/// # Errors
///
/// Returns `UnexpectedEof` on empty input.
pub fn is_indef_bytes(s: &CborStream<'_>) -> Result<bool, CborError> {
    is_indef(s, Major::Bytes)
}

/// Append the encoding of `bytes` to `out`.
///
/// With `split` and more than [`MAX_CHUNK_LEN`] bytes, the indefinite chunked form is used;
/// otherwise a single definite string.
pub fn encode_bytes_into(out: &mut Vec<u8>, bytes: &[u8], split: bool) {
    if !split || bytes.len() <= MAX_CHUNK_LEN {
        encode_len_into(out, Major::Bytes, bytes.len());
        out.extend_from_slice(bytes);
        return;
    }
    out.extend_from_slice(&encode_indef_head(Major::Bytes));
    for chunk in bytes.chunks(MAX_CHUNK_LEN) {
        encode_len_into(out, Major::Bytes, chunk.len());
        out.extend_from_slice(chunk);
    }
    out.push(BREAK);
}

/// Encode a byte string, optionally chunked.
#[must_use]
pub fn encode_bytes(bytes: &[u8], split: bool) -> Vec<u8> {
    let mut out = Vec::with_capacity(bytes.len() + 9);
    encode_bytes_into(&mut out, bytes, split);
    out
}

/// Decode a definite or indefinite byte string.
///
/// # Errors
///
/// Returns `ExpectedBytes` if the item (or a chunk) is not a byte string, `ChunkTooLarge` for a
/// chunk over [`MAX_CHUNK_LEN`] bytes, `MissingBreak` if input ends before the break, and
/// `UnexpectedEof` if the payload is shorter than declared.
pub fn decode_bytes(s: &mut CborStream<'_>) -> Result<Vec<u8>, CborError> {
    if is_indef_bytes(s)? {
        s.read_u8()?;
        let mut out = Vec::new();
        for chunk in Chunks::new(s, Major::Bytes, ErrorCode::ExpectedBytes) {
            out.extend_from_slice(chunk?.1);
        }
        return Ok(out);
    }
    let len = decode_len(s, Major::Bytes, ErrorCode::ExpectedBytes)?;
    s.read_exact(len).map(<[u8]>::to_vec)
}

/// Iterator over the definite chunks of an indefinite byte or text string, whose head has
/// already been consumed. Yields `(payload offset, payload)` and ends after the break byte.
pub(crate) struct Chunks<'s, 'a> {
    s: &'s mut CborStream<'a>,
    major: Major,
    mismatch: ErrorCode,
    done: bool,
}

impl<'s, 'a> Chunks<'s, 'a> {
    pub(crate) fn new(s: &'s mut CborStream<'a>, major: Major, mismatch: ErrorCode) -> Self {
        Self {
            s,
            major,
            mismatch,
            done: false,
        }
    }

    fn next_chunk(&mut self) -> Result<Option<(usize, &'a [u8])>, CborError> {
        let off = self.s.position();
        if self.s.is_at_end() {
            return Err(CborError::new(ErrorCode::MissingBreak, off));
        }
        if self.s.eat_break()? {
            return Ok(None);
        }
        let len = decode_len(self.s, self.major, self.mismatch)?;
        if len > MAX_CHUNK_LEN {
            return Err(CborError::new(ErrorCode::ChunkTooLarge, off));
        }
        let start = self.s.position();
        self.s.read_exact(len).map(|chunk| Some((start, chunk)))
    }
}

impl<'a> Iterator for Chunks<'_, 'a> {
    type Item = Result<(usize, &'a [u8]), CborError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.next_chunk() {
            Ok(Some(chunk)) => Some(Ok(chunk)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(err) => {
                self.done = true;
                Some(Err(err))
            }
        }
    }
}
