//! Text strings.
//!
//! Long text is split, when asked, into a list of definite text chunks of at most
//! [`MAX_CHUNK_LEN`](crate::MAX_CHUNK_LEN) bytes, each ending on a code-point boundary. The
//! decoder accepts that list form, the major-3 indefinite form, and plain definite text.

use alloc::string::String;
use alloc::vec::Vec;

use crate::bytes::{Chunks, MAX_CHUNK_LEN};
use crate::head::{decode_len, encode_len_into, is_indef, peek_major, Major};
use crate::list::{decode_list, encode_def_list, is_list};
use crate::utf8;
use crate::{CborError, CborStream, ErrorCode};

/// Returns `true` if the next item is a text string.
///
/// # Errors
///
/// Returns `UnexpectedEof` on empty input.
pub fn is_string(s: &CborStream<'_>) -> Result<bool, CborError> {
    Ok(peek_major(s)? == Major::Text)
}

fn encode_text_into(out: &mut Vec<u8>, text: &str) {
    encode_len_into(out, Major::Text, text.len());
    out.extend_from_slice(text.as_bytes());
}

/// Encode a text string.
///
/// With `split` and more than [`MAX_CHUNK_LEN`] bytes of UTF-8, the text becomes a definite list
/// of text chunks; otherwise one definite string.
#[must_use]
pub fn encode_string(text: &str, split: bool) -> Vec<u8> {
    if split && text.len() > MAX_CHUNK_LEN {
        return encode_def_list(utf8::split_chunks(text, MAX_CHUNK_LEN).map(|chunk| {
            let mut out = Vec::with_capacity(chunk.len() + 2);
            encode_text_into(&mut out, chunk);
            out
        }));
    }
    let mut out = Vec::with_capacity(text.len() + 9);
    encode_text_into(&mut out, text);
    out
}

fn decode_def_text<'a>(s: &mut CborStream<'a>) -> Result<&'a str, CborError> {
    let len = decode_len(s, Major::Text, ErrorCode::ExpectedText)?;
    let off = s.position();
    utf8::validate(s.read_exact(len)?, off)
}

/// Decode a text string in definite, list-of-chunks, or indefinite form.
///
/// # Errors
///
/// Returns `ExpectedText` if the item (or a chunk) is not text, `Utf8Invalid` for bad UTF-8
/// and, for indefinite text, `ChunkTooLarge` or `MissingBreak`.
pub fn decode_string(s: &mut CborStream<'_>) -> Result<String, CborError> {
    if is_list(s)? {
        let parts = decode_list(s, |s: &mut CborStream<'_>| decode_def_text(s).map(String::from))?;
        return Ok(parts.concat());
    }
    if is_indef(s, Major::Text)? {
        s.read_u8()?;
        let mut out = String::new();
        for chunk in Chunks::new(s, Major::Text, ErrorCode::ExpectedText) {
            let (off, chunk) = chunk?;
            out.push_str(utf8::validate(chunk, off)?);
        }
        return Ok(out);
    }
    decode_def_text(s).map(String::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_is_never_split() {
        assert_eq!(encode_string("abc", true), [0x63, b'a', b'b', b'c']);
    }

    #[test]
    fn split_text_is_a_definite_list() {
        let text = "x".repeat(65);
        let enc = encode_string(&text, true);
        assert_eq!(&enc[..3], &[0x82, 0x78, 64]);
        assert_eq!(decode_string(&mut CborStream::new(&enc)).unwrap(), text);
    }

    #[test]
    fn indefinite_text_chunks_are_joined() {
        let bytes = [0x7f, 0x62, b'h', b'i', 0x61, b'!', 0xff];
        let mut s = CborStream::new(&bytes);
        assert_eq!(decode_string(&mut s).unwrap(), "hi!");
        assert!(s.is_at_end());
    }

    #[test]
    fn indefinite_text_rejects_byte_chunks() {
        let bytes = [0x7f, 0x41, 0x00, 0xff];
        let err = decode_string(&mut CborStream::new(&bytes)).unwrap_err();
        assert_eq!(err.code, ErrorCode::ExpectedText);
    }
}
