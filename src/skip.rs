use alloc::vec::Vec;

use crate::bytes::Chunks;
use crate::head::{decode_head, Arg, Major};
use crate::{CborError, CborStream, ErrorCode};

enum Frame {
    Items(usize),
    Indefinite,
}

fn len_to_usize(n: u64, off: usize) -> Result<usize, CborError> {
    usize::try_from(n).map_err(|_| CborError::new(ErrorCode::LengthOverflow, off))
}

/// Skip exactly one item of any shape, nested or indefinite, without decoding it.
///
/// Uses an explicit stack, so nesting depth is bounded by memory rather than the call stack.
///
/// # Errors
///
/// Returns a header, truncation, chunk, or `MissingBreak` error for malformed input, and
/// `UnexpectedBreak` for a break byte outside an indefinite container.
pub fn skip_item(s: &mut CborStream<'_>) -> Result<(), CborError> {
    let mut stack = Vec::new();
    stack.push(Frame::Items(1));

    while let Some(top) = stack.last_mut() {
        match top {
            Frame::Items(0) => {
                stack.pop();
                continue;
            }
            Frame::Items(n) => *n -= 1,
            Frame::Indefinite => {
                if s.is_at_end() {
                    return Err(CborError::new(ErrorCode::MissingBreak, s.position()));
                }
                if s.eat_break()? {
                    stack.pop();
                    continue;
                }
            }
        }

        let off = s.position();
        match s.peek_u8()? {
            0xf9 => {
                s.read_exact(3)?;
                continue;
            }
            0xfa => {
                s.read_exact(5)?;
                continue;
            }
            0xfb => {
                s.read_exact(9)?;
                continue;
            }
            _ => {}
        }

        let head = decode_head(s)?;
        match (head.major, head.arg) {
            (Major::Unsigned | Major::Negative, _) | (Major::Simple, Arg::Value(_)) => {}
            (Major::Bytes | Major::Text, Arg::Value(n)) => {
                s.read_exact(len_to_usize(n, off)?)?;
            }
            (Major::Bytes, Arg::Indefinite) => {
                for chunk in Chunks::new(s, Major::Bytes, ErrorCode::ExpectedBytes) {
                    chunk?;
                }
            }
            (Major::Text, Arg::Indefinite) => {
                for chunk in Chunks::new(s, Major::Text, ErrorCode::ExpectedText) {
                    chunk?;
                }
            }
            (Major::List, Arg::Value(n)) => stack.push(Frame::Items(len_to_usize(n, off)?)),
            (Major::Map, Arg::Value(n)) => {
                let items = len_to_usize(n, off)?
                    .checked_mul(2)
                    .ok_or_else(|| CborError::new(ErrorCode::LengthOverflow, off))?;
                stack.push(Frame::Items(items));
            }
            (Major::List | Major::Map, Arg::Indefinite) => stack.push(Frame::Indefinite),
            (Major::Tag, _) => stack.push(Frame::Items(1)),
            (Major::Simple, Arg::Indefinite) => {
                return Err(CborError::new(ErrorCode::UnexpectedBreak, off));
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skipped_len(bytes: &[u8]) -> Result<usize, CborError> {
        let mut s = CborStream::new(bytes);
        skip_item(&mut s)?;
        Ok(s.position())
    }

    #[test]
    fn skips_nested_indefinite_items() {
        // [_ 1, {_ "a": [2]}, h'00', 1.0] followed by a trailing 0x00
        let bytes = [
            0x9f, 0x01, 0xbf, 0x61, b'a', 0x81, 0x02, 0xff, 0x41, 0x00, 0xf9, 0x3c, 0x00, 0xff,
            0x00,
        ];
        assert_eq!(skipped_len(&bytes).unwrap(), bytes.len() - 1);
    }

    #[test]
    fn skips_tagged_and_chunked_items() {
        let bytes = [0xd8, 0x79, 0x5f, 0x41, 0x01, 0x40, 0xff];
        assert_eq!(skipped_len(&bytes).unwrap(), bytes.len());
    }

    #[test]
    fn stray_break_and_truncation_fail() {
        assert_eq!(skipped_len(&[0xff]).unwrap_err().code, ErrorCode::UnexpectedBreak);
        assert_eq!(skipped_len(&[0x9f, 0x01]).unwrap_err().code, ErrorCode::MissingBreak);
        assert_eq!(skipped_len(&[0x82, 0x01]).unwrap_err().code, ErrorCode::UnexpectedEof);
    }
}
