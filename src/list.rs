//! Lists (CBOR arrays).
//!
//! The default encoder writes an empty list as the definite `0x80` and any non-empty list in
//! indefinite form (`0x9f ... 0xff`). Decoders accept both forms at any length.

use alloc::vec::Vec;

use crate::generic::{Decoder, Encodeable};
use crate::head::{decode_len, encode_indef_head, encode_len_into, is_indef, peek_major, Major, BREAK};
use crate::{CborError, CborStream, ErrorCode};

/// Returns `true` if the next item is a list.
///
/// # Errors
///
/// Returns `UnexpectedEof` on empty input.
pub fn is_list(s: &CborStream<'_>) -> Result<bool, CborError> {
    Ok(peek_major(s)? == Major::List)
}

/// Returns `true` if the next item is a definite-length list.
///
/// # Errors
///
/// Returns `UnexpectedEof` on empty input.
pub fn is_def_list(s: &CborStream<'_>) -> Result<bool, CborError> {
    Ok(is_list(s)? && !is_indef(s, Major::List)?)
}

/// Returns `true` if the next item is an indefinite-length list.
///
/// # Errors
///
/// Returns `UnexpectedEof` on empty input.
pub fn is_indef_list(s: &CborStream<'_>) -> Result<bool, CborError> {
    is_indef(s, Major::List)
}

/// Encode items as a definite-length list.
#[must_use]
pub fn encode_def_list<'e, I>(items: I) -> Vec<u8>
where
    I: IntoIterator,
    I::Item: Into<Encodeable<'e>>,
{
    let mut body = Vec::new();
    let mut n = 0usize;
    for item in items {
        item.into().write_into(&mut body);
        n += 1;
    }
    let mut out = Vec::with_capacity(body.len() + 9);
    encode_len_into(&mut out, Major::List, n);
    out.extend_from_slice(&body);
    out
}

/// Encode items as an indefinite-length list, even when empty.
#[must_use]
pub fn encode_indef_list<'e, I>(items: I) -> Vec<u8>
where
    I: IntoIterator,
    I::Item: Into<Encodeable<'e>>,
{
    let mut out = encode_indef_head(Major::List).to_vec();
    for item in items {
        item.into().write_into(&mut out);
    }
    out.push(BREAK);
    out
}

/// Encode items as a list: definite when empty, indefinite otherwise.
#[must_use]
pub fn encode_list<'e, I>(items: I) -> Vec<u8>
where
    I: IntoIterator,
    I::Item: Into<Encodeable<'e>>,
{
    let mut items = items.into_iter().peekable();
    if items.peek().is_none() {
        return encode_def_list(items);
    }
    encode_indef_list(items)
}

/// Decode every item of a list with `decoder`.
///
/// # Errors
///
/// Returns `ExpectedList` if the next item is not a list, `MissingBreak` for an unterminated
/// indefinite list, or the first item error.
pub fn decode_list<'a, D: Decoder<'a>>(
    s: &mut CborStream<'a>,
    mut decoder: D,
) -> Result<Vec<D::Output>, CborError> {
    let mut r = decode_list_lazy(s)?;
    let mut out = Vec::with_capacity(r.size_hint());
    while !r.is_exhausted() {
        out.push(r.pull(&mut decoder)?);
    }
    Ok(out)
}

/// Decode every item of a list, passing the zero-based item index to `decoder`.
///
/// # Errors
///
/// Same as [`decode_list`].
pub fn decode_list_indexed<'a, T, F>(s: &mut CborStream<'a>, mut decoder: F) -> Result<Vec<T>, CborError>
where
    F: FnMut(&mut CborStream<'a>, usize) -> Result<T, CborError>,
{
    let mut r = decode_list_lazy(s)?;
    let mut out = Vec::with_capacity(r.size_hint());
    while !r.is_exhausted() {
        let i = r.index();
        out.push(r.next(|s: &mut CborStream<'a>| decoder(s, i))?);
    }
    Ok(out)
}

/// Consume a list head and return a reader that decodes one item per pull.
///
/// # Errors
///
/// Returns `ExpectedList` if the next item is not a list.
pub fn decode_list_lazy<'s, 'a>(s: &'s mut CborStream<'a>) -> Result<ListReader<'s, 'a>, CborError> {
    ListReader::new(s)
}

/// Same as [`decode_list_lazy`]; pull with [`ListReader::next_opt`] to get `None` rather than an
/// error once the list is exhausted.
///
/// # Errors
///
/// Returns `ExpectedList` if the next item is not a list.
pub fn decode_list_lazy_option<'s, 'a>(
    s: &'s mut CborStream<'a>,
) -> Result<ListReader<'s, 'a>, CborError> {
    ListReader::new(s)
}

#[derive(Debug, Clone, Copy)]
enum State {
    Definite { len: usize },
    Indefinite { done: bool },
}

/// Pull-based reader over the items of one list.
///
/// Borrows the caller's stream; every pull advances it past exactly one item. For indefinite
/// lists the break byte is consumed as soon as it follows the last item, so the stream sits
/// after the list once the reader is exhausted.
#[derive(Debug)]
pub struct ListReader<'s, 'a> {
    s: &'s mut CborStream<'a>,
    state: State,
    index: usize,
}

impl<'s, 'a> ListReader<'s, 'a> {
    fn new(s: &'s mut CborStream<'a>) -> Result<Self, CborError> {
        let state = if is_indef_list(s)? {
            s.read_u8()?;
            State::Indefinite { done: false }
        } else {
            State::Definite {
                len: decode_len(s, Major::List, ErrorCode::ExpectedList)?,
            }
        };
        let mut r = Self { s, state, index: 0 };
        r.check_break()?;
        Ok(r)
    }

    fn check_break(&mut self) -> Result<(), CborError> {
        if let State::Indefinite { done: false } = self.state {
            if self.s.is_at_end() {
                return Err(CborError::new(ErrorCode::MissingBreak, self.s.position()));
            }
            if self.s.eat_break()? {
                self.state = State::Indefinite { done: true };
            }
        }
        Ok(())
    }

    /// Returns `true` once every item has been pulled.
    #[must_use]
    pub const fn is_exhausted(&self) -> bool {
        match self.state {
            State::Definite { len } => self.index >= len,
            State::Indefinite { done } => done,
        }
    }

    /// Zero-based index of the next item (equals the number of items pulled so far).
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Declared length for definite lists, `None` for indefinite ones.
    #[must_use]
    pub const fn len_hint(&self) -> Option<usize> {
        match self.state {
            State::Definite { len } => Some(len),
            State::Indefinite { .. } => None,
        }
    }

    fn size_hint(&self) -> usize {
        // Declared lengths are untrusted; cap the preallocation.
        self.len_hint().map_or(0, |n| n.saturating_sub(self.index).min(1024))
    }

    /// The stream position of the next item.
    #[must_use]
    pub fn position(&self) -> usize {
        self.s.position()
    }

    /// Decode the next item.
    ///
    /// # Errors
    ///
    /// Returns `EndOfList` if the list is exhausted, or the item error.
    #[allow(clippy::should_implement_trait)]
    pub fn next<D: Decoder<'a>>(&mut self, mut decoder: D) -> Result<D::Output, CborError> {
        self.pull(&mut decoder)
    }

    pub(crate) fn pull<D: Decoder<'a>>(&mut self, decoder: &mut D) -> Result<D::Output, CborError> {
        if self.is_exhausted() {
            return Err(CborError::new(ErrorCode::EndOfList, self.s.position()));
        }
        let v = decoder.decode_from(self.s)?;
        self.index += 1;
        self.check_break()?;
        Ok(v)
    }

    /// Decode the next item, or return `None` if the list is exhausted.
    ///
    /// # Errors
    ///
    /// Returns the item error.
    pub fn next_opt<D: Decoder<'a>>(&mut self, decoder: D) -> Result<Option<D::Output>, CborError> {
        if self.is_exhausted() {
            return Ok(None);
        }
        self.next(decoder).map(Some)
    }

    /// Decode the next item of a fixed-arity group.
    ///
    /// # Errors
    ///
    /// Returns `TooFewItems` if the list is exhausted, or the item error.
    pub fn next_required<D: Decoder<'a>>(&mut self, decoder: D) -> Result<D::Output, CborError> {
        if self.is_exhausted() {
            return Err(CborError::new(ErrorCode::TooFewItems, self.s.position()));
        }
        self.next(decoder)
    }

    /// Skip the next item without decoding it.
    ///
    /// # Errors
    ///
    /// Returns `EndOfList` if the list is exhausted, or a malformed-item error.
    pub fn skip(&mut self) -> Result<(), CborError> {
        self.next(crate::skip::skip_item)
    }

    /// Skip every remaining item, leaving the stream after the list.
    ///
    /// # Errors
    ///
    /// Returns the first malformed-item error.
    pub fn skip_rest(&mut self) -> Result<(), CborError> {
        while !self.is_exhausted() {
            self.skip()?;
        }
        Ok(())
    }

    /// Fail with `TooManyItems` unless every item has been pulled.
    ///
    /// # Errors
    ///
    /// Returns `TooManyItems` if items remain.
    pub fn finish(&self) -> Result<(), CborError> {
        if self.is_exhausted() {
            Ok(())
        } else {
            Err(CborError::new(ErrorCode::TooManyItems, self.s.position()))
        }
    }
}
