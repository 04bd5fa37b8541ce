use crate::{CborError, ErrorCode};

/// Read cursor over an immutable CBOR buffer.
///
/// The stream is `Copy`: copying it yields an independent position over the same buffer, which
/// is how lookahead works without disturbing the caller's cursor.
#[derive(Debug, Clone, Copy)]
pub struct CborStream<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> CborStream<'a> {
    /// Create a stream positioned at the start of `data`.
    #[must_use]
    pub const fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Create a stream positioned at `pos`.
    #[must_use]
    pub const fn with_pos(data: &'a [u8], pos: usize) -> Self {
        Self { data, pos }
    }

    /// The whole backing buffer.
    #[must_use]
    pub const fn data(&self) -> &'a [u8] {
        self.data
    }

    /// Current byte offset.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.pos
    }

    /// Returns `true` if no bytes remain.
    #[must_use]
    pub const fn is_at_end(&self) -> bool {
        self.pos >= self.data.len()
    }

    /// The unread tail of the buffer.
    #[must_use]
    pub fn remaining(&self) -> &'a [u8] {
        self.data.get(self.pos..).unwrap_or_default()
    }

    /// Return the next byte without consuming it.
    ///
    /// # Errors
    ///
    /// Returns `UnexpectedEof` if the stream is exhausted.
    pub fn peek_u8(&self) -> Result<u8, CborError> {
        self.data
            .get(self.pos)
            .copied()
            .ok_or_else(|| CborError::new(ErrorCode::UnexpectedEof, self.pos))
    }

    /// Consume and return the next byte.
    ///
    /// # Errors
    ///
    /// Returns `UnexpectedEof` if the stream is exhausted.
    pub fn read_u8(&mut self) -> Result<u8, CborError> {
        let b = self.peek_u8()?;
        self.pos += 1;
        Ok(b)
    }

    /// Consume and return the next `n` bytes.
    ///
    /// # Errors
    ///
    /// Returns `UnexpectedEof` if fewer than `n` bytes remain.
    pub fn read_exact(&mut self, n: usize) -> Result<&'a [u8], CborError> {
        let off = self.pos;
        let end = self
            .pos
            .checked_add(n)
            .ok_or_else(|| CborError::new(ErrorCode::LengthOverflow, off))?;
        if end > self.data.len() {
            return Err(CborError::new(ErrorCode::UnexpectedEof, off));
        }
        let s = &self.data[self.pos..end];
        self.pos = end;
        Ok(s)
    }

    pub(crate) fn read_array<const N: usize>(&mut self) -> Result<[u8; N], CborError> {
        let s = self.read_exact(N)?;
        let mut out = [0u8; N];
        out.copy_from_slice(s);
        Ok(out)
    }

    /// Consume a big-endian `u16`.
    ///
    /// # Errors
    ///
    /// Returns `UnexpectedEof` if fewer than two bytes remain.
    pub fn read_be_u16(&mut self) -> Result<u16, CborError> {
        self.read_array().map(u16::from_be_bytes)
    }

    /// Consume a big-endian `u32`.
    ///
    /// # Errors
    ///
    /// Returns `UnexpectedEof` if fewer than four bytes remain.
    pub fn read_be_u32(&mut self) -> Result<u32, CborError> {
        self.read_array().map(u32::from_be_bytes)
    }

    /// Consume a big-endian `u64`.
    ///
    /// # Errors
    ///
    /// Returns `UnexpectedEof` if fewer than eight bytes remain.
    pub fn read_be_u64(&mut self) -> Result<u64, CborError> {
        self.read_array().map(u64::from_be_bytes)
    }

    /// Peek for the `0xff` break byte, consuming it if present.
    pub(crate) fn eat_break(&mut self) -> Result<bool, CborError> {
        if self.peek_u8()? == crate::head::BREAK {
            self.pos += 1;
            return Ok(true);
        }
        Ok(false)
    }
}

impl<'a> From<&'a [u8]> for CborStream<'a> {
    fn from(data: &'a [u8]) -> Self {
        Self::new(data)
    }
}

impl<'a, const N: usize> From<&'a [u8; N]> for CborStream<'a> {
    fn from(data: &'a [u8; N]) -> Self {
        Self::new(data)
    }
}

impl<'a> From<&'a alloc::vec::Vec<u8>> for CborStream<'a> {
    fn from(data: &'a alloc::vec::Vec<u8>) -> Self {
        Self::new(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copies_are_independent() {
        let bytes = [1u8, 2, 3];
        let mut s = CborStream::new(&bytes);
        let mut look = s;
        assert_eq!(look.read_u8().unwrap(), 1);
        assert_eq!(look.position(), 1);
        assert_eq!(s.position(), 0);
        assert_eq!(s.read_exact(3).unwrap(), &bytes);
        assert!(s.is_at_end());
    }

    #[test]
    fn short_reads_fail_without_advancing() {
        let mut s = CborStream::new(&[0x01]);
        let err = s.read_be_u16().unwrap_err();
        assert_eq!(err.code, ErrorCode::UnexpectedEof);
        assert_eq!(s.position(), 0);
        assert_eq!(CborStream::new(&[]).peek_u8().unwrap_err().offset, 0);
    }
}
