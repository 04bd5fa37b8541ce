use crate::constr::decode_constr_lazy;
use crate::int::decode_u64;
use crate::list::{decode_list_lazy, is_list, ListReader};
use crate::{CborError, CborStream};

/// Decode a sum-type value written either as a plain list `[index, ...fields]` or as a
/// constructor, returning the variant index and a reader over the remaining fields.
///
/// # Errors
///
/// Returns `EndOfList` for an empty list and the constructor tag errors otherwise (`ExpectedTag`
/// when the item is neither a list nor a tag).
pub fn decode_tagged<'s, 'a>(
    s: &'s mut CborStream<'a>,
) -> Result<(u64, ListReader<'s, 'a>), CborError> {
    if is_list(s)? {
        let mut fields = decode_list_lazy(s)?;
        let index = fields.next(decode_u64)?;
        return Ok((index, fields));
    }
    decode_constr_lazy(s)
}
