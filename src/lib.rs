//! # ledger-cbor
//!
//! A CBOR codec specialized to the encoding conventions of ledger on-chain data.
//!
//! ## Design principles
//!
//! - **One cursor, passed down.**
//!   Every decoder takes `&mut` [`CborStream`] and advances it past exactly one item; composite
//!   decoders hand the same stream to their item decoders. Predicates (`is_*`, `peek_*`) take
//!   `&CborStream` and never move the caller's position.
//! - **Encoders are compositional.**
//!   Every `encode_*` returns a flat `Vec<u8>`; containers accept already-encoded bytes or any
//!   [`ToCbor`] value through [`Encodeable`].
//! - **Decoders are polymorphic.**
//!   Anywhere a decoder is expected, pass a plain function such as [`decode_int`], a closure, or
//!   [`decoder::<T>()`](decoder) for a [`FromCbor`] type.
//!
//! ## Wire conventions
//!
//! - Heads always use the shortest argument form.
//! - Integers outside `[-2^64, 2^64-1]` use bignum tags 2/3 ([`BigInt`]).
//! - Empty lists are definite (`0x80`); non-empty lists are indefinite (`0x9f ... 0xff`).
//!   Decoders accept both at any length.
//! - Maps are definite; decoders also accept indefinite maps. Keys are not reordered or
//!   deduplicated.
//! - Byte strings may be split into indefinite form with chunks of at most [`MAX_CHUNK_LEN`]
//!   bytes; text may be split into a list of text chunks on code-point boundaries.
//! - Sets are tag [`SET_TAG`] over a definite list; the tag is optional on decode.
//! - Constructor variant `i` uses tag `121 + i` for `0..=6`, `1280 + (i - 7)` for `7..=127`, and
//!   tag 102 over `[i, fields]` beyond that.
//!
//! ## Example
//!
//! ```
//! use ledger_cbor::{decode_bytes, decode_constr_fields, encode_bytes, encode_constr, CborStream};
//!
//! let bytes = encode_constr(0, [encode_bytes(b"key", false)]);
//! let mut s = CborStream::new(&bytes);
//! let (index, (key,)) = decode_constr_fields(&mut s, (decode_bytes,)).unwrap();
//! assert_eq!(index, 0);
//! assert_eq!(key, b"key");
//! ```
//!
//! ## Feature flags
//!
//! - `std` *(default)*: implements `std::error::Error` for [`CborError`].
//! - `simdutf8`: enables SIMD-accelerated UTF-8 validation where supported.
//!
//! ## `no_std`
//!
//! The crate is `no_std` compatible and requires `alloc`.

#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]

extern crate alloc;

mod bytes;
mod constr;
mod error;
mod float;
mod generic;
mod head;
mod impls;
mod int;
mod list;
mod map;
mod object;
mod option;
mod scalar;
mod set;
mod skip;
mod stream;
mod string;
mod tag;
mod tagged;
mod tuple;
pub(crate) mod utf8;

pub use crate::bytes::{
    decode_bytes, encode_bytes, encode_bytes_into, is_bytes, is_def_bytes, is_indef_bytes,
    MAX_CHUNK_LEN,
};
pub use crate::constr::{
    decode_constr, decode_constr_fields, decode_constr_lazy, decode_constr_tag, encode_constr,
    encode_constr_tag_into, is_constr,
};
pub use crate::error::{CborError, ErrorCode, ErrorKind};
pub use crate::float::{
    decode_float, decode_float16, decode_float32, decode_float64, encode_float16, encode_float32,
    encode_float64, is_float, is_float16, is_float32, is_float64,
};
pub use crate::generic::{
    decode_exact, decode_generic, decoder, encode_generic, from_cbor_bytes, Decoder, Decoders,
    Encodeable, FromCbor, SelfDecoding, ToCbor,
};
pub use crate::head::{
    decode_def_head, decode_head, encode_def_head, encode_head_into, encode_indef_head,
    peek_major, peek_major_and_minor, Arg, Head, Major, BREAK,
};
pub use crate::impls::Bytes;
pub use crate::int::{decode_int, encode_int, encode_int_into, is_int, BigInt};
pub use crate::list::{
    decode_list, decode_list_indexed, decode_list_lazy, decode_list_lazy_option, encode_def_list,
    encode_indef_list, encode_list, is_def_list, is_indef_list, is_list, ListReader,
};
pub use crate::map::{decode_map, encode_def_map, encode_indef_map, encode_map, is_map};
pub use crate::object::{
    decode_object_ikey, decode_object_skey, encode_object_ikey, encode_object_skey, is_object,
    ObjectDecoder,
};
pub use crate::option::{decode_option, encode_option};
pub use crate::scalar::{
    decode_bool, decode_null, encode_bool, encode_null, is_bool, is_null,
};
pub use crate::set::{decode_set, encode_set, is_set, SET_TAG};
pub use crate::skip::skip_item;
pub use crate::stream::CborStream;
pub use crate::string::{decode_string, encode_string, is_string};
pub use crate::tag::{decode_tag, encode_tag, is_tag, peek_tag};
pub use crate::tagged::decode_tagged;
pub use crate::tuple::{decode_tuple, decode_tuple_lazy, encode_tuple, is_tuple};

pub use half::f16;
pub use ledger_cbor_derive::{FromCbor, ToCbor};

#[doc(hidden)]
pub mod __private {
    pub use alloc::vec::Vec;
}
