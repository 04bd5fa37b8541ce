//! Derive macros for `ledger-cbor`.
//!
//! - Structs encode as constructor data over their fields (`#[cbor(constr = N)]`, default `0`),
//!   or as a plain tuple with `#[cbor(tuple)]`.
//! - Enums encode each variant as constructor data; the index is the variant's position unless
//!   overridden with `#[cbor(constr = N)]` on the variant.
//!
//! Decoding requires exactly as many fields as declared.

extern crate proc_macro;

mod attrs;
mod decode;
mod encode;
mod fields;
mod util;

use proc_macro::TokenStream;
use syn::{parse_macro_input, spanned::Spanned, Data, DataEnum, DeriveInput};

use crate::attrs::parse_variant_attrs;

/// Constructor index of every variant, in declaration order.
///
/// Unannotated variants take their position; duplicates are rejected.
pub(crate) fn variant_indices(data: &DataEnum) -> syn::Result<Vec<u64>> {
    let mut out: Vec<u64> = Vec::with_capacity(data.variants.len());
    for (pos, variant) in data.variants.iter().enumerate() {
        let index = parse_variant_attrs(&variant.attrs)?.unwrap_or(pos as u64);
        if out.contains(&index) {
            return Err(syn::Error::new(
                variant.span(),
                format!("duplicate constructor index {index}"),
            ));
        }
        out.push(index);
    }
    Ok(out)
}

#[proc_macro_derive(ToCbor, attributes(cbor))]
pub fn derive_to_cbor(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let out = match &input.data {
        Data::Struct(data) => encode::encode_struct(&input, data),
        Data::Enum(data) => encode::encode_enum(&input, data),
        Data::Union(u) => Err(syn::Error::new(
            u.union_token.span(),
            "ToCbor not supported for unions",
        )),
    };
    TokenStream::from(out.unwrap_or_else(syn::Error::into_compile_error))
}

#[proc_macro_derive(FromCbor, attributes(cbor))]
pub fn derive_from_cbor(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let out = match &input.data {
        Data::Struct(data) => decode::decode_struct(&input, data),
        Data::Enum(data) => decode::decode_enum(&input, data),
        Data::Union(u) => Err(syn::Error::new(
            u.union_token.span(),
            "FromCbor not supported for unions",
        )),
    };
    TokenStream::from(out.unwrap_or_else(syn::Error::into_compile_error))
}
