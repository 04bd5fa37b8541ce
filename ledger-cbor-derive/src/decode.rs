use proc_macro2::TokenStream;
use quote::quote;
use syn::{DataEnum, DataStruct, DeriveInput};

use crate::attrs::{ensure_no_cbor_attrs, parse_struct_attrs, StructLayout};
use crate::fields::FieldList;
use crate::util::bounded_generics;
use crate::variant_indices;

/// Pull every field from `__fields`, require the list to end, then build `ctor`.
fn fields_block(fields: &FieldList<'_>, ctor: &TokenStream) -> TokenStream {
    let vars = fields.vars();
    let tys = &fields.tys;
    let pattern = fields.pattern();
    quote! {
        #(let #vars = __fields.next_required(::ledger_cbor::decoder::<#tys>())?;)*
        __fields.finish()?;
        ::core::result::Result::Ok(#ctor #pattern)
    }
}

fn unexpected_variant() -> TokenStream {
    quote! {
        ::core::result::Result::Err(::ledger_cbor::CborError::new(
            ::ledger_cbor::ErrorCode::UnexpectedVariant,
            __off,
        ))
    }
}

pub(crate) fn decode_struct(input: &DeriveInput, data: &DataStruct) -> syn::Result<TokenStream> {
    let name = &input.ident;
    let layout = parse_struct_attrs(&input.attrs)?;
    let fields = FieldList::new(&data.fields)?;
    let block = fields_block(&fields, &quote!(Self));

    let body = match layout {
        StructLayout::Constr(index) => {
            let mismatch = unexpected_variant();
            quote! {
                let __off = s.position();
                let (__index, mut __fields) = ::ledger_cbor::decode_constr_lazy(s)?;
                if __index != #index {
                    return #mismatch;
                }
                #block
            }
        }
        StructLayout::Tuple => quote! {
            let mut __fields = ::ledger_cbor::decode_tuple_lazy(s)?;
            #block
        },
    };

    let generics = bounded_generics(
        &input.generics,
        fields.tys.iter().copied(),
        &quote!(::ledger_cbor::FromCbor),
    );
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::ledger_cbor::FromCbor for #name #ty_generics #where_clause {
            #[allow(unused_mut)]
            fn from_cbor(
                s: &mut ::ledger_cbor::CborStream<'_>,
            ) -> ::core::result::Result<Self, ::ledger_cbor::CborError> {
                #body
            }
        }
    })
}

pub(crate) fn decode_enum(input: &DeriveInput, data: &DataEnum) -> syn::Result<TokenStream> {
    let name = &input.ident;
    ensure_no_cbor_attrs(&input.attrs, "enums")?;
    let indices = variant_indices(data)?;

    let mut arms = Vec::new();
    let mut all_tys = Vec::new();
    for (variant, index) in data.variants.iter().zip(indices) {
        let fields = FieldList::new(&variant.fields)?;
        let v_ident = &variant.ident;
        let block = fields_block(&fields, &quote!(Self::#v_ident));
        all_tys.extend(fields.tys.iter().copied());
        arms.push(quote! {
            #index => { #block }
        });
    }
    let mismatch = unexpected_variant();

    let generics = bounded_generics(&input.generics, all_tys, &quote!(::ledger_cbor::FromCbor));
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::ledger_cbor::FromCbor for #name #ty_generics #where_clause {
            #[allow(unused_mut)]
            fn from_cbor(
                s: &mut ::ledger_cbor::CborStream<'_>,
            ) -> ::core::result::Result<Self, ::ledger_cbor::CborError> {
                let __off = s.position();
                let (__index, mut __fields) = ::ledger_cbor::decode_constr_lazy(s)?;
                match __index {
                    #(#arms)*
                    _ => #mismatch,
                }
            }
        }
    })
}
