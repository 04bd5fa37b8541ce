use proc_macro2::TokenStream;
use quote::quote;
use syn::{DataEnum, DataStruct, DeriveInput};

use crate::attrs::{ensure_no_cbor_attrs, parse_struct_attrs, StructLayout};
use crate::fields::FieldList;
use crate::util::bounded_generics;
use crate::variant_indices;

fn items_array(n: usize, values: &[TokenStream]) -> TokenStream {
    quote! {
        let items: [::ledger_cbor::Encodeable<'_>; #n] = [
            #(::ledger_cbor::Encodeable::value(#values)),*
        ];
    }
}

pub(crate) fn encode_struct(input: &DeriveInput, data: &DataStruct) -> syn::Result<TokenStream> {
    let name = &input.ident;
    let layout = parse_struct_attrs(&input.attrs)?;
    let fields = FieldList::new(&data.fields)?;

    let items = items_array(fields.len(), &fields.self_accessors());
    let encoded = match layout {
        StructLayout::Constr(index) => quote!(::ledger_cbor::encode_constr(#index, items)),
        StructLayout::Tuple => quote!(::ledger_cbor::encode_tuple(items)),
    };

    let generics = bounded_generics(
        &input.generics,
        fields.tys.iter().copied(),
        &quote!(::ledger_cbor::ToCbor),
    );
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::ledger_cbor::ToCbor for #name #ty_generics #where_clause {
            fn encode_cbor(&self, out: &mut ::ledger_cbor::__private::Vec<u8>) {
                #items
                out.extend_from_slice(&#encoded);
            }
        }
    })
}

pub(crate) fn encode_enum(input: &DeriveInput, data: &DataEnum) -> syn::Result<TokenStream> {
    let name = &input.ident;
    ensure_no_cbor_attrs(&input.attrs, "enums")?;
    let indices = variant_indices(data)?;

    let mut arms = Vec::new();
    let mut all_tys = Vec::new();
    for (variant, index) in data.variants.iter().zip(indices) {
        let fields = FieldList::new(&variant.fields)?;
        let v_ident = &variant.ident;
        let pattern = fields.pattern();
        let vars: Vec<TokenStream> = fields.vars().iter().map(|v| quote!(#v)).collect();
        let items = items_array(fields.len(), &vars);
        all_tys.extend(fields.tys.iter().copied());
        arms.push(quote! {
            Self::#v_ident #pattern => {
                #items
                ::ledger_cbor::encode_constr(#index, items)
            }
        });
    }

    let generics = bounded_generics(&input.generics, all_tys, &quote!(::ledger_cbor::ToCbor));
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::ledger_cbor::ToCbor for #name #ty_generics #where_clause {
            fn encode_cbor(&self, out: &mut ::ledger_cbor::__private::Vec<u8>) {
                let encoded = match self {
                    #(#arms)*
                };
                out.extend_from_slice(&encoded);
            }
        }
    })
}
