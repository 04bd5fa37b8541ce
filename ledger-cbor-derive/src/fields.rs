use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{Fields, Ident, Index, Type};

use crate::attrs::ensure_no_cbor_attrs;

/// The fields of a struct or variant, in declaration order.
pub(crate) struct FieldList<'a> {
    pub(crate) fields: &'a Fields,
    pub(crate) tys: Vec<&'a Type>,
}

impl<'a> FieldList<'a> {
    pub(crate) fn new(fields: &'a Fields) -> syn::Result<Self> {
        for field in fields {
            ensure_no_cbor_attrs(&field.attrs, "fields")?;
        }
        Ok(Self {
            fields,
            tys: fields.iter().map(|f| &f.ty).collect(),
        })
    }

    pub(crate) fn len(&self) -> usize {
        self.tys.len()
    }

    /// Local binding names `__f0, __f1, ...`.
    pub(crate) fn vars(&self) -> Vec<Ident> {
        (0..self.len()).map(|i| format_ident!("__f{i}")).collect()
    }

    /// `&self.a` / `&self.0` accessors.
    pub(crate) fn self_accessors(&self) -> Vec<TokenStream> {
        self.fields
            .iter()
            .enumerate()
            .map(|(i, f)| match &f.ident {
                Some(id) => quote!(&self.#id),
                None => {
                    let idx = Index::from(i);
                    quote!(&self.#idx)
                }
            })
            .collect()
    }

    /// Pattern binding every field to its `__fN` var, e.g. `{ a: __f0 }` or `(__f0)`.
    pub(crate) fn pattern(&self) -> TokenStream {
        let vars = self.vars();
        match self.fields {
            Fields::Named(named) => {
                let names = named.named.iter().map(|f| &f.ident);
                quote!({ #(#names: #vars),* })
            }
            Fields::Unnamed(_) => quote!((#(#vars),*)),
            Fields::Unit => quote!(),
        }
    }
}
