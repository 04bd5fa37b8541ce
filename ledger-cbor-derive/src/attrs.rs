use proc_macro2::Span;
use syn::{spanned::Spanned, Attribute, LitInt};

/// How a struct is laid out on the wire.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum StructLayout {
    /// Constructor with the given index over the field list.
    Constr(u64),
    /// Plain definite list of the fields.
    Tuple,
}

pub(crate) fn ensure_no_cbor_attrs(attrs: &[Attribute], ctx: &str) -> syn::Result<()> {
    for a in attrs {
        if a.path().is_ident("cbor") {
            return Err(syn::Error::new(
                a.span(),
                format!("`#[cbor(...)]` is not supported on {ctx}"),
            ));
        }
    }
    Ok(())
}

fn parse_constr(attrs: &[Attribute], allow_tuple: bool) -> syn::Result<(Option<u64>, bool)> {
    let mut constr = None;
    let mut tuple = false;
    for attr in attrs {
        if !attr.path().is_ident("cbor") {
            continue;
        }
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("constr") {
                if constr.is_some() {
                    return Err(meta.error("duplicate `cbor(constr = ...)`"));
                }
                let lit: LitInt = meta.value()?.parse()?;
                constr = Some(lit.base10_parse::<u64>()?);
                return Ok(());
            }
            if allow_tuple && meta.path.is_ident("tuple") {
                if tuple {
                    return Err(meta.error("duplicate `cbor(tuple)`"));
                }
                tuple = true;
                return Ok(());
            }
            if allow_tuple {
                Err(meta.error("unsupported `cbor(...)` attribute (allowed: constr, tuple)"))
            } else {
                Err(meta.error("unsupported `cbor(...)` variant attribute (allowed: constr)"))
            }
        })?;
    }
    Ok((constr, tuple))
}

pub(crate) fn parse_struct_attrs(attrs: &[Attribute]) -> syn::Result<StructLayout> {
    match parse_constr(attrs, true)? {
        (Some(_), true) => Err(syn::Error::new(
            Span::call_site(),
            "`cbor(tuple)` cannot be combined with `cbor(constr = ...)`",
        )),
        (_, true) => Ok(StructLayout::Tuple),
        (constr, false) => Ok(StructLayout::Constr(constr.unwrap_or(0))),
    }
}

/// Explicit constructor index of a variant, if any.
pub(crate) fn parse_variant_attrs(attrs: &[Attribute]) -> syn::Result<Option<u64>> {
    parse_constr(attrs, false).map(|(constr, _)| constr)
}
