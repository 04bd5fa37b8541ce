use proc_macro2::TokenStream;
use syn::{
    parse_quote, GenericArgument, Generics, Ident, PathArguments, Type, WhereClause,
    WherePredicate,
};

pub(crate) fn add_where_bound(wc: &mut WhereClause, ty: &Type, bound: &TokenStream) {
    let pred: WherePredicate = parse_quote!(#ty: #bound);
    wc.predicates.push(pred);
}

fn type_mentions_ident(ty: &Type, ident: &Ident) -> bool {
    match ty {
        Type::Path(tp) => tp.path.segments.iter().any(|seg| {
            if seg.ident == *ident {
                return true;
            }
            match &seg.arguments {
                PathArguments::AngleBracketed(args) => args.args.iter().any(|arg| match arg {
                    GenericArgument::Type(inner) => type_mentions_ident(inner, ident),
                    _ => false,
                }),
                _ => false,
            }
        }),
        Type::Reference(tr) => type_mentions_ident(&tr.elem, ident),
        Type::Tuple(tt) => tt.elems.iter().any(|elem| type_mentions_ident(elem, ident)),
        Type::Array(ta) => type_mentions_ident(&ta.elem, ident),
        Type::Slice(ts) => type_mentions_ident(&ts.elem, ident),
        Type::Group(tg) => type_mentions_ident(&tg.elem, ident),
        Type::Paren(tp) => type_mentions_ident(&tp.elem, ident),
        _ => false,
    }
}

/// Field types that need a trait bound: those mentioning a type parameter.
///
/// Concrete field types are checked by the compiler directly, and skipping them keeps
/// self-referential types from producing cyclic bounds.
pub(crate) fn generic_field_types<'a>(
    generics: &Generics,
    tys: impl IntoIterator<Item = &'a Type>,
) -> Vec<&'a Type> {
    let params: Vec<&Ident> = generics.type_params().map(|tp| &tp.ident).collect();
    let mut out: Vec<&Type> = Vec::new();
    for ty in tys {
        if params.iter().any(|p| type_mentions_ident(ty, p)) && !out.contains(&ty) {
            out.push(ty);
        }
    }
    out
}

/// `generics` with `bound` added for every generic field type.
pub(crate) fn bounded_generics<'a>(
    generics: &Generics,
    tys: impl IntoIterator<Item = &'a Type>,
    bound: &TokenStream,
) -> Generics {
    let mut out = generics.clone();
    let bounded = generic_field_types(generics, tys);
    let wc = out.make_where_clause();
    for ty in bounded {
        add_where_bound(wc, ty, bound);
    }
    out
}
