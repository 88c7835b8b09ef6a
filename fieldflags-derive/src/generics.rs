use syn::{GenericParam, Generics, spanned::Spanned};

/// Records describe themselves with a single non-generic `static`, so they
/// can't have generic parameters of any kind.
pub fn reject_generics(generics: &Generics) -> syn::Result<()> {
    let errors = generics.params.iter().map(|param| {
        syn::Error::new(
            param.span(),
            match param {
                GenericParam::Lifetime(_) => "lifetimes aren't supported by `derive(Record)`",
                GenericParam::Type(_) => "generic types aren't supported by `derive(Record)`",
                GenericParam::Const(_) => "const generics aren't supported by `derive(Record)`",
            },
        )
    });

    match errors.reduce(|mut combined, err| {
        combined.combine(err);
        combined
    }) {
        Some(err) => Err(err),
        None => match generics.where_clause {
            Some(ref clause) if !clause.predicates.is_empty() => Err(syn::Error::new(
                clause.span(),
                "where clauses aren't supported by `derive(Record)`",
            )),
            _ => Ok(()),
        },
    }
}
