use itertools::Itertools as _;
use lazy_format::lazy_format;
use proc_macro2::{Span, TokenStream as TokenStream2};
use quote::ToTokens;
use syn::{
    Attribute, Expr, ExprLit, Ident, Lit, LitStr, Meta, ext::IdentExt as _, spanned::Spanned as _,
};

pub struct IdentString<'a> {
    raw: &'a Ident,
    string: String,
}

impl<'a> IdentString<'a> {
    pub fn new(ident: &'a Ident) -> Self {
        Self {
            string: ident.unraw().to_string(),
            raw: ident,
        }
    }

    /// The identifier as it should appear to users, without any `r#`
    pub fn as_str(&self) -> &str {
        self.string.as_str()
    }
}

impl ToTokens for IdentString<'_> {
    fn to_tokens(&self, tokens: &mut TokenStream2) {
        self.raw.to_tokens(tokens);
    }
}

/// The `#[flag = "..."]` tag on a field, kept verbatim; the runtime parses
/// the aliases out of it. The derive only needs to know if it's promoted.
pub struct FieldTag {
    pub value: String,
    pub promoted: bool,
}

impl FieldTag {
    pub fn from_attributes(attrs: &[Attribute]) -> syn::Result<Self> {
        let lit = attrs
            .iter()
            .filter(|attr| attr.path().is_ident("flag"))
            .at_most_one()
            .map_err(|mut attrs| {
                syn::Error::new(
                    attrs.nth(1).map_or_else(Span::call_site, |attr| attr.span()),
                    "a field may have at most one #[flag] attribute",
                )
            })?
            .map(tag_literal)
            .transpose()?;

        let value = lit.map(|lit| lit.value()).unwrap_or_default();
        let promoted = value.split(',').any(|entry| entry == "+");

        Ok(Self { value, promoted })
    }
}

fn tag_literal(attr: &Attribute) -> syn::Result<LitStr> {
    match attr.meta {
        Meta::NameValue(ref meta) => match meta.value {
            Expr::Lit(ExprLit {
                lit: Lit::Str(ref lit),
                ..
            }) => Ok(lit.clone()),
            ref value => Err(syn::Error::new(
                value.span(),
                "#[flag] must be a string, as in #[flag = \"name,alias\"]",
            )),
        },
        ref meta => Err(syn::Error::new(
            meta.span(),
            lazy_format!(
                "expected #[flag = \"...\"], found #[{}]",
                meta.to_token_stream()
            ),
        )),
    }
}
