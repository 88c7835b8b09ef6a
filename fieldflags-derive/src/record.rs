use darling::{FromDeriveInput, FromField, ast, util::Ignored};
use itertools::Itertools as _;
use proc_macro2::{Literal, TokenStream as TokenStream2};
use quote::{quote, quote_spanned};
use syn::{
    Attribute, DeriveInput, Generics, Ident, Type, Visibility, ext::IdentExt as _,
    spanned::Spanned as _,
};

use crate::common::{FieldTag, IdentString};
use crate::generics::reject_generics;

#[derive(FromDeriveInput)]
#[darling(supports(struct_named))]
struct RawRecordInput {
    ident: Ident,
    generics: Generics,
    data: ast::Data<Ignored, RawRecordField>,
}

#[derive(FromField)]
#[darling(forward_attrs(flag))]
struct RawRecordField {
    ident: Option<Ident>,
    ty: Type,
    vis: Visibility,
    attrs: Vec<Attribute>,
}

struct ParsedField<'a> {
    ident: IdentString<'a>,
    ty: &'a Type,
    tag: FieldTag,

    /// Only `pub` fields can be matched by flags
    exported: bool,
}

impl<'a> ParsedField<'a> {
    fn from_field(field: &'a RawRecordField) -> syn::Result<Self> {
        let ident = field.ident.as_ref().ok_or_else(|| {
            syn::Error::new(field.ty.span(), "`derive(Record)` needs named fields")
        })?;

        Ok(Self {
            ident: IdentString::new(ident),
            ty: &field.ty,
            tag: FieldTag::from_attributes(&field.attrs)?,
            exported: matches!(field.vis, Visibility::Public(_)),
        })
    }

    fn is_promoted(&self) -> bool {
        self.exported && self.tag.promoted
    }
}

pub fn derive_record_result(item: TokenStream2) -> syn::Result<TokenStream2> {
    let input: DeriveInput = syn::parse2(item)?;
    let raw = RawRecordInput::from_derive_input(&input)?;

    reject_generics(&raw.generics)?;

    let ident = &raw.ident;
    let type_name = ident.unraw().to_string();

    let fields = raw
        .data
        .as_ref()
        .take_struct()
        .ok_or_else(|| syn::Error::new(input.span(), "`derive(Record)` only supports structs"))?
        .fields;

    let fields: Vec<ParsedField> = fields
        .into_iter()
        .map(ParsedField::from_field)
        .try_collect()?;

    let descriptors = fields.iter().map(|field| {
        let name = field.ident.as_str();
        let tag = field.tag.value.as_str();
        let exported = field.exported;
        let ty = field.ty;

        let record = match field.is_promoted() {
            true => quote_spanned! {ty.span()=>
                ::core::option::Option::Some(
                    <#ty as ::fieldflags::Promoted>::promoted_shape
                        as fn() -> &'static ::fieldflags::Shape
                )
            },
            false => quote! { ::core::option::Option::None },
        };

        quote! {
            ::fieldflags::Field {
                name: #name,
                tag: #tag,
                exported: #exported,
                record: #record,
            }
        }
    });

    let accessor_arms = fields
        .iter()
        .enumerate()
        .filter(|(_, field)| field.exported)
        .map(|(index, field)| {
            let index = Literal::usize_unsuffixed(index);
            let member = &field.ident;

            let slot = match field.is_promoted() {
                true => quote_spanned! {field.ty.span()=>
                    ::fieldflags::FieldMut::Record(&mut self.#member)
                },
                false => quote_spanned! {field.ty.span()=>
                    ::fieldflags::FieldMut::Value(&mut self.#member)
                },
            };

            quote! {
                #index => ::core::option::Option::Some(#slot),
            }
        });

    Ok(quote! {
        const _: () = {
            static SHAPE: ::fieldflags::Shape = ::fieldflags::Shape {
                type_name: #type_name,
                fields: &[#(#descriptors,)*],
            };

            impl ::fieldflags::Record for #ident {
                #[inline]
                fn shape(&self) -> &'static ::fieldflags::Shape {
                    &SHAPE
                }

                fn field_mut(
                    &mut self,
                    index: usize,
                ) -> ::core::option::Option<::fieldflags::FieldMut<'_>> {
                    match index {
                        #(#accessor_arms)*
                        _ => ::core::option::Option::None,
                    }
                }
            }

            impl ::fieldflags::Promoted for #ident {
                #[inline]
                fn promoted_shape() -> &'static ::fieldflags::Shape {
                    &SHAPE
                }

                #[inline]
                fn ensure_present(&mut self) -> &mut dyn ::fieldflags::Record {
                    self
                }
            }
        };
    })
}
