//! Implementation of `#[derive(Viewable)]`.

use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{spanned::Spanned, Data, DeriveInput, Error, Fields, Result};

use super::attrs::{parse_view_attrs, FieldKind};

pub fn viewable_derive_impl(input: DeriveInput) -> Result<TokenStream> {
    let struct_name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => &named.named,
            _ => {
                return Err(Error::new(
                    input.span(),
                    "Viewable can only be derived for structs with named fields",
                ))
            }
        },
        _ => {
            return Err(Error::new(
                input.span(),
                "Viewable can only be derived for structs",
            ))
        }
    };

    let mut arms: Vec<TokenStream> = Vec::new();
    let mut constants: Vec<TokenStream> = Vec::new();
    let mut searched: Vec<String> = Vec::new();
    let mut seen: Vec<String> = Vec::new();

    for field in fields {
        let field_ident = field
            .ident
            .as_ref()
            .ok_or_else(|| Error::new(field.span(), "expected named field"))?;

        let attr = parse_view_attrs(&field.attrs)?;
        if attr.skip {
            continue;
        }
        let Some(kind) = attr.resolved_kind() else {
            continue;
        };

        let name = attr.rename.unwrap_or_else(|| field_ident.to_string());
        if seen.contains(&name) {
            return Err(Error::new(attr.span, format!("duplicate view field '{name}'")));
        }
        seen.push(name.clone());

        let const_ident = format_ident!("{}", to_screaming_snake_case(&name));
        constants.push(quote! {
            /// Field name for view clauses and sort keys.
            pub const #const_ident: &'static str = #name;
        });

        let value = match kind {
            FieldKind::Text => quote! { ::vaidya_view::Field::from(&self.#field_ident) },
            FieldKind::Number => quote! {
                ::vaidya_view::Field::Number(::vaidya_view::Number::from(self.#field_ident))
            },
            FieldKind::Timestamp => quote! {
                ::vaidya_view::Field::Instant(
                    ::vaidya_view::ViewTimestamp::view_timestamp(&self.#field_ident)
                )
            },
            FieldKind::Choice => quote! {
                ::vaidya_view::Field::Choice(
                    ::vaidya_view::ViewChoice::label(&self.#field_ident)
                )
            },
            FieldKind::Flag => quote! { ::vaidya_view::Field::Flag(self.#field_ident) },
        };
        arms.push(quote! { #name => #value, });

        if attr.search {
            searched.push(name);
        }
    }

    Ok(quote! {
        impl #impl_generics #struct_name #ty_generics #where_clause {
            #(#constants)*
        }

        impl #impl_generics ::vaidya_view::Viewable for #struct_name #ty_generics #where_clause {
            const SEARCH_FIELDS: &'static [&'static str] = &[#(#searched),*];

            fn field_value(&self, field: &str) -> ::vaidya_view::Field<'_> {
                match field {
                    #(#arms)*
                    _ => ::vaidya_view::Field::Missing,
                }
            }
        }
    })
}

/// `nextSession` and `next_session` both become `NEXT_SESSION`.
fn to_screaming_snake_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 4);
    let mut prev_lower = false;

    for c in s.chars() {
        if c.is_uppercase() {
            if prev_lower {
                out.push('_');
            }
            out.push(c);
            prev_lower = false;
        } else if c == '_' || c == '-' {
            out.push('_');
            prev_lower = false;
        } else {
            out.push(c.to_ascii_uppercase());
            prev_lower = c.is_alphanumeric();
        }
    }

    out
}
