//! Parsing of `#[view(...)]` field attributes.

use proc_macro2::Span;
use syn::{
    parse::{Parse, ParseStream},
    punctuated::Punctuated,
    spanned::Spanned,
    Attribute, Error, Ident, Lit, Meta, Result, Token,
};

/// How a field is exposed as a `vaidya_view::Field`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// `#[view(text)]`: `String`, `&str` or an `Option` of those.
    Text,
    /// `#[view(number)]`: any primitive number.
    Number,
    /// `#[view(timestamp)]`: a type implementing `ViewTimestamp`.
    Timestamp,
    /// `#[view(choice)]`: a type implementing `ViewChoice`.
    Choice,
    /// `#[view(flag)]`: `bool`.
    Flag,
}

impl FieldKind {
    fn from_ident(ident: &Ident) -> Option<Self> {
        match ident.to_string().as_str() {
            "text" | "Text" => Some(FieldKind::Text),
            "number" | "Number" => Some(FieldKind::Number),
            "timestamp" | "Timestamp" => Some(FieldKind::Timestamp),
            "choice" | "Choice" => Some(FieldKind::Choice),
            "flag" | "Flag" => Some(FieldKind::Flag),
            _ => None,
        }
    }

    fn is_textual(self) -> bool {
        matches!(self, FieldKind::Text | FieldKind::Choice)
    }
}

/// Everything `#[view(...)]` can say about one field.
#[derive(Debug, Clone)]
pub struct ViewAttr {
    pub kind: Option<FieldKind>,
    /// Included in the default search text.
    pub search: bool,
    pub skip: bool,
    pub rename: Option<String>,
    pub span: Span,
}

impl Default for ViewAttr {
    fn default() -> Self {
        ViewAttr {
            kind: None,
            search: false,
            skip: false,
            rename: None,
            span: Span::call_site(),
        }
    }
}

impl ViewAttr {
    /// The kind after defaults: a bare `search` means text.
    pub fn resolved_kind(&self) -> Option<FieldKind> {
        match (self.kind, self.search) {
            (Some(kind), _) => Some(kind),
            (None, true) => Some(FieldKind::Text),
            (None, false) => None,
        }
    }
}

impl Parse for ViewAttr {
    fn parse(input: ParseStream) -> Result<Self> {
        let mut attr = ViewAttr {
            span: input.span(),
            ..ViewAttr::default()
        };

        let content: Punctuated<Meta, Token![,]> = Punctuated::parse_terminated(input)?;

        for meta in content {
            match &meta {
                Meta::Path(p) if p.is_ident("skip") => attr.skip = true,
                Meta::Path(p) if p.is_ident("search") => attr.search = true,
                Meta::Path(p) => {
                    let ident = p
                        .get_ident()
                        .ok_or_else(|| Error::new(p.span(), "expected a field kind"))?;
                    let kind = FieldKind::from_ident(ident).ok_or_else(|| {
                        Error::new(
                            ident.span(),
                            format!(
                                "unknown view kind: '{}'. Expected one of: text, number, timestamp, choice, flag",
                                ident
                            ),
                        )
                    })?;
                    if attr.kind.replace(kind).is_some() {
                        return Err(Error::new(ident.span(), "field kind given twice"));
                    }
                    attr.span = ident.span();
                }
                Meta::NameValue(nv) if nv.path.is_ident("rename") => match &nv.value {
                    syn::Expr::Lit(syn::ExprLit {
                        lit: Lit::Str(s), ..
                    }) => attr.rename = Some(s.value()),
                    other => {
                        return Err(Error::new(other.span(), "rename must be a string literal"))
                    }
                },
                _ => {
                    return Err(Error::new(
                        meta.span(),
                        "unknown view attribute. Expected: text, number, timestamp, choice, flag, search, skip, or rename = \"...\"",
                    ))
                }
            }
        }

        if attr.search && attr.kind.is_some_and(|k| !k.is_textual()) {
            return Err(Error::new(
                attr.span,
                "only text and choice fields can be searched",
            ));
        }

        Ok(attr)
    }
}

/// Reads the `#[view(...)]` attribute of a field, if any.
pub fn parse_view_attrs(attrs: &[Attribute]) -> Result<ViewAttr> {
    match attrs.iter().find(|a| a.path().is_ident("view")) {
        Some(attr) => attr.parse_args::<ViewAttr>(),
        None => Ok(ViewAttr::default()),
    }
}
