//! Provide some tools for parsing `#[reflect(...)]` attributes.

use proc_macro2::Span;
use syn::{Attribute, LitStr};

use crate::REFLECT_ATTRIBUTE_NAME;

// -----------------------------------------------------------------------------
// Type attributes

/// Attributes on the type itself.
#[derive(Default, Debug)]
pub(crate) struct TypeAttributes {
    /// `#[reflect(opaque)]`: do not expose fields.
    pub opaque: Option<Span>,
    /// `#[reflect(debug)]`: `reflect_debug` forwards to `Debug`.
    pub debug: Option<Span>,
}

impl TypeAttributes {
    pub(crate) fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut result = Self::default();

        for attr in attrs {
            if !attr.path().is_ident(REFLECT_ATTRIBUTE_NAME) {
                continue;
            }
            attr.parse_nested_meta(|meta| {
                let span = meta.path.require_ident()?.span();
                if meta.path.is_ident("opaque") {
                    result.opaque = Some(span);
                    Ok(())
                } else if meta.path.is_ident("debug") {
                    result.debug = Some(span);
                    Ok(())
                } else if meta.path.is_ident("skip") || meta.path.is_ident("rename") {
                    Err(meta.error("this attribute can only be applied on fields"))
                } else {
                    Err(meta.error("unsupported reflect attribute, expected `opaque` or `debug`"))
                }
            })?;
        }

        Ok(result)
    }
}

// -----------------------------------------------------------------------------
// Field attributes

/// Attributes on a single field.
#[derive(Default, Debug)]
pub(crate) struct FieldAttributes {
    /// `#[reflect(skip)]`: the field does not exist for reflection.
    pub skip: Option<Span>,
    /// `#[reflect(rename = "...")]`: the name a path uses for the field.
    pub rename: Option<LitStr>,
}

impl FieldAttributes {
    pub(crate) fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut result = Self::default();

        for attr in attrs {
            if !attr.path().is_ident(REFLECT_ATTRIBUTE_NAME) {
                continue;
            }
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("skip") {
                    result.skip = Some(meta.path.require_ident()?.span());
                    Ok(())
                } else if meta.path.is_ident("rename") {
                    let name: LitStr = meta.value()?.parse()?;
                    if name.value().is_empty() {
                        return Err(syn::Error::new(name.span(), "field name can't be empty"));
                    }
                    if result.rename.is_some() {
                        return Err(meta.error("duplicate `rename` attribute"));
                    }
                    result.rename = Some(name);
                    Ok(())
                } else if meta.path.is_ident("opaque") || meta.path.is_ident("debug") {
                    Err(meta.error("this attribute can only be applied at the type level"))
                } else {
                    Err(meta.error("unsupported reflect attribute, expected `skip` or `rename`"))
                }
            })?;
        }

        if let (Some(span), Some(_)) = (result.skip, &result.rename) {
            return Err(syn::Error::new(span, "`skip` and `rename` can't be combined"));
        }

        Ok(result)
    }
}
