use std::collections::HashSet;

use syn::{Fields, LitStr, Member};

use crate::derive_data::{FieldAttributes, ReflectMeta};

/// A reflected field of a struct.
pub(crate) struct StructField {
    /// How the field is accessed, `self.#member`.
    pub member: Member,
    /// The name a path uses for the field.
    pub name: String,
}

/// A struct reflected as `Struct`.
pub(crate) struct ReflectStruct<'a> {
    meta: ReflectMeta<'a>,
    fields: Vec<StructField>,
}

impl<'a> ReflectStruct<'a> {
    /// Collects the reflected fields, in declaration order.
    pub(crate) fn new(meta: ReflectMeta<'a>, fields: &'a Fields) -> syn::Result<Self> {
        let mut seen = HashSet::new();
        let mut result = Vec::with_capacity(fields.len());

        for (index, field) in fields.iter().enumerate() {
            let attrs = FieldAttributes::parse_attrs(&field.attrs)?;
            if attrs.skip.is_some() {
                continue;
            }

            let member = match &field.ident {
                Some(ident) => Member::Named(ident.clone()),
                None => Member::Unnamed(index.into()),
            };
            let name = match (&attrs.rename, &field.ident) {
                (Some(rename), _) => rename.value(),
                (None, Some(ident)) => unraw(&ident.to_string()).to_owned(),
                (None, None) => index.to_string(),
            };

            if !seen.insert(name.clone()) {
                let message = format!("duplicate reflected field name `{name}`");
                return Err(match &attrs.rename {
                    Some(rename) => syn::Error::new(rename.span(), message),
                    None => syn::Error::new_spanned(field, message),
                });
            }

            result.push(StructField { member, name });
        }

        Ok(Self {
            meta,
            fields: result,
        })
    }

    #[inline]
    pub(crate) fn meta(&self) -> &ReflectMeta<'a> {
        &self.meta
    }

    #[inline]
    pub(crate) fn fields(&self) -> &[StructField] {
        &self.fields
    }

    /// Field names as string literals, in declaration order.
    pub(crate) fn name_literals(&self) -> impl Iterator<Item = LitStr> + '_ {
        self.fields
            .iter()
            .map(|field| LitStr::new(&field.name, proc_macro2::Span::call_site()))
    }
}

/// Strips the `r#` prefix of raw identifiers, `r#type` is named `type`.
fn unraw(ident: &str) -> &str {
    ident.strip_prefix("r#").unwrap_or(ident)
}
