use syn::{Generics, Ident};

use crate::derive_data::TypeAttributes;

/// What every reflected type needs, whatever its shape.
pub(crate) struct ReflectMeta<'a> {
    attrs: TypeAttributes,
    ident: &'a Ident,
    generics: &'a Generics,
    delve_reflect_path: syn::Path,
}

impl<'a> ReflectMeta<'a> {
    pub(crate) fn new(attrs: TypeAttributes, ident: &'a Ident, generics: &'a Generics) -> Self {
        Self {
            attrs,
            ident,
            generics,
            delve_reflect_path: crate::path::delve_reflect(),
        }
    }

    #[inline]
    pub(crate) fn attrs(&self) -> &TypeAttributes {
        &self.attrs
    }

    #[inline]
    pub(crate) fn ident(&self) -> &Ident {
        self.ident
    }

    #[inline]
    pub(crate) fn generics(&self) -> &Generics {
        self.generics
    }

    #[inline]
    pub(crate) fn delve_reflect_path(&self) -> &syn::Path {
        &self.delve_reflect_path
    }
}
