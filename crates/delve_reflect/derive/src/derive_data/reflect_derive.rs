use syn::{Data, DeriveInput, Fields, GenericParam};

use crate::derive_data::{ReflectMeta, ReflectStruct, TypeAttributes};

/// The shape a derived type is reflected as.
pub(crate) enum ReflectDerive<'a> {
    Struct(ReflectStruct<'a>),
    Opaque(ReflectMeta<'a>),
}

impl<'a> ReflectDerive<'a> {
    pub(crate) fn from_input(input: &'a DeriveInput) -> syn::Result<Self> {
        if let Some(param) = input
            .generics
            .params
            .iter()
            .find(|param| matches!(param, GenericParam::Lifetime(_)))
        {
            return Err(syn::Error::new_spanned(
                param,
                "`Reflect` can't be derived for types with lifetime parameters",
            ));
        }

        let attrs = TypeAttributes::parse_attrs(&input.attrs)?;
        let opaque = attrs.opaque.is_some();
        let meta = ReflectMeta::new(attrs, &input.ident, &input.generics);

        match &input.data {
            Data::Struct(data) => match &data.fields {
                Fields::Unit => Ok(Self::Opaque(meta)),
                _ if opaque => Ok(Self::Opaque(meta)),
                fields => Ok(Self::Struct(ReflectStruct::new(meta, fields)?)),
            },
            Data::Enum(_) => Ok(Self::Opaque(meta)),
            Data::Union(data) => Err(syn::Error::new_spanned(
                data.union_token,
                "`Reflect` can't be derived for unions",
            )),
        }
    }
}
