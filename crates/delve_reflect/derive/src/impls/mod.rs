//! Code generation for `#[derive(Reflect)]`.

// -----------------------------------------------------------------------------
// Modules

mod opaque_kind;
mod struct_kind;

use proc_macro2::TokenStream;
use quote::quote;
use syn::{DeriveInput, Generics, parse_quote};

use crate::derive_data::{ReflectDerive, ReflectMeta};

pub(crate) use opaque_kind::impl_opaque;
pub(crate) use struct_kind::impl_struct;

// -----------------------------------------------------------------------------
// Entry

/// Provided for `#[derive(Reflect)]`.
pub(crate) fn match_reflect_impls(ast: DeriveInput) -> TokenStream {
    // Parse type kind, attribute and fields infomation.
    let reflect_derive = match ReflectDerive::from_input(&ast) {
        Ok(val) => val,
        Err(err) => return err.into_compile_error(),
    };

    let reflect_impls = match reflect_derive {
        ReflectDerive::Struct(info) => impl_struct(&info),
        ReflectDerive::Opaque(meta) => impl_opaque(&meta),
    };

    quote! {
        const _: () = {
            #reflect_impls
        };
    }
}

// -----------------------------------------------------------------------------
// Shared pieces

/// The type's generics, each type parameter bounded by `Reflect`.
fn bounded_generics(meta: &ReflectMeta) -> Generics {
    let reflect_ = crate::path::reflect_(meta.delve_reflect_path());
    let mut generics = meta.generics().clone();
    for param in generics.type_params_mut() {
        param.bounds.push(parse_quote!(#reflect_));
    }
    generics
}

/// `reflect_debug` forwarding to `Debug`, with `#[reflect(debug)]`.
fn get_debug_impl(meta: &ReflectMeta) -> TokenStream {
    if meta.attrs().debug.is_none() {
        return TokenStream::new();
    }
    quote! {
        #[inline]
        fn reflect_debug(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
            ::core::fmt::Debug::fmt(self, f)
        }
    }
}
