//! This independent module is used to provide the required paths.
//! So as to minimize changes when the `delve_reflect` structure is modified.

use proc_macro2::TokenStream;
use quote::quote;

/// Get the correct access path to the `delve_reflect` crate.
///
/// 1. For crates that depend on `delve_reflect`, `::delve_reflect` is returned.
/// 2. For crates that depend on `delve`, `::delve::reflect` is returned.
/// 3. For other situations, `::delve_reflect` is returned, but this may be incorrect.
///
/// This reads the caller's `Cargo.toml`, so it is called once per derive and
/// the result passed around.
pub(crate) fn delve_reflect() -> syn::Path {
    delve_macro_utils::Manifest::load().get_crate_path("delve_reflect")
}

#[inline(always)]
pub(crate) fn reflect_(delve_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #delve_reflect_path::Reflect
    }
}

#[inline(always)]
pub(crate) fn reflect_ref_(delve_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #delve_reflect_path::ops::ReflectRef
    }
}

#[inline(always)]
pub(crate) fn struct_(delve_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #delve_reflect_path::ops::Struct
    }
}

#[inline(always)]
pub(crate) fn option_() -> TokenStream {
    quote! {
        ::core::option::Option
    }
}
