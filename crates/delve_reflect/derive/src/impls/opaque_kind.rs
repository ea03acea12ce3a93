use proc_macro2::TokenStream;
use quote::quote;

use super::{bounded_generics, get_debug_impl};
use crate::derive_data::ReflectMeta;

/// Implement `Reflect` for a type without reflected children.
pub(crate) fn impl_opaque(meta: &ReflectMeta) -> TokenStream {
    let delve_reflect_path = meta.delve_reflect_path();
    let reflect_ = crate::path::reflect_(delve_reflect_path);
    let reflect_ref_ = crate::path::reflect_ref_(delve_reflect_path);

    let ident = meta.ident();
    let generics = bounded_generics(meta);
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let reflect_debug_tokens = get_debug_impl(meta);

    quote! {
        impl #impl_generics #reflect_ for #ident #ty_generics #where_clause {
            #[inline]
            fn reflect_ref(&self) -> #reflect_ref_<'_> {
                #reflect_ref_::Opaque(self)
            }

            #reflect_debug_tokens
        }
    }
}
