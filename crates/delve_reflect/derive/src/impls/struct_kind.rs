use proc_macro2::TokenStream;
use quote::quote;
use syn::{LitStr, Member};

use super::{bounded_generics, get_debug_impl};
use crate::derive_data::ReflectStruct;

/// Implement `Reflect` and `Struct` for a struct with reflected fields.
///
/// Named and tuple structs share this: a tuple struct field is simply named
/// by its position.
pub(crate) fn impl_struct(info: &ReflectStruct) -> TokenStream {
    let meta = info.meta();
    let delve_reflect_path = meta.delve_reflect_path();
    let reflect_ = crate::path::reflect_(delve_reflect_path);
    let reflect_ref_ = crate::path::reflect_ref_(delve_reflect_path);
    let struct_ = crate::path::struct_(delve_reflect_path);
    let option_ = crate::path::option_();

    let ident = meta.ident();
    let generics = bounded_generics(meta);
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let members: Vec<&Member> = info.fields().iter().map(|field| &field.member).collect();
    let names: Vec<LitStr> = info.name_literals().collect();
    let indices: Vec<usize> = (0..names.len()).collect();
    let field_len = names.len();

    let reflect_debug_tokens = get_debug_impl(meta);

    quote! {
        impl #impl_generics #reflect_ for #ident #ty_generics #where_clause {
            #[inline]
            fn reflect_ref(&self) -> #reflect_ref_<'_> {
                #reflect_ref_::Struct(self)
            }

            #reflect_debug_tokens
        }

        impl #impl_generics #struct_ for #ident #ty_generics #where_clause {
            fn field(&self, name: &str) -> #option_<&dyn #reflect_> {
                match name {
                    #( #names => #option_::Some(&self.#members as &dyn #reflect_), )*
                    _ => #option_::None,
                }
            }

            fn field_at(&self, index: usize) -> #option_<&dyn #reflect_> {
                match index {
                    #( #indices => #option_::Some(&self.#members as &dyn #reflect_), )*
                    _ => #option_::None,
                }
            }

            fn name_at(&self, index: usize) -> #option_<&str> {
                match index {
                    #( #indices => #option_::Some(#names), )*
                    _ => #option_::None,
                }
            }

            #[inline]
            fn field_len(&self) -> usize {
                #field_len
            }
        }
    }
}
