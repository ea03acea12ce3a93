//! See following macros:
//!
//! - [`Reflect`]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(clippy::std_instead_of_core, reason = "proc-macro lib")]
#![allow(clippy::std_instead_of_alloc, reason = "proc-macro lib")]

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

static REFLECT_ATTRIBUTE_NAME: &str = "reflect";

// -----------------------------------------------------------------------------
// Modules

mod derive_data;
mod impls;
mod path;

// -----------------------------------------------------------------------------
// Macros

/// # Reflection Derivation
///
/// `#[derive(Reflect)]` implements `Reflect`, and the capability trait of the
/// shape the type is reflected as:
///
/// - `struct T { ... }`: `Struct`, fields named as written.
/// - `struct T(...);`: `Struct`, fields named `"0"`, `"1"`, ...
/// - `struct T;` and `enum T { ... }`: opaque, no children.
///
/// Type parameters get a `Reflect` bound. Lifetime parameters are not
/// supported, since reflected values must be `'static`.
///
/// ## Opaque Types
///
/// `#[reflect(opaque)]` reflects a struct as opaque, hiding its fields.
///
/// Opaque values format as their type path unless `#[reflect(debug)]` is
/// given, in which case the type's own `Debug` impl is used. Both can be
/// combined:
///
/// ```rust, ignore
/// #[derive(Debug, Reflect)]
/// #[reflect(opaque, debug)]
/// struct Secret { key: [u8; 32] }
/// ```
///
/// These attributes can only be applied at the type level.
///
/// ## Field Names
///
/// `#[reflect(rename = "Name")]` changes the name a path uses for a field,
/// including the positional fields of tuple structs.
///
/// ```rust, ignore
/// #[derive(Reflect)]
/// struct Header {
///     #[reflect(rename = "Content-Type")]
///     content_type: String,
/// }
/// ```
///
/// Two fields may not end up with the same name.
///
/// ## skip
///
/// `#[reflect(skip)]` hides a field from reflection entirely: it cannot be
/// reached by a path, is not counted by `field_len` and its type does not
/// need to implement `Reflect`. The remaining fields keep their names, so a
/// skipped tuple field leaves a gap in the numbering.
///
/// These attributes can only be applied on fields.
#[proc_macro_derive(Reflect, attributes(reflect))]
pub fn derive_reflect(input: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(input as DeriveInput);

    impls::match_reflect_impls(ast).into()
}
