//! Provide reflection impls for foreign types, and helpers for writing more.
//!
//! - [`impl_reflect_opaque!`]: implement [`Reflect`] for leaf types.
//! - [`reflect_ref_debug`]: the default [`Reflect::reflect_debug`].
//!
//! ## Implemented Menu
//!
//! - native:
//!     - `bool`, `char`, `()`, `i8`-`i128`, `u8`-`u128`, `isize`, `usize`, `f32`, `f64` (opaque)
//!     - `&'static str` (opaque)
//!     - `[T; N]` (array)
//!     - `(P0,)`, `(P0, P1, ...)`, up to 8 elements (struct, fields `"0"`, `"1"`, ...)
//!     - `&'static T`, `&'static dyn Reflect` (pointer)
//! - core:
//!     - `Option<T>` (pointer, `None` is nil)
//!     - `core::time::Duration` (opaque)
//! - alloc:
//!     - `String`, `Box<str>`, `Arc<str>`, `Cow<'static, str>` (opaque)
//!     - `Box<T>`, `Box<dyn Reflect>`, `Arc<T>`, `Arc<dyn Reflect>` (pointer)
//!     - `Vec<T>`, `VecDeque<T>` (list)
//!     - `BTreeMap<K, V>` (map)
//! - std: ("std" feature)
//!     - `HashMap<K, V, S>` (map)
//! - hashbrown:
//!     - `hashbrown::HashMap<K, V, S>` (map)
//! - serde_json: ("serde_json" feature)
//!     - `Value` (pointer to its payload, `Null` is nil)
//!     - `Map<String, Value>` (map), `Number` (opaque)
//!
//! [`Reflect`]: crate::Reflect
//! [`Reflect::reflect_debug`]: crate::Reflect::reflect_debug
//! [`impl_reflect_opaque!`]: crate::impl_reflect_opaque

// -----------------------------------------------------------------------------
// Modules

mod utils;

mod alloc;
mod core;
mod hashbrown;
mod native;

crate::cfg::std! { mod std; }

crate::cfg::serde_json! { mod serde_json; }

// -----------------------------------------------------------------------------
// Exports

pub use utils::reflect_ref_debug;

pub(crate) use utils::{is_str_key, lookup_str_key};
