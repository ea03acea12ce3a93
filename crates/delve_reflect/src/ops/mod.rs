//! Provide the capability interfaces of reflected values.
//!
//! ## Menu
//!
//! The following are subtraits of [`Reflect`], each giving read access to
//! the children of one shape.
//!
//! - [`Pointer`]: For indirection (e.g. `Option<T>`, `Box<T>`, `Box<dyn Reflect>`).
//! - [`Map`]: For map-like (e.g. `HashMap<String, T>`).
//! - [`List`]: For list-like (e.g. `Vec<T>`).
//! - [`Array`]: For array (e.g. `[T; 5]`).
//! - [`Struct`]: For struct (e.g. `A { .. }`, `A(..)`, `(A, B)`).
//!
//! [`ReflectRef`] ties them together: it is what [`Reflect::reflect_ref`]
//! returns, and what path resolution dispatches on.
//!
//! [`Reflect`]: crate::Reflect
//! [`Reflect::reflect_ref`]: crate::Reflect::reflect_ref

// -----------------------------------------------------------------------------
// Modules

mod array_ops;
mod kind;
mod list_ops;
mod map_ops;
mod pointer_ops;
mod struct_ops;

// -----------------------------------------------------------------------------
// Exports

pub use kind::ReflectRef;

pub use array_ops::{Array, ArrayItemIter};
pub use list_ops::{List, ListItemIter};
pub use map_ops::Map;
pub use pointer_ops::Pointer;
pub use struct_ops::{Struct, StructFieldIter};
