//! Read-only runtime reflection and path-based value lookup.
//!
//! Every reflected value reports its shape through [`Reflect::reflect_ref`]:
//! a pointer to another value, a string-keyed map, a list or array, a struct
//! with named fields, or an opaque leaf. [`access`] walks a dotted path over
//! those shapes.
//!
//! ```
//! use delve_reflect::{access, derive::Reflect};
//!
//! #[derive(Reflect)]
//! struct Inner { name: String }
//!
//! #[derive(Reflect)]
//! struct Outer { items: Vec<Inner>, next: Option<Box<Outer>> }
//!
//! let outer = Outer {
//!     items: vec![Inner { name: "first".into() }],
//!     next: None,
//! };
//!
//! let name = access::get_as::<String>(&outer, "items.0.name").unwrap();
//! assert_eq!(name.map(String::as_str), Some("first"));
//!
//! // A nil pointer at the end of the path is a value, not an error.
//! assert!(access::get(&outer, "next").unwrap().is_none());
//!
//! // In the middle of the path it is.
//! assert!(access::get(&outer, "next.items").is_err());
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

// -----------------------------------------------------------------------------
// Compilation config

/// Some macros used for compilation control.
pub mod cfg {
    delve_cfg::define_alias! {
        #[cfg(feature = "std")] => std,
        #[cfg(feature = "serde_json")] => serde_json,
    }
}

// -----------------------------------------------------------------------------
// Extern Self

// Derived impls name `::delve_reflect`, which must also resolve inside this
// crate's own tests and doctests.
extern crate self as delve_reflect;

// -----------------------------------------------------------------------------
// no_std support

crate::cfg::std! {
    extern crate std;
}

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod reflection;

pub mod access;
pub mod impls;
pub mod info;
pub mod ops;

// -----------------------------------------------------------------------------
// Top-Level exports

pub use delve_reflect_derive as derive;
pub use reflection::Reflect;
