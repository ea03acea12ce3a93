//! Provide path-based lookup of values inside reflected data.
//!
//! A path is a string of segments joined by a separator, `.` by default.
//! Each segment is resolved against the current value according to its
//! [shape](crate::ops::ReflectRef):
//!
//! - struct: the segment is a field name (`"0"`, `"1"`... for tuples);
//! - map: the segment is a key, if the map is keyed by strings;
//! - list or array: the segment is an index, parsed as a base-10 `i32`;
//! - pointer: looked through, the segment applies to the pointee.
//!
//! Anything else cannot be descended into. Resolution never panics and never
//! returns a partial result: a path either fully resolves or fails with a
//! [`PathError`] naming the segment that did not.
//!
//! A nil pointer (`None`, `serde_json::Value::Null`) is an ordinary value at
//! the end of a path, reported as `Ok(None)`. Anywhere else it is an error.
//!
//! There are three entry points:
//!
//! - [`get`] and [`get_as`], or the [`ReflectPathGet`] trait, for one-off
//!   lookups with the default settings.
//! - [`Walker`], to change the separator or the indirection limit.
//! - [`PathAccessor`], a path split once and reused.
//!
//! # Examples
//!
//! ```
//! use delve_reflect::{access, derive::Reflect};
//! use std::collections::HashMap;
//!
//! #[derive(Reflect)]
//! struct Config { servers: HashMap<String, Server>, fallback: Option<Box<Server>> }
//!
//! #[derive(Reflect)]
//! struct Server { ports: Vec<u16> }
//!
//! let mut servers = HashMap::new();
//! servers.insert("main".to_string(), Server { ports: vec![80, 443] });
//! let config = Config { servers, fallback: None };
//!
//! assert_eq!(access::get_as::<u16>(&config, "servers.main.ports.1"), Ok(Some(&443)));
//! assert_eq!(access::get_as::<Server>(&config, "fallback").map(|v| v.is_none()), Ok(true));
//! assert!(access::get(&config, "fallback.ports").is_err());
//! assert!(access::get(&config, "servers.backup").is_err());
//! ```

// -----------------------------------------------------------------------------
// Modules

mod error;
mod path_access;
mod resolver;
mod walker;

// -----------------------------------------------------------------------------
// Exports

pub use error::{PathError, ResolveError};
pub use path_access::{PathAccessor, ReflectPathGet};
pub use resolver::Resolver;
pub use walker::Walker;

use crate::Reflect;

// -----------------------------------------------------------------------------
// Free functions

/// Returns the value at `path` in `object`, or `None` if it is a nil pointer.
///
/// Shorthand for [`Walker::new().get(object, path)`](Walker::get).
///
/// # Examples
///
/// ```
/// use delve_reflect::access;
///
/// let value = (vec![Some(1_u8), None],);
///
/// assert!(access::get(&value, "0.0").unwrap().is_some_and(|v| v.is::<u8>()));
/// assert!(access::get(&value, "0.1").unwrap().is_none());
/// assert!(access::get(&value, "0.2").is_err());
/// ```
#[inline]
pub fn get<'a, 'p>(
    object: &'a dyn Reflect,
    path: &'p str,
) -> Result<Option<&'a dyn Reflect>, PathError<'p>> {
    Walker::new().get(object, path)
}

/// Returns the value at `path` in `object` as a `T`, or `None` if it is a
/// nil pointer.
///
/// Shorthand for [`Walker::new().get_as(object, path)`](Walker::get_as).
#[inline]
pub fn get_as<'a, 'p, T: Reflect>(
    object: &'a dyn Reflect,
    path: &'p str,
) -> Result<Option<&'a T>, PathError<'p>> {
    Walker::new().get_as::<T>(object, path)
}

/// Resolves a single segment against `value`.
///
/// Shorthand for [`Resolver::new().resolve(value, segment)`](Resolver::resolve).
#[inline]
pub fn resolve<'a>(value: &'a dyn Reflect, segment: &str) -> Result<&'a dyn Reflect, ResolveError> {
    Resolver::new().resolve(value, segment)
}

/// Returns `true` if `value` would be reported as `None` at the end of a
/// path, that is if unwrapping its pointer layers reaches a nil one.
///
/// # Examples
///
/// ```
/// use delve_reflect::access::is_nil;
///
/// assert!(is_nil(&None::<u8>));
/// assert!(is_nil(&Some(None::<u8>)));
/// assert!(!is_nil(&Some(0_u8)));
/// assert!(!is_nil(&0_u8));
/// ```
#[inline]
pub fn is_nil(value: &dyn Reflect) -> bool {
    matches!(Resolver::new().deref(value), Ok(None))
}

// -----------------------------------------------------------------------------
// Tests
