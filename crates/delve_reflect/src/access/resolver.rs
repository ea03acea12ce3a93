//! Provide single-segment resolution.

use crate::Reflect;
use crate::access::ResolveError;
use crate::ops::{Map, ReflectRef, Struct};

// -----------------------------------------------------------------------------
// Resolver

/// Resolves one path segment against one value.
///
/// The shape of the value, as reported by [`Reflect::reflect_ref`], decides
/// what the segment means:
///
/// | shape     | segment                                   |
/// |-----------|-------------------------------------------|
/// | `Pointer` | looked through, the pointee is resolved   |
/// | `Map`     | a key, for maps keyed by strings only     |
/// | `List`    | a base-10 `i32` index                     |
/// | `Array`   | a base-10 `i32` index                     |
/// | `Struct`  | a field name                              |
/// | `Opaque`  | nothing, always an error                  |
///
/// Pointers are unwrapped in a loop bounded by `max_indirection`, so a
/// pointer chain never consumes a segment and never recurses.
///
/// # Examples
///
/// ```
/// use delve_reflect::access::{Resolver, ResolveError};
///
/// let resolver = Resolver::new();
/// let value = Some(Box::new(vec!["x", "y"]));
///
/// let y = resolver.resolve(&value, "1").unwrap();
/// assert_eq!(y.downcast_ref::<&str>(), Some(&"y"));
///
/// assert_eq!(resolver.resolve(&value, "-1").err(), Some(ResolveError::IndexOutOfBounds { index: -1, len: 2 }));
/// assert_eq!(resolver.resolve(&value, "one").err(), Some(ResolveError::InvalidIndex));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Resolver {
    max_indirection: usize,
}

impl Default for Resolver {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl Resolver {
    /// The default limit of pointer layers unwrapped in a row.
    pub const DEFAULT_MAX_INDIRECTION: usize = 64;

    /// Creates a resolver with the default indirection limit.
    #[inline]
    pub const fn new() -> Self {
        Self {
            max_indirection: Self::DEFAULT_MAX_INDIRECTION,
        }
    }

    /// Sets the number of pointer layers that may be unwrapped in a row.
    ///
    /// With `0`, any pointer fails with [`ResolveError::IndirectionLimit`].
    #[inline]
    pub const fn with_max_indirection(mut self, max_indirection: usize) -> Self {
        self.max_indirection = max_indirection;
        self
    }

    /// Returns the indirection limit.
    #[inline]
    pub const fn max_indirection(&self) -> usize {
        self.max_indirection
    }

    /// Resolves `segment` against `value`.
    ///
    /// An empty segment never resolves. A nil pointer, met while looking
    /// through pointers, fails with [`ResolveError::NilPointer`].
    pub fn resolve<'a>(
        &self,
        value: &'a dyn Reflect,
        segment: &str,
    ) -> Result<&'a dyn Reflect, ResolveError> {
        if segment.is_empty() {
            return Err(ResolveError::EmptySegment);
        }

        let mut current = value;
        let mut depth = 0;
        loop {
            match current.reflect_ref() {
                ReflectRef::Pointer(pointer) => {
                    self.descend(&mut depth)?;
                    current = pointer.pointee().ok_or(ResolveError::NilPointer)?;
                }
                ReflectRef::Map(map) => return lookup_key(map, segment),
                ReflectRef::List(list) => {
                    let index = parse_index(segment, list.len())?;
                    return list.get(index).ok_or(ResolveError::InvalidIndex);
                }
                ReflectRef::Array(array) => {
                    let index = parse_index(segment, array.len())?;
                    return array.get(index).ok_or(ResolveError::InvalidIndex);
                }
                ReflectRef::Struct(s) => return lookup_field(s, segment),
                ReflectRef::Opaque(opaque) => {
                    return Err(ResolveError::NoChildren(opaque.reflect_type_path()));
                }
            }
        }
    }

    /// Unwraps every pointer layer on top of `value`.
    ///
    /// Returns `Ok(None)` if one of the layers is nil and the first
    /// non-pointer value otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use delve_reflect::{Reflect, access::Resolver};
    ///
    /// let resolver = Resolver::new();
    ///
    /// let value = Some(Some(Box::new(1_u8)));
    /// assert!(resolver.deref(&value).unwrap().is_some_and(|v| v.is::<u8>()));
    ///
    /// let value: Option<Option<u8>> = Some(None);
    /// assert!(resolver.deref(&value).unwrap().is_none());
    /// ```
    #[inline]
    pub fn deref<'a>(&self, value: &'a dyn Reflect) -> Result<Option<&'a dyn Reflect>, ResolveError> {
        self.deref_until(value, |_| false)
    }

    /// Unwraps pointer layers on top of `value` until `stop` accepts one,
    /// or until the first non-pointer value.
    ///
    /// Returns `Ok(None)` if a nil layer is reached first.
    pub fn deref_until<'a>(
        &self,
        value: &'a dyn Reflect,
        mut stop: impl FnMut(&dyn Reflect) -> bool,
    ) -> Result<Option<&'a dyn Reflect>, ResolveError> {
        let mut current = value;
        let mut depth = 0;
        while !stop(current) {
            let ReflectRef::Pointer(pointer) = current.reflect_ref() else {
                break;
            };
            self.descend(&mut depth)?;
            match pointer.pointee() {
                Some(pointee) => current = pointee,
                None => return Ok(None),
            }
        }
        Ok(Some(current))
    }

    #[inline]
    fn descend(&self, depth: &mut usize) -> Result<(), ResolveError> {
        if *depth >= self.max_indirection {
            log::warn!(
                "pointer chain exceeds {} levels of indirection",
                self.max_indirection
            );
            return Err(ResolveError::IndirectionLimit(self.max_indirection));
        }
        *depth += 1;
        Ok(())
    }
}

// -----------------------------------------------------------------------------
// Per-shape lookup

fn lookup_key<'a>(map: &'a dyn Map, key: &str) -> Result<&'a dyn Reflect, ResolveError> {
    if !map.has_str_keys() {
        return Err(ResolveError::NonStringKey(map.reflect_type_path()));
    }
    map.get_str(key).ok_or(ResolveError::MissingKey)
}

fn lookup_field<'a>(s: &'a dyn Struct, name: &str) -> Result<&'a dyn Reflect, ResolveError> {
    s.field(name)
        .ok_or_else(|| ResolveError::UnknownField(s.reflect_type_path()))
}

/// Parses a sequence index, accepting what a signed 32-bit parse accepts.
fn parse_index(segment: &str, len: usize) -> Result<usize, ResolveError> {
    let index: i32 = segment.parse().map_err(|_| ResolveError::InvalidIndex)?;
    usize::try_from(index)
        .ok()
        .filter(|&i| i < len)
        .ok_or(ResolveError::IndexOutOfBounds { index, len })
}

// -----------------------------------------------------------------------------
// Tests
