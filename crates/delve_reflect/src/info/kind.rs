use core::fmt;

/// A pure enumeration of the shapes a reflected value can take.
///
/// This is the tag of [`ReflectRef`](crate::ops::ReflectRef) without the
/// borrowed data, suitable for comparison and error reporting.
///
/// # Examples
///
/// ```
/// use delve_reflect::{Reflect, info::ReflectKind};
///
/// assert_eq!(vec![1_i32, 2].reflect_kind(), ReflectKind::List);
/// assert_eq!([1_i32, 2].reflect_kind(), ReflectKind::Array);
/// assert_eq!(Some(1_i32).reflect_kind(), ReflectKind::Pointer);
/// assert_eq!(1_i32.reflect_kind(), ReflectKind::Opaque);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ReflectKind {
    /// Indirects to another value, or to nothing (nil).
    Pointer,
    /// Key-value association.
    Map,
    /// Variable-length sequence.
    List,
    /// Fixed-length sequence.
    Array,
    /// Aggregate with named fields.
    Struct,
    /// Leaf value without reflected children.
    Opaque,
}

impl ReflectKind {
    /// Returns the lowercase name of the kind.
    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pointer => "pointer",
            Self::Map => "map",
            Self::List => "list",
            Self::Array => "array",
            Self::Struct => "struct",
            Self::Opaque => "opaque",
        }
    }

    /// Returns `true` for the kinds that can be indexed by a path segment.
    #[inline]
    pub const fn has_children(self) -> bool {
        !matches!(self, Self::Opaque)
    }
}

impl fmt::Display for ReflectKind {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
