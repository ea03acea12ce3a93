use core::iter::FusedIterator;

use crate::Reflect;

// -----------------------------------------------------------------------------
// Struct

/// A named-field aggregate.
///
/// Derived for structs by [`#[derive(Reflect)]`](crate::derive::Reflect).
/// Tuple structs and tuples name their fields `"0"`, `"1"`, ..., the same
/// names Rust uses for them.
///
/// # Examples
///
/// ```
/// use delve_reflect::{derive::Reflect, ops::Struct};
///
/// #[derive(Reflect)]
/// struct Foo { a: i32, b: bool }
///
/// let foo = Foo { a: 1, b: true };
///
/// assert_eq!(foo.field_len(), 2);
/// assert_eq!(foo.name_at(1), Some("b"));
/// assert!(foo.field("a").is_some());
/// assert!(foo.field("c").is_none());
/// ```
pub trait Struct: Reflect {
    /// Returns a reference to the value of the field named `name`.
    ///
    /// Returns `None` if there is no such field.
    fn field(&self, name: &str) -> Option<&dyn Reflect>;

    /// Returns a reference to the value of the field with index `index`.
    ///
    /// Returns `None` if `index` is out of bounds.
    fn field_at(&self, index: usize) -> Option<&dyn Reflect>;

    /// Returns the name of the field with index `index`.
    fn name_at(&self, index: usize) -> Option<&str>;

    /// Returns the number of reflected fields.
    fn field_len(&self) -> usize;
}

impl dyn Struct {
    /// Returns a typed reference to the field named `name`.
    ///
    /// Returns `None` if the field is missing or not of type `T`.
    ///
    /// # Examples
    ///
    /// ```
    /// use delve_reflect::{Reflect, derive::Reflect, ops::Struct};
    ///
    /// #[derive(Reflect)]
    /// struct Foo { a: i32 }
    ///
    /// let foo = Foo { a: 7 };
    /// let s = foo.reflect_ref().as_struct().unwrap();
    /// assert_eq!(s.field_as::<i32>("a"), Some(&7));
    /// assert_eq!(s.field_as::<u8>("a"), None);
    /// ```
    #[inline]
    pub fn field_as<T: Reflect>(&self, name: &str) -> Option<&T> {
        self.field(name).and_then(<dyn Reflect>::downcast_ref)
    }

    /// Returns an iterator over `(name, value)` pairs, in declaration order.
    #[inline]
    pub fn iter_fields(&self) -> StructFieldIter<'_> {
        StructFieldIter::new(self)
    }
}

// -----------------------------------------------------------------------------
// Iterator

/// An iterator over the fields of a [`Struct`], see [`<dyn Struct>::iter_fields`].
///
/// [`<dyn Struct>::iter_fields`]: Struct
pub struct StructFieldIter<'a> {
    inner: &'a dyn Struct,
    index: usize,
}

impl<'a> StructFieldIter<'a> {
    /// Creates a new [`StructFieldIter`].
    #[inline(always)]
    pub const fn new(value: &'a dyn Struct) -> Self {
        Self {
            inner: value,
            index: 0,
        }
    }
}

impl<'a> Iterator for StructFieldIter<'a> {
    type Item = (&'a str, &'a dyn Reflect);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let name = self.inner.name_at(self.index)?;
        let value = self.inner.field_at(self.index)?;
        self.index += 1;
        Some((name, value))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let hint = self.inner.field_len().saturating_sub(self.index);
        (hint, Some(hint))
    }
}

impl FusedIterator for StructFieldIter<'_> {}

impl ExactSizeIterator for StructFieldIter<'_> {}

// -----------------------------------------------------------------------------
// Tests
