use core::iter::FusedIterator;

use crate::Reflect;

/// A fixed-length ordered sequence, such as `[T; N]`.
///
/// # Examples
///
/// ```
/// use delve_reflect::{Reflect, ops::Array};
///
/// let array: &dyn Array = &["x", "y"];
///
/// assert_eq!(array.len(), 2);
/// assert_eq!(array.get(1).and_then(|v| v.downcast_ref::<&str>()), Some(&"y"));
/// ```
pub trait Array: Reflect {
    /// Returns a reference to the element at `index`, or `None` if out of bounds.
    fn get(&self, index: usize) -> Option<&dyn Reflect>;

    /// Returns the number of elements.
    fn len(&self) -> usize;

    /// Returns `true` if the array contains no elements.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl dyn Array {
    /// Returns an iterator over the elements.
    #[inline]
    pub fn iter(&self) -> ArrayItemIter<'_> {
        ArrayItemIter {
            array: self,
            index: 0,
        }
    }
}

/// An iterator over the elements of an [`Array`].
pub struct ArrayItemIter<'a> {
    array: &'a dyn Array,
    index: usize,
}

impl<'a> Iterator for ArrayItemIter<'a> {
    type Item = &'a dyn Reflect;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let value = self.array.get(self.index)?;
        self.index += 1;
        Some(value)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let hint = self.array.len().saturating_sub(self.index);
        (hint, Some(hint))
    }
}

impl FusedIterator for ArrayItemIter<'_> {}

impl ExactSizeIterator for ArrayItemIter<'_> {}
