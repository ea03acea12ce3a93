use core::iter::FusedIterator;

use crate::Reflect;

// -----------------------------------------------------------------------------
// List

/// A variable-length ordered sequence, such as `Vec<T>` or `VecDeque<T>`.
///
/// # Examples
///
/// ```
/// use delve_reflect::{Reflect, ops::List};
///
/// let list: &dyn List = &vec![1_u8, 2, 3];
///
/// assert_eq!(list.len(), 3);
/// assert_eq!(list.get(2).and_then(|v| v.downcast_ref::<u8>()), Some(&3));
/// assert!(list.get(3).is_none());
/// ```
pub trait List: Reflect {
    /// Returns a reference to the element at `index`, or `None` if out of bounds.
    fn get(&self, index: usize) -> Option<&dyn Reflect>;

    /// Returns the number of elements.
    fn len(&self) -> usize;

    /// Returns `true` if the list contains no elements.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl dyn List {
    /// Returns an iterator over the elements.
    #[inline]
    pub fn iter(&self) -> ListItemIter<'_> {
        ListItemIter::new(self)
    }
}

// -----------------------------------------------------------------------------
// Iterator

/// An iterator over the elements of a [`List`].
pub struct ListItemIter<'a> {
    list: &'a dyn List,
    index: usize,
}

impl<'a> ListItemIter<'a> {
    /// Creates a new [`ListItemIter`].
    #[inline(always)]
    pub const fn new(list: &'a dyn List) -> Self {
        Self { list, index: 0 }
    }
}

impl<'a> Iterator for ListItemIter<'a> {
    type Item = &'a dyn Reflect;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let value = self.list.get(self.index)?;
        self.index += 1;
        Some(value)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let hint = self.list.len().saturating_sub(self.index);
        (hint, Some(hint))
    }
}

impl FusedIterator for ListItemIter<'_> {}

impl ExactSizeIterator for ListItemIter<'_> {}
