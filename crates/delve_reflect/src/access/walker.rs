//! Provide multi-segment path lookup.

use alloc::borrow::Cow;

use crate::Reflect;
use crate::access::{PathError, ResolveError, Resolver};

// -----------------------------------------------------------------------------
// Position

/// Where the walk currently is, for error reporting.
#[derive(Clone, Copy)]
struct Position<'p> {
    segment: &'p str,
    index: usize,
    offset: usize,
}

impl<'p> Position<'p> {
    const START: Self = Self {
        segment: "",
        index: 0,
        offset: 0,
    };

    #[inline]
    fn into_error(self, cause: ResolveError) -> PathError<'p> {
        PathError::InvalidPath {
            segment: Cow::Borrowed(self.segment),
            index: self.index,
            offset: self.offset,
            cause,
        }
    }
}

// -----------------------------------------------------------------------------
// Walker

/// Looks values up by path.
///
/// A path is split on the separator (`.` by default) without trimming, and
/// each segment is resolved in turn with a [`Resolver`]. The first segment
/// that fails ends the walk with [`PathError::InvalidPath`]. Empty segments,
/// from `a..b`, `.a` or `a.`, always fail.
///
/// Once every segment is consumed, the pointer layers on top of the result
/// are unwrapped. If one of them is nil the path resolves to `None`; a nil
/// pointer that still has segments after it is an error.
///
/// # Examples
///
/// ```
/// use delve_reflect::{access::{Walker, PathError}, derive::Reflect};
///
/// #[derive(Reflect)]
/// struct Node { value: i32, next: Option<Box<Node>> }
///
/// let list = Node { value: 1, next: Some(Box::new(Node { value: 2, next: None })) };
/// let walker = Walker::new();
///
/// assert_eq!(walker.get_as::<i32>(&list, "next.value"), Ok(Some(&2)));
/// assert!(walker.get(&list, "next.next").unwrap().is_none());
///
/// let err = walker.get(&list, "next.next.value").unwrap_err();
/// assert!(matches!(err, PathError::InvalidPath { index: 2, offset: 10, .. }));
///
/// let walker = Walker::new().with_separator('/');
/// assert_eq!(walker.get_as::<i32>(&list, "next/value"), Ok(Some(&2)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Walker {
    resolver: Resolver,
    separator: char,
}

impl Default for Walker {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl Walker {
    /// The default segment separator.
    pub const DEFAULT_SEPARATOR: char = '.';

    /// Creates a walker splitting on `.`, with the default indirection limit.
    #[inline]
    pub const fn new() -> Self {
        Self {
            resolver: Resolver::new(),
            separator: Self::DEFAULT_SEPARATOR,
        }
    }

    /// Sets the segment separator.
    #[inline]
    pub const fn with_separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }

    /// Sets the number of pointer layers that may be unwrapped in a row,
    /// see [`Resolver::with_max_indirection`].
    #[inline]
    pub const fn with_max_indirection(mut self, max_indirection: usize) -> Self {
        self.resolver = self.resolver.with_max_indirection(max_indirection);
        self
    }

    /// Returns the segment separator.
    #[inline]
    pub const fn separator(&self) -> char {
        self.separator
    }

    /// Returns the resolver applied to each segment.
    #[inline]
    pub const fn resolver(&self) -> &Resolver {
        &self.resolver
    }

    /// Returns the value at `path`, or `None` if it is a nil pointer.
    ///
    /// Every pointer layer on top of the value is unwrapped, so `Some(None)`
    /// is reported as `None` too. Use [`get_as`](Self::get_as) with the
    /// outer type, such as `Option<u8>`, to reach the inner slot itself.
    pub fn get<'a, 'p>(
        &self,
        object: &'a dyn Reflect,
        path: &'p str,
    ) -> Result<Option<&'a dyn Reflect>, PathError<'p>> {
        self.get_segments(object, path.split(self.separator))
    }

    /// Returns the value at `path` as a `T`, or `None` if it is a nil pointer.
    ///
    /// Pointer layers are unwrapped until one of them is a `T`, so the value
    /// can be requested at any level: `Option<Box<u8>>`, `Box<u8>` or `u8`.
    ///
    /// # Examples
    ///
    /// ```
    /// use delve_reflect::access::{Walker, PathError};
    ///
    /// let value = (Some(Box::new(1_u8)), None::<Box<u8>>);
    /// let walker = Walker::new();
    ///
    /// assert_eq!(walker.get_as::<u8>(&value, "0"), Ok(Some(&1)));
    /// assert!(walker.get_as::<Box<u8>>(&value, "0").unwrap().is_some());
    /// assert!(walker.get_as::<Option<Box<u8>>>(&value, "1").unwrap().is_some());
    /// assert_eq!(walker.get_as::<u8>(&value, "1"), Ok(None));
    ///
    /// let err = walker.get_as::<i32>(&value, "0").unwrap_err();
    /// assert!(matches!(err, PathError::InvalidDowncast { expected: "i32", actual: "u8" }));
    /// ```
    pub fn get_as<'a, 'p, T: Reflect>(
        &self,
        object: &'a dyn Reflect,
        path: &'p str,
    ) -> Result<Option<&'a T>, PathError<'p>> {
        self.get_segments_as(object, path.split(self.separator))
    }

    pub(crate) fn get_segments<'a, 'p>(
        &self,
        object: &'a dyn Reflect,
        segments: impl IntoIterator<Item = &'p str>,
    ) -> Result<Option<&'a dyn Reflect>, PathError<'p>> {
        let (value, position) = self.walk(object, segments)?;
        self.resolver
            .deref(value)
            .map_err(|cause| position.into_error(cause))
    }

    pub(crate) fn get_segments_as<'a, 'p, T: Reflect>(
        &self,
        object: &'a dyn Reflect,
        segments: impl IntoIterator<Item = &'p str>,
    ) -> Result<Option<&'a T>, PathError<'p>> {
        let (value, position) = self.walk(object, segments)?;
        let value = self
            .resolver
            .deref_until(value, <dyn Reflect>::is::<T>)
            .map_err(|cause| position.into_error(cause))?;

        let Some(value) = value else {
            return Ok(None);
        };
        match value.downcast_ref::<T>() {
            Some(value) => Ok(Some(value)),
            None => Err(PathError::InvalidDowncast {
                expected: core::any::type_name::<T>(),
                actual: value.reflect_type_path(),
            }),
        }
    }

    /// Resolves every segment, returning the last value and its position.
    fn walk<'a, 'p>(
        &self,
        object: &'a dyn Reflect,
        segments: impl IntoIterator<Item = &'p str>,
    ) -> Result<(&'a dyn Reflect, Position<'p>), PathError<'p>> {
        let step = self.separator.len_utf8();
        let mut current = object;
        let mut position = Position::START;

        for (index, segment) in segments.into_iter().enumerate() {
            if index > 0 {
                position.offset += position.segment.len() + step;
            }
            position.segment = segment;
            position.index = index;

            current = match self.resolver.resolve(current, segment) {
                Ok(child) => {
                    log::trace!("resolved segment #{index} `{segment}` to `{}`", child.reflect_type_path());
                    child
                }
                Err(cause) => {
                    log::debug!("failed to resolve segment #{index} `{segment}`: {cause}");
                    return Err(position.into_error(cause));
                }
            };
        }

        Ok((current, position))
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::borrow::Cow;
    use alloc::boxed::Box;
    use alloc::collections::BTreeMap;
    use alloc::string::String;
    use alloc::vec;
    use alloc::vec::Vec;

    use super::Walker;
    use crate::Reflect;
    use crate::access::{PathError, ResolveError};

    const W: Walker = Walker::new();

    fn cause(result: Result<Option<&dyn Reflect>, PathError<'_>>) -> Option<ResolveError> {
        result.err().and_then(|err| err.cause())
    }

    #[test]
    fn nested_lookup() {
        let mut inner = BTreeMap::new();
        inner.insert(String::from("c"), String::from("x"));
        let value = (vec![inner],);

        let found = W.get_as::<String>(&value, "0.0.c").unwrap();
        assert_eq!(found.map(String::as_str), Some("x"));
    }

    #[test]
    fn terminal_nil_is_none() {
        let value: (Option<Box<u8>>,) = (None,);
        assert!(W.get(&value, "0").unwrap().is_none());
        assert_eq!(W.get_as::<u8>(&value, "0"), Ok(None));

        let nested: (Option<Option<u8>>,) = (Some(None),);
        assert!(W.get(&nested, "0").unwrap().is_none());
        assert_eq!(W.get_as::<u8>(&nested, "0"), Ok(None));
        assert_eq!(W.get_as::<Option<u8>>(&nested, "0"), Ok(Some(&None)));
    }

    #[test]
    fn nil_mid_path_is_error() {
        let value: (Option<Box<(u8,)>>,) = (None,);
        let err = W.get(&value, "0.0").unwrap_err();
        assert_eq!(
            err,
            PathError::InvalidPath {
                segment: Cow::Borrowed("0"),
                index: 1,
                offset: 2,
                cause: ResolveError::NilPointer,
            }
        );
    }

    #[test]
    fn empty_segments() {
        let value = (vec![(1_u8,)],);
        for path in ["", ".", "0.", ".0", "0..0", "0.0.0."] {
            assert_eq!(cause(W.get(&value, path)), Some(ResolveError::EmptySegment), "{path}");
        }
    }

    #[test]
    fn error_position() {
        let value = (vec![1_u8, 2],);
        let err = W.get(&value, "0.5").unwrap_err();
        assert!(matches!(
            err,
            PathError::InvalidPath { index: 1, offset: 2, cause: ResolveError::IndexOutOfBounds { index: 5, len: 2 }, .. }
        ));

        let walker = Walker::new().with_separator('→');
        let err = walker.get(&value, "0→x").unwrap_err();
        assert!(matches!(err, PathError::InvalidPath { index: 1, offset: 4, .. }));
    }

    #[test]
    fn separator_is_not_trimmed() {
        let map: BTreeMap<String, u8> = [(String::from(" a "), 1)].into_iter().collect();
        assert_eq!(W.get_as::<u8>(&map, " a "), Ok(Some(&1)));
        assert_eq!(cause(W.get(&map, "a")), Some(ResolveError::MissingKey));

        let walker = Walker::new().with_separator('/');
        let map: BTreeMap<String, u8> = [(String::from("a.b"), 2)].into_iter().collect();
        assert_eq!(walker.get_as::<u8>(&map, "a.b"), Ok(Some(&2)));
    }

    #[test]
    fn terminal_indirection_limit() {
        let value = (Some(Some(Some(1_u8))),);
        let walker = Walker::new().with_max_indirection(2);
        assert_eq!(cause(walker.get(&value, "0")), Some(ResolveError::IndirectionLimit(2)));
        assert_eq!(Walker::new().with_max_indirection(3).get_as::<u8>(&value, "0"), Ok(Some(&1)));
    }

    #[test]
    fn downcast_failure() {
        let value = (1_u8,);
        let err = W.get_as::<String>(&value, "0").unwrap_err();
        assert_eq!(err.cause(), None);
        assert!(matches!(err, PathError::InvalidDowncast { actual: "u8", .. }));
    }

    #[test]
    fn boxed_dyn_values() {
        let items: Vec<Box<dyn Reflect>> = vec![Box::new(1_i32), Box::new(String::from("s")), Box::new(None::<u8>)];
        assert_eq!(W.get_as::<i32>(&items, "0"), Ok(Some(&1)));
        assert_eq!(W.get_as::<String>(&items, "1").unwrap().map(String::as_str), Some("s"));
        assert!(W.get(&items, "2").unwrap().is_none());
    }
}
