//! Provide reusable paths and the path lookup trait.

use alloc::boxed::Box;
use core::fmt;

use fastvec::FastVec;

use crate::Reflect;
use crate::access::{PathError, Walker};

// -----------------------------------------------------------------------------
// Reusable path

/// A path split once and reusable for many lookups.
///
/// Each segment is copied into its own allocation, so the accessor does not
/// borrow the string it was parsed from.
///
/// # Examples
///
/// ```
/// use delve_reflect::{derive::Reflect, access::PathAccessor};
///
/// #[derive(Reflect)]
/// struct Foo { id: u32, data: (Vec<u8>, bool) }
///
/// let mut foo = Foo { id: 1, data: (vec![1, 2, 3, 4], true) };
///
/// let accessor = PathAccessor::parse("data.0.3");
/// assert_eq!(accessor.get_as::<u8>(&foo), Ok(Some(&4)));
///
/// foo.data.0 = vec![10, 11, 12, 13];
/// assert_eq!(accessor.get_as::<u8>(&foo), Ok(Some(&13)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PathAccessor {
    segments: Box<[Box<str>]>,
    separator: char,
}

impl PathAccessor {
    /// Splits `path` on `.`.
    ///
    /// Nothing is validated here: empty segments are kept and fail when
    /// the accessor is used.
    ///
    /// # Examples
    ///
    /// ```
    /// # use delve_reflect::access::PathAccessor;
    /// let accessor = PathAccessor::parse("a.b.0");
    /// assert_eq!(accessor.len(), 3);
    ///
    /// let accessor = PathAccessor::parse("");
    /// assert_eq!(accessor.len(), 1);
    /// ```
    #[inline]
    pub fn parse(path: &str) -> Self {
        Self::parse_with(path, Walker::DEFAULT_SEPARATOR)
    }

    /// Splits `path` on `separator`.
    pub fn parse_with(path: &str, separator: char) -> Self {
        let mut vec: FastVec<Box<str>, 8> = FastVec::new();
        let data = vec.get();

        for segment in path.split(separator) {
            data.push(Box::from(segment));
        }

        Self {
            segments: vec.into_boxed_slice(),
            separator,
        }
    }

    /// Returns the number of segments.
    #[inline]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns the separator the path was split on.
    #[inline]
    pub fn separator(&self) -> char {
        self.separator
    }

    /// Returns an iterator over the segments.
    #[inline]
    pub fn segments(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.segments.iter().map(|segment| &**segment)
    }

    /// Returns the value at this path in `object`, or `None` if it is a nil
    /// pointer. See [`Walker::get`].
    #[inline]
    pub fn get<'a>(&self, object: &'a dyn Reflect) -> Result<Option<&'a dyn Reflect>, PathError<'_>> {
        self.walker().get_segments(object, self.segments())
    }

    /// Returns the value at this path in `object` as a `T`, or `None` if it
    /// is a nil pointer. See [`Walker::get_as`].
    #[inline]
    pub fn get_as<'a, T: Reflect>(
        &self,
        object: &'a dyn Reflect,
    ) -> Result<Option<&'a T>, PathError<'_>> {
        self.walker().get_segments_as(object, self.segments())
    }

    /// Appends the segments of `other` to this path.
    ///
    /// The separator of `self` is kept.
    ///
    /// # Examples
    ///
    /// ```
    /// # use delve_reflect::access::PathAccessor;
    /// let a = PathAccessor::parse("items.0");
    /// let b = PathAccessor::parse_with("name/first", '/');
    /// let path = a.concat(b);
    ///
    /// assert_eq!(path.len(), 4);
    /// assert_eq!(path.to_string(), "items.0.name.first");
    /// ```
    pub fn concat(self, other: PathAccessor) -> Self {
        let mut vec: FastVec<Box<str>, 12> = FastVec::new();
        let data = vec.get();
        data.extend(self.segments);
        data.extend(other.segments);
        Self {
            segments: vec.into_boxed_slice(),
            separator: self.separator,
        }
    }

    #[inline]
    fn walker(&self) -> Walker {
        Walker::new().with_separator(self.separator)
    }
}

impl fmt::Display for PathAccessor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, segment) in self.segments().enumerate() {
            if index > 0 {
                fmt::Write::write_char(f, self.separator)?;
            }
            f.write_str(segment)?;
        }
        Ok(())
    }
}

// -----------------------------------------------------------------------------
// Trait for one-off lookups

/// Provide path lookup on reflected values.
///
/// The path is split during the lookup and never copied. To look the same
/// path up many times, consider [`PathAccessor`].
///
/// # Examples
///
/// ```
/// use delve_reflect::{derive::Reflect, access::ReflectPathGet};
///
/// #[derive(Reflect)]
/// struct Foo { id: u32, tags: Vec<String> }
///
/// let foo = Foo { id: 1, tags: vec!["a".into()] };
///
/// assert_eq!(foo.get_path_as::<u32>("id"), Ok(Some(&1)));
/// assert_eq!(foo.get_path_as::<String>("tags.0").unwrap().map(String::as_str), Some("a"));
/// assert!(foo.get_path("tags.1").is_err());
/// ```
pub trait ReflectPathGet {
    /// Returns the value at `path`, see [`Walker::get`].
    fn get_path<'a, 'p>(
        &'a self,
        path: &'p str,
    ) -> Result<Option<&'a dyn Reflect>, PathError<'p>>;

    /// Returns the value at `path` as a `T`, see [`Walker::get_as`].
    fn get_path_as<'a, 'p, T: Reflect>(
        &'a self,
        path: &'p str,
    ) -> Result<Option<&'a T>, PathError<'p>>;
}

impl ReflectPathGet for dyn Reflect {
    #[inline(never)]
    fn get_path<'a, 'p>(
        &'a self,
        path: &'p str,
    ) -> Result<Option<&'a dyn Reflect>, PathError<'p>> {
        Walker::new().get(self, path)
    }

    #[inline]
    fn get_path_as<'a, 'p, T: Reflect>(
        &'a self,
        path: &'p str,
    ) -> Result<Option<&'a T>, PathError<'p>> {
        Walker::new().get_as::<T>(self, path)
    }
}

impl<R: Reflect> ReflectPathGet for R {
    #[inline(always)]
    fn get_path<'a, 'p>(
        &'a self,
        path: &'p str,
    ) -> Result<Option<&'a dyn Reflect>, PathError<'p>> {
        // Compiled once for `dyn Reflect`, not per `R`.
        <dyn Reflect as ReflectPathGet>::get_path(self, path)
    }

    #[inline(always)]
    fn get_path_as<'a, 'p, T: Reflect>(
        &'a self,
        path: &'p str,
    ) -> Result<Option<&'a T>, PathError<'p>> {
        <dyn Reflect as ReflectPathGet>::get_path_as::<T>(self, path)
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::string::{String, ToString};
    use alloc::vec;
    use alloc::vec::Vec;

    use super::{PathAccessor, ReflectPathGet};
    use crate::Reflect;
    use crate::access::{PathError, ResolveError};

    #[test]
    fn reuse_across_values() {
        let accessor = PathAccessor::parse("1.0");
        let a = (0_u8, vec![String::from("a")]);
        let b = (0_u8, vec![String::from("b"), String::from("c")]);

        assert_eq!(accessor.get_as::<String>(&a).unwrap().map(String::as_str), Some("a"));
        assert_eq!(accessor.get_as::<String>(&b).unwrap().map(String::as_str), Some("b"));
        assert!(accessor.get(&(0_u8, Vec::<String>::new())).is_err());
    }

    #[test]
    fn segments_and_display() {
        let accessor = PathAccessor::parse_with("a::b", ':');
        let segments: Vec<&str> = accessor.segments().collect();
        assert_eq!(segments, ["a", "", "b"]);
        assert_eq!(accessor.separator(), ':');
        assert_eq!(accessor.to_string(), "a::b");
    }

    #[test]
    fn errors_borrow_the_accessor() {
        let accessor = PathAccessor::parse_with("0/x", '/');
        let err = accessor.get(&(vec![1_u8],)).unwrap_err().into_owned();
        assert!(matches!(
            err,
            PathError::InvalidPath { index: 1, offset: 2, cause: ResolveError::InvalidIndex, .. }
        ));
    }

    #[test]
    fn trait_on_sized_and_dyn() {
        let value = (Some(Box::new(7_i64)),);
        assert_eq!(value.get_path_as::<i64>("0"), Ok(Some(&7)));

        let erased: &dyn Reflect = &value;
        assert_eq!(erased.get_path_as::<i64>("0"), Ok(Some(&7)));
        assert!(erased.get_path("0.0").is_err());

        let boxed: Box<dyn Reflect> = Box::new(value);
        assert_eq!(boxed.get_path_as::<i64>("0"), Ok(Some(&7)));
    }
}
