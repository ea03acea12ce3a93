use alloc::borrow::Cow;

use thiserror::Error;

// -----------------------------------------------------------------------------
// ResolveError

/// The reason a single segment could not be resolved against a value.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ResolveError {
    #[error("Empty path segment")]
    EmptySegment,

    #[error("Nil pointer with segments remaining")]
    NilPointer,

    #[error("More than {0} levels of pointer indirection")]
    IndirectionLimit(usize),

    #[error("Map `{0}` is not keyed by strings")]
    NonStringKey(&'static str),

    #[error("No such key in map")]
    MissingKey,

    #[error("Segment is not a 32-bit integer index")]
    InvalidIndex,

    #[error("Index {index} out of bounds for length {len}")]
    IndexOutOfBounds { index: i32, len: usize },

    #[error("No such field on `{0}`")]
    UnknownField(&'static str),

    #[error("Value of type `{0}` has no children")]
    NoChildren(&'static str),
}

// -----------------------------------------------------------------------------
// PathError

/// An error returned from a failed path lookup.
///
/// A path that resolves to a nil pointer is not an error, see
/// [`Walker::get`](crate::access::Walker::get).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum PathError<'p> {
    /// A segment could not be resolved.
    ///
    /// `index` is the position of the segment in the path and `offset` the
    /// byte offset at which it starts.
    #[error("Invalid path at segment #{index} `{segment}` (offset {offset}): {cause}")]
    InvalidPath {
        segment: Cow<'p, str>,
        index: usize,
        offset: usize,
        cause: ResolveError,
    },

    /// The resolved value is not of the requested type.
    #[error("Can't downcast `{actual}` to `{expected}`")]
    InvalidDowncast {
        expected: &'static str,
        actual: &'static str,
    },
}

impl PathError<'_> {
    /// Converts this into an "owned" value.
    pub fn into_owned(self) -> PathError<'static> {
        match self {
            Self::InvalidPath {
                segment,
                index,
                offset,
                cause,
            } => PathError::InvalidPath {
                segment: Cow::Owned(segment.into_owned()),
                index,
                offset,
                cause,
            },
            Self::InvalidDowncast { expected, actual } => {
                PathError::InvalidDowncast { expected, actual }
            }
        }
    }

    /// Returns the [`ResolveError`] behind an [`InvalidPath`](Self::InvalidPath).
    #[inline]
    pub fn cause(&self) -> Option<ResolveError> {
        match self {
            Self::InvalidPath { cause, .. } => Some(*cause),
            _ => None,
        }
    }
}
