use crate::Reflect;

/// A value that indirects to another value, or to nothing.
///
/// This covers both owning pointers (`Box<T>`, `Arc<T>`), borrowed ones
/// (`&'static T`), nullable slots (`Option<T>`) and dynamically typed slots
/// (`Box<dyn Reflect>`).
///
/// Path resolution looks through pointers without consuming a segment. A
/// pointer whose [`pointee`] is `None` is *nil*.
///
/// # Examples
///
/// ```
/// use delve_reflect::{Reflect, ops::Pointer};
///
/// let some: Option<Box<i32>> = Some(Box::new(3));
/// let none: Option<Box<i32>> = None;
///
/// assert!(!some.is_nil());
/// assert!(none.is_nil());
///
/// let inner = some.pointee().unwrap();
/// assert!(inner.is::<Box<i32>>());
/// ```
///
/// [`pointee`]: Pointer::pointee
pub trait Pointer: Reflect {
    /// Returns the value one level of indirection below, or `None` if the
    /// pointer is nil.
    fn pointee(&self) -> Option<&dyn Reflect>;

    /// Returns `true` if the pointer is nil.
    #[inline]
    fn is_nil(&self) -> bool {
        self.pointee().is_none()
    }
}
