use alloc::boxed::Box;
use core::any::{Any, TypeId};
use core::fmt;

use crate::info::ReflectKind;
use crate::ops::ReflectRef;

// -----------------------------------------------------------------------------
// Reflect

/// The foundational trait for read-only runtime reflection in [`delve_reflect`].
///
/// A `Reflect` value can tell, at runtime, which shape it has and hand out its
/// children without the caller knowing its concrete type. This is the only
/// contract [`access`] relies on.
///
/// # Shapes
///
/// [`reflect_ref`] returns one of the [`ReflectRef`] variants:
///
/// - [`Pointer`]: indirects to another value or to nothing (`Option`, `Box`,
///   `Arc`, `&'static T`, `Box<dyn Reflect>`).
/// - [`Map`]: key-value association (`BTreeMap`, `HashMap`).
/// - [`List`]: variable-length sequence (`Vec`, `VecDeque`).
/// - [`Array`]: fixed-length sequence (`[T; N]`).
/// - [`Struct`]: aggregate with named fields (derived structs, tuples).
/// - `Opaque`: anything else (numbers, strings, unit structs, enums).
///
/// # Implementing
///
/// Use [the derive macro](crate::derive::Reflect) for your own structs, or
/// [`impl_reflect_opaque!`](crate::impl_reflect_opaque) for leaf types.
/// A manual implementation only needs [`reflect_ref`]:
///
/// ```
/// use delve_reflect::{Reflect, ops::{ReflectRef, Struct}};
///
/// struct Point { x: i32, y: i32 }
///
/// impl Reflect for Point {
///     fn reflect_ref(&self) -> ReflectRef<'_> {
///         ReflectRef::Struct(self)
///     }
/// }
///
/// impl Struct for Point {
///     fn field(&self, name: &str) -> Option<&dyn Reflect> {
///         match name {
///             "x" => Some(&self.x),
///             "y" => Some(&self.y),
///             _ => None,
///         }
///     }
///
///     fn field_at(&self, index: usize) -> Option<&dyn Reflect> {
///         self.name_at(index).and_then(|name| self.field(name))
///     }
///
///     fn name_at(&self, index: usize) -> Option<&str> {
///         ["x", "y"].get(index).copied()
///     }
///
///     fn field_len(&self) -> usize {
///         2
///     }
/// }
///
/// let p = Point { x: 1, y: 2 };
/// let y = delve_reflect::access::get_as::<i32>(&p, "y").unwrap();
/// assert_eq!(y, Some(&2));
/// ```
///
/// [`delve_reflect`]: crate
/// [`access`]: crate::access
/// [`reflect_ref`]: Reflect::reflect_ref
/// [`Pointer`]: crate::ops::Pointer
/// [`Map`]: crate::ops::Map
/// [`List`]: crate::ops::List
/// [`Array`]: crate::ops::Array
/// [`Struct`]: crate::ops::Struct
pub trait Reflect: Send + Sync + Any {
    /// Casts this type to a fully-reflected value.
    ///
    /// # Example
    ///
    /// ```
    /// use delve_reflect::Reflect;
    ///
    /// let x = 32_i32;
    /// let r: &dyn Reflect = x.as_reflect();
    /// // Equal to this:
    /// // let r: &dyn Reflect = &x;
    /// ```
    #[inline(always)]
    fn as_reflect(&self) -> &dyn Reflect
    where
        Self: Sized,
    {
        self
    }

    /// Casts this type to a boxed, fully-reflected value.
    ///
    /// The box is itself a [`Pointer`](crate::ops::Pointer), the equivalent
    /// of a dynamically typed slot.
    #[inline(always)]
    fn into_boxed_reflect(self) -> Box<dyn Reflect>
    where
        Self: Sized,
    {
        Box::new(self)
    }

    /// Return the [`TypeId`] of underlying type.
    ///
    /// `Box<dyn Reflect>::type_id` is the id of the box, not of its content.
    /// Prefer this method.
    ///
    /// # Example
    ///
    /// ```
    /// use delve_reflect::Reflect;
    /// use core::any::{Any, TypeId};
    ///
    /// let x: Box<dyn Reflect> = 32_i32.into_boxed_reflect();
    ///
    /// assert!(x.type_id() != TypeId::of::<i32>());
    /// assert!((*x).ty_id() == TypeId::of::<i32>());
    /// ```
    #[inline]
    fn ty_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    /// Returns the full type path of the underlying type, for diagnostics.
    #[inline]
    fn reflect_type_path(&self) -> &'static str {
        core::any::type_name::<Self>()
    }

    /// Returns a pure enumeration of ["kinds"](ReflectKind) of type.
    ///
    /// # Examples
    ///
    /// ```
    /// # use delve_reflect::{Reflect, info::ReflectKind};
    /// let vec = vec![1_i32, 2, 3];
    ///
    /// assert_eq!(vec.reflect_kind(), ReflectKind::List);
    /// ```
    #[inline]
    fn reflect_kind(&self) -> ReflectKind {
        self.reflect_ref().kind()
    }

    /// Returns an immutable enumeration of ["kinds"](ReflectRef) of type.
    ///
    /// This is the dispatch point of path resolution.
    ///
    /// # Examples
    ///
    /// ```
    /// # use delve_reflect::{Reflect, ops::List};
    /// let vec = vec![1_i32, 2, 3];
    ///
    /// let list: &dyn List = vec.reflect_ref().as_list().unwrap();
    /// assert_eq!(list.len(), 3);
    /// ```
    fn reflect_ref(&self) -> ReflectRef<'_>;

    /// Debug formatter for the value.
    ///
    /// The default renders composite shapes through reflection and opaque
    /// values as their type path. Leaf types usually forward to `Debug`.
    fn reflect_debug(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        crate::impls::reflect_ref_debug(self.reflect_ref(), self.reflect_type_path(), f)
    }
}

// -----------------------------------------------------------------------------
// dyn Reflect

impl dyn Reflect {
    /// Returns `true` if the underlying value is of type `T`.
    ///
    /// Pointers are not looked through: a `Box<i32>` is not an `i32`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use delve_reflect::Reflect;
    /// let x: &dyn Reflect = &1_u8;
    /// assert!(x.is::<u8>());
    /// assert!(!x.is::<i32>());
    /// ```
    #[inline]
    pub fn is<T: Reflect>(&self) -> bool {
        self.ty_id() == TypeId::of::<T>()
    }

    /// Downcasts the value to type `T` by reference.
    ///
    /// Returns `None` if the underlying value is not of type `T`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use delve_reflect::Reflect;
    /// let x: &dyn Reflect = &String::from("foo");
    /// assert_eq!(x.downcast_ref::<String>().map(String::as_str), Some("foo"));
    /// assert!(x.downcast_ref::<&str>().is_none());
    /// ```
    #[inline]
    pub fn downcast_ref<T: Reflect>(&self) -> Option<&T> {
        let any: &dyn Any = self;
        any.downcast_ref::<T>()
    }
}

impl fmt::Debug for dyn Reflect {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.reflect_debug(f)
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::format;
    use alloc::string::String;
    use alloc::vec;
    use core::any::TypeId;

    use crate::Reflect;
    use crate::info::ReflectKind;

    #[test]
    fn boxed_reports_pointer() {
        let boxed: Box<dyn Reflect> = 5_u32.into_boxed_reflect();
        assert_eq!(boxed.reflect_kind(), ReflectKind::Pointer);
        assert_eq!((*boxed).reflect_kind(), ReflectKind::Opaque);
        assert_eq!((*boxed).ty_id(), TypeId::of::<u32>());
    }

    #[test]
    fn downcast() {
        let value: &dyn Reflect = &String::from("x");
        assert!(value.is::<String>());
        assert_eq!(value.downcast_ref::<String>().map(String::as_str), Some("x"));
        assert!(value.downcast_ref::<u8>().is_none());
    }

    #[test]
    fn debug_output() {
        let value: &dyn Reflect = &vec![Some(1_i32), None];
        assert_eq!(format!("{value:?}"), "[1, None]");
    }
}
