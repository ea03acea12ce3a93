use crate::Reflect;
use crate::info::ReflectKind;
use crate::ops::{Array, List, Map, Pointer, Struct};

/// An immutable enumeration of the shapes of a reflected value.
///
/// Each variant borrows the value through the capability trait of its shape.
///
/// # Examples
///
/// ```
/// use delve_reflect::{Reflect, ops::ReflectRef};
///
/// let value = vec![10_u8, 20];
/// match value.reflect_ref() {
///     ReflectRef::List(list) => assert_eq!(list.len(), 2),
///     _ => unreachable!(),
/// }
/// ```
#[derive(Clone, Copy)]
pub enum ReflectRef<'a> {
    Pointer(&'a dyn Pointer),
    Map(&'a dyn Map),
    List(&'a dyn List),
    Array(&'a dyn Array),
    Struct(&'a dyn Struct),
    Opaque(&'a dyn Reflect),
}

macro_rules! impl_as {
    ($name:ident, $variant:ident, $trait:ident) => {
        #[doc = concat!("Returns the [`", stringify!($trait), "`] if the value has that shape.")]
        #[inline]
        pub fn $name(self) -> Option<&'a dyn $trait> {
            match self {
                Self::$variant(value) => Some(value),
                _ => None,
            }
        }
    };
}

impl<'a> ReflectRef<'a> {
    /// Returns the [`ReflectKind`] of this value.
    #[inline]
    pub fn kind(&self) -> ReflectKind {
        match self {
            Self::Pointer(_) => ReflectKind::Pointer,
            Self::Map(_) => ReflectKind::Map,
            Self::List(_) => ReflectKind::List,
            Self::Array(_) => ReflectKind::Array,
            Self::Struct(_) => ReflectKind::Struct,
            Self::Opaque(_) => ReflectKind::Opaque,
        }
    }

    impl_as!(as_pointer, Pointer, Pointer);
    impl_as!(as_map, Map, Map);
    impl_as!(as_list, List, List);
    impl_as!(as_array, Array, Array);
    impl_as!(as_struct, Struct, Struct);
    impl_as!(as_opaque, Opaque, Reflect);
}
