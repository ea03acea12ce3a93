use alloc::sync::Arc;

use crate::Reflect;
use crate::ops::{Pointer, ReflectRef};

impl<T: Reflect> Reflect for Arc<T> {
    #[inline]
    fn reflect_ref(&self) -> ReflectRef<'_> {
        ReflectRef::Pointer(self)
    }
}

impl<T: Reflect> Pointer for Arc<T> {
    #[inline]
    fn pointee(&self) -> Option<&dyn Reflect> {
        Some(&**self)
    }
}

impl Reflect for Arc<dyn Reflect> {
    #[inline]
    fn reflect_ref(&self) -> ReflectRef<'_> {
        ReflectRef::Pointer(self)
    }
}

impl Pointer for Arc<dyn Reflect> {
    #[inline]
    fn pointee(&self) -> Option<&dyn Reflect> {
        Some(&**self)
    }
}
