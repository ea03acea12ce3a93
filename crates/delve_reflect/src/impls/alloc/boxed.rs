use alloc::boxed::Box;

use crate::Reflect;
use crate::ops::{Pointer, ReflectRef};

impl<T: Reflect> Reflect for Box<T> {
    #[inline]
    fn reflect_ref(&self) -> ReflectRef<'_> {
        ReflectRef::Pointer(self)
    }
}

impl<T: Reflect> Pointer for Box<T> {
    #[inline]
    fn pointee(&self) -> Option<&dyn Reflect> {
        Some(&**self)
    }
}

impl Reflect for Box<dyn Reflect> {
    #[inline]
    fn reflect_ref(&self) -> ReflectRef<'_> {
        ReflectRef::Pointer(self)
    }
}

impl Pointer for Box<dyn Reflect> {
    #[inline]
    fn pointee(&self) -> Option<&dyn Reflect> {
        Some(&**self)
    }
}
