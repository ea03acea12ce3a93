use crate::Reflect;
use crate::ops::{Pointer, ReflectRef};

impl<T: Reflect> Reflect for &'static T {
    #[inline]
    fn reflect_ref(&self) -> ReflectRef<'_> {
        ReflectRef::Pointer(self)
    }
}

impl<T: Reflect> Pointer for &'static T {
    #[inline]
    fn pointee(&self) -> Option<&dyn Reflect> {
        Some(*self)
    }
}

impl Reflect for &'static dyn Reflect {
    #[inline]
    fn reflect_ref(&self) -> ReflectRef<'_> {
        ReflectRef::Pointer(self)
    }
}

impl Pointer for &'static dyn Reflect {
    #[inline]
    fn pointee(&self) -> Option<&dyn Reflect> {
        Some(*self)
    }
}

#[cfg(test)]
mod tests {
    use crate::Reflect;
    use crate::info::ReflectKind;
    use crate::ops::Pointer;

    static VALUE: u16 = 9;

    #[test]
    fn static_refs_are_pointers() {
        let typed: &'static u16 = &VALUE;
        assert_eq!(Reflect::reflect_kind(&typed), ReflectKind::Pointer);
        assert_eq!((&typed as &dyn Reflect).reflect_kind(), ReflectKind::Pointer);
        assert_eq!(
            Pointer::pointee(&typed).and_then(|v| v.downcast_ref::<u16>()),
            Some(&9)
        );
        assert!(!crate::access::is_nil(&typed));

        let erased: &'static dyn Reflect = &VALUE;
        assert_eq!(Reflect::reflect_kind(&erased), ReflectKind::Pointer);
        assert!(!Pointer::is_nil(&erased));
        assert!(Pointer::pointee(&erased).is_some_and(|v| v.is::<u16>()));
    }
}
