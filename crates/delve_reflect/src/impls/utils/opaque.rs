/// Implements [`Reflect`](crate::Reflect) for leaf types.
///
/// The types are reported as [`ReflectRef::Opaque`](crate::ops::ReflectRef)
/// and format through their `Debug` impl, which they must have.
///
/// # Examples
///
/// ```
/// use delve_reflect::{Reflect, impl_reflect_opaque, info::ReflectKind};
///
/// #[derive(Debug)]
/// struct Celsius(f32);
///
/// #[derive(Debug)]
/// enum Mode { On, Off }
///
/// impl_reflect_opaque!(Celsius, Mode);
///
/// assert_eq!(Celsius(1.5).reflect_kind(), ReflectKind::Opaque);
/// assert!(delve_reflect::access::get(&Mode::On, "0").is_err());
/// ```
#[macro_export]
macro_rules! impl_reflect_opaque {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::Reflect for $ty {
                #[inline]
                fn reflect_ref(&self) -> $crate::ops::ReflectRef<'_> {
                    $crate::ops::ReflectRef::Opaque(self)
                }

                #[inline]
                fn reflect_debug(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                    ::core::fmt::Debug::fmt(self, f)
                }
            }
        )+
    };
}
