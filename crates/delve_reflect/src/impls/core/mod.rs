// Option<T>
mod option;

crate::impl_reflect_opaque!(::core::time::Duration);
