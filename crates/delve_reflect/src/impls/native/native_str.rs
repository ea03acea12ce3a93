crate::impl_reflect_opaque!(&'static str);

#[cfg(test)]
mod tests {
    use crate::Reflect;
    use crate::info::ReflectKind;

    #[test]
    fn str_is_opaque() {
        let value: &dyn Reflect = &"text";
        assert_eq!(value.reflect_kind(), ReflectKind::Opaque);
        assert_eq!(value.downcast_ref::<&str>(), Some(&"text"));
    }
}
