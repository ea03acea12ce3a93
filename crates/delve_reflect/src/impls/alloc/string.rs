use alloc::borrow::Cow;
use alloc::boxed::Box;
use alloc::string::String;
use alloc::sync::Arc;

crate::impl_reflect_opaque!(String, Box<str>, Arc<str>, Cow<'static, str>);

#[cfg(test)]
mod tests {
    use alloc::borrow::Cow;
    use alloc::boxed::Box;
    use alloc::format;
    use alloc::string::String;

    use crate::Reflect;
    use crate::info::ReflectKind;

    #[test]
    fn strings_are_leaves() {
        assert_eq!(String::from("a").reflect_kind(), ReflectKind::Opaque);
        let boxed: Box<str> = "b".into();
        assert_eq!(boxed.reflect_kind(), ReflectKind::Opaque);
        let cow: Cow<'static, str> = Cow::Borrowed("c");
        assert_eq!(format!("{:?}", &cow as &dyn Reflect), r#""c""#);
    }
}
