use alloc::boxed::Box;
use alloc::string::String;

use serde_json::{Map as JsonMap, Number, Value};

use crate::Reflect;
use crate::ops::{Map, Pointer, ReflectRef};

crate::impl_reflect_opaque!(Number);

// A `Value` only indirects to its payload, so a document resolves the same
// way as the equivalent typed graph. `Value::Null` is nil.

impl Reflect for Value {
    #[inline]
    fn reflect_ref(&self) -> ReflectRef<'_> {
        ReflectRef::Pointer(self)
    }

    #[inline]
    fn reflect_debug(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Debug::fmt(self, f)
    }
}

impl Pointer for Value {
    fn pointee(&self) -> Option<&dyn Reflect> {
        match self {
            Value::Null => None,
            Value::Bool(value) => Some(value),
            Value::Number(value) => Some(value),
            Value::String(value) => Some(value),
            Value::Array(value) => Some(value),
            Value::Object(value) => Some(value),
        }
    }
}

impl Reflect for JsonMap<String, Value> {
    #[inline]
    fn reflect_ref(&self) -> ReflectRef<'_> {
        ReflectRef::Map(self)
    }

    #[inline]
    fn reflect_debug(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Debug::fmt(self, f)
    }
}

impl Map for JsonMap<String, Value> {
    #[inline]
    fn has_str_keys(&self) -> bool {
        true
    }

    #[inline]
    fn get_str(&self, key: &str) -> Option<&dyn Reflect> {
        JsonMap::get(self, key).map(Reflect::as_reflect)
    }

    #[inline]
    fn len(&self) -> usize {
        JsonMap::len(self)
    }

    fn iter(&self) -> Box<dyn Iterator<Item = (&dyn Reflect, &dyn Reflect)> + '_> {
        Box::new(
            JsonMap::iter(self).map(|(key, value)| (key as &dyn Reflect, value as &dyn Reflect)),
        )
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{Number, json};

    use crate::Reflect;
    use crate::info::ReflectKind;
    use crate::ops::Pointer;

    #[test]
    fn null_is_nil() {
        let value = json!(null);
        assert_eq!(value.reflect_kind(), ReflectKind::Pointer);
        assert!(value.is_nil());
    }

    #[test]
    fn payload_shapes() {
        let kind = |value: serde_json::Value| value.pointee().map(|v| v.reflect_kind());
        assert_eq!(kind(json!(true)), Some(ReflectKind::Opaque));
        assert_eq!(kind(json!(1)), Some(ReflectKind::Opaque));
        assert_eq!(kind(json!("s")), Some(ReflectKind::Opaque));
        assert_eq!(kind(json!([1])), Some(ReflectKind::List));
        assert_eq!(kind(json!({"a": 1})), Some(ReflectKind::Map));
    }

    #[test]
    fn numbers_downcast() {
        let value = json!({ "n": 3 });
        let n = crate::access::get_as::<Number>(&value, "n").unwrap();
        assert_eq!(n.and_then(Number::as_u64), Some(3));
    }
}
