use core::fmt;

use crate::ops::ReflectRef;

/// Formats a value through its reflected shape.
///
/// This is the default implementation of [`Reflect::reflect_debug`]:
///
/// - pointers format their pointee, or `None` when nil;
/// - maps, lists and arrays use [`fmt::Formatter::debug_map`] and
///   [`fmt::Formatter::debug_list`];
/// - structs use the short type name and their reflected fields, tuple-like
///   ones (first field named `"0"`) format as tuples;
/// - opaque values have no reflected content and print `type_path`.
///
/// [`Reflect::reflect_debug`]: crate::Reflect::reflect_debug
pub fn reflect_ref_debug(
    value: ReflectRef<'_>,
    type_path: &str,
    f: &mut fmt::Formatter<'_>,
) -> fmt::Result {
    match value {
        ReflectRef::Pointer(pointer) => match pointer.pointee() {
            Some(pointee) => pointee.reflect_debug(f),
            None => f.write_str("None"),
        },
        ReflectRef::Map(map) => f.debug_map().entries(map.iter()).finish(),
        ReflectRef::List(list) => f.debug_list().entries(list.iter()).finish(),
        ReflectRef::Array(array) => f.debug_list().entries(array.iter()).finish(),
        ReflectRef::Struct(s) => {
            let name = short_type_name(type_path);
            if s.name_at(0) == Some("0") {
                // Anonymous tuples already read as `(A, B)`, skip the name.
                let name = if name.starts_with('(') { "" } else { name };
                let mut debug = f.debug_tuple(name);
                for (_, field) in s.iter_fields() {
                    debug.field(&field);
                }
                debug.finish()
            } else {
                let mut debug = f.debug_struct(name);
                for (field_name, field) in s.iter_fields() {
                    debug.field(field_name, &field);
                }
                debug.finish()
            }
        }
        ReflectRef::Opaque(_) => f.write_str(type_path),
    }
}

/// Strips the module path, keeping generic arguments untouched.
///
/// `a::b::Foo<c::Bar>` becomes `Foo<c::Bar>`. Tuples stay as they are.
fn short_type_name(type_path: &str) -> &str {
    let end = type_path.find(['<', '(']).unwrap_or(type_path.len());
    match type_path[..end].rfind("::") {
        Some(index) => &type_path[index + 2..],
        None => type_path,
    }
}

#[cfg(test)]
mod tests {
    use alloc::collections::BTreeMap;
    use alloc::format;
    use alloc::string::String;
    use alloc::vec;

    use super::short_type_name;
    use crate::Reflect;

    #[test]
    fn short_names() {
        assert_eq!(short_type_name("a::b::Foo"), "Foo");
        assert_eq!(short_type_name("Foo"), "Foo");
        assert_eq!(short_type_name("a::Foo<b::Bar>"), "Foo<b::Bar>");
        assert_eq!(short_type_name("(i32, a::B)"), "(i32, a::B)");
    }

    #[test]
    fn composite_shapes() {
        let mut map = BTreeMap::new();
        map.insert(String::from("a"), vec![1_u8]);
        let value: &dyn Reflect = &map;
        assert_eq!(format!("{value:?}"), r#"{"a": [1]}"#);

        let value: &dyn Reflect = &[Some(true), None];
        assert_eq!(format!("{value:?}"), "[true, None]");
    }

    #[test]
    fn tuples_format_as_tuples() {
        let value: &dyn Reflect = &(1_i32, "x");
        assert_eq!(format!("{value:?}"), r#"(1, "x")"#);
    }
}
