use crate::Reflect;
use crate::ops::{ReflectRef, Struct};

const FIELD_NAMES: [&str; 8] = ["0", "1", "2", "3", "4", "5", "6", "7"];

macro_rules! impl_reflect_tuple {
    ($len:literal: $($index:tt => $name:ident),+) => {
        impl<$($name: Reflect),+> Reflect for ($($name,)+) {
            #[inline]
            fn reflect_ref(&self) -> ReflectRef<'_> {
                ReflectRef::Struct(self)
            }
        }

        impl<$($name: Reflect),+> Struct for ($($name,)+) {
            fn field(&self, name: &str) -> Option<&dyn Reflect> {
                let index = FIELD_NAMES[..$len].iter().position(|n| *n == name)?;
                self.field_at(index)
            }

            fn field_at(&self, index: usize) -> Option<&dyn Reflect> {
                match index {
                    $($index => Some(&self.$index),)+
                    _ => None,
                }
            }

            #[inline]
            fn name_at(&self, index: usize) -> Option<&str> {
                FIELD_NAMES[..$len].get(index).copied()
            }

            #[inline]
            fn field_len(&self) -> usize {
                $len
            }
        }
    };
}

impl_reflect_tuple!(1: 0 => P0);
impl_reflect_tuple!(2: 0 => P0, 1 => P1);
impl_reflect_tuple!(3: 0 => P0, 1 => P1, 2 => P2);
impl_reflect_tuple!(4: 0 => P0, 1 => P1, 2 => P2, 3 => P3);
impl_reflect_tuple!(5: 0 => P0, 1 => P1, 2 => P2, 3 => P3, 4 => P4);
impl_reflect_tuple!(6: 0 => P0, 1 => P1, 2 => P2, 3 => P3, 4 => P4, 5 => P5);
impl_reflect_tuple!(7: 0 => P0, 1 => P1, 2 => P2, 3 => P3, 4 => P4, 5 => P5, 6 => P6);
impl_reflect_tuple!(8: 0 => P0, 1 => P1, 2 => P2, 3 => P3, 4 => P4, 5 => P5, 6 => P6, 7 => P7);

#[cfg(test)]
mod tests {
    use alloc::string::String;

    use crate::Reflect;
    use crate::ops::Struct;

    #[test]
    fn tuple_fields_by_position() {
        let value = (1_i32, String::from("a"), true);
        let s = value.reflect_ref().as_struct().unwrap();
        assert_eq!(s.field_len(), 3);
        assert_eq!(s.field_as::<String>("1").map(String::as_str), Some("a"));
        assert_eq!(s.field_as::<bool>("2"), Some(&true));
        assert!(s.field("3").is_none());
        assert!(s.field("+1").is_none());
        assert!(s.field("01").is_none());
    }

    #[test]
    fn names_follow_rust() {
        let value = (0_u8, 0_u8);
        let names: alloc::vec::Vec<&str> = (&value as &dyn Struct)
            .iter_fields()
            .map(|(name, _)| name)
            .collect();
        assert_eq!(names, ["0", "1"]);
    }
}
