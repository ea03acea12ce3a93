crate::impl_reflect_opaque!(
    bool, char, (), u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64,
);

#[cfg(test)]
mod tests {
    use alloc::format;

    use crate::Reflect;
    use crate::info::ReflectKind;

    #[test]
    fn leaves_are_opaque() {
        assert_eq!(true.reflect_kind(), ReflectKind::Opaque);
        assert_eq!('c'.reflect_kind(), ReflectKind::Opaque);
        assert_eq!(().reflect_kind(), ReflectKind::Opaque);
        assert_eq!(1.5_f64.reflect_kind(), ReflectKind::Opaque);
        assert_eq!(u128::MAX.reflect_kind(), ReflectKind::Opaque);
    }

    #[test]
    fn debug_forwards() {
        let value: &dyn Reflect = &-3_i64;
        assert_eq!(format!("{value:?}"), "-3");
        let value: &dyn Reflect = &'x';
        assert_eq!(format!("{value:?}"), "'x'");
    }
}
