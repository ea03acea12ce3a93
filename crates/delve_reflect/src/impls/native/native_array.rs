use crate::Reflect;
use crate::ops::{Array, ReflectRef};

impl<T: Reflect, const N: usize> Reflect for [T; N] {
    #[inline]
    fn reflect_ref(&self) -> ReflectRef<'_> {
        ReflectRef::Array(self)
    }
}

impl<T: Reflect, const N: usize> Array for [T; N] {
    #[inline]
    fn get(&self, index: usize) -> Option<&dyn Reflect> {
        <[T]>::get(self, index).map(Reflect::as_reflect)
    }

    #[inline]
    fn len(&self) -> usize {
        N
    }
}

#[cfg(test)]
mod tests {
    use crate::Reflect;
    use crate::ops::Array;

    #[test]
    fn array_elements() {
        let value = [1_u8, 2, 3];
        let array = value.reflect_ref().as_array().unwrap();
        assert_eq!(array.len(), 3);
        assert_eq!(array.get(0).and_then(|v| v.downcast_ref::<u8>()), Some(&1));
        assert!(array.get(3).is_none());
        assert_eq!(array.iter().count(), 3);
    }

    #[test]
    fn empty_array() {
        let value: [i32; 0] = [];
        assert!(Array::is_empty(&value));
        assert!(Array::get(&value, 0).is_none());
    }
}
