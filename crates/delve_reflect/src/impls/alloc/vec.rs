use alloc::collections::VecDeque;
use alloc::vec::Vec;

use crate::Reflect;
use crate::ops::{List, ReflectRef};

impl<T: Reflect> Reflect for Vec<T> {
    #[inline]
    fn reflect_ref(&self) -> ReflectRef<'_> {
        ReflectRef::List(self)
    }
}

impl<T: Reflect> List for Vec<T> {
    #[inline]
    fn get(&self, index: usize) -> Option<&dyn Reflect> {
        self.as_slice().get(index).map(Reflect::as_reflect)
    }

    #[inline]
    fn len(&self) -> usize {
        Vec::len(self)
    }
}

impl<T: Reflect> Reflect for VecDeque<T> {
    #[inline]
    fn reflect_ref(&self) -> ReflectRef<'_> {
        ReflectRef::List(self)
    }
}

impl<T: Reflect> List for VecDeque<T> {
    #[inline]
    fn get(&self, index: usize) -> Option<&dyn Reflect> {
        VecDeque::get(self, index).map(Reflect::as_reflect)
    }

    #[inline]
    fn len(&self) -> usize {
        VecDeque::len(self)
    }
}

#[cfg(test)]
mod tests {
    use alloc::collections::VecDeque;
    use alloc::vec;

    use crate::Reflect;
    use crate::ops::List;

    #[test]
    fn vec_elements() {
        let value = vec![5_u32, 6];
        let list = value.reflect_ref().as_list().unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list.get(1).and_then(|v| v.downcast_ref::<u32>()), Some(&6));
        assert!(list.get(2).is_none());
    }

    #[test]
    fn deque_follows_logical_order() {
        let mut value = VecDeque::new();
        value.push_back(2_i8);
        value.push_front(1_i8);
        let list = value.reflect_ref().as_list().unwrap();
        let items: vec::Vec<i8> = list
            .iter()
            .filter_map(|v| v.downcast_ref::<i8>().copied())
            .collect();
        assert_eq!(items, [1, 2]);
        assert!(!List::is_empty(&value));
    }
}
