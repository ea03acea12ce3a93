use alloc::boxed::Box;
use alloc::collections::BTreeMap;
use core::any::Any;
use core::borrow::Borrow;

use crate::Reflect;
use crate::impls::{is_str_key, lookup_str_key};
use crate::ops::{Map, ReflectRef};

fn lookup<'m, K, V>(map: &'m dyn Any, key: &str) -> Option<&'m dyn Reflect>
where
    K: Ord + Borrow<str> + 'static,
    V: Reflect,
{
    map.downcast_ref::<BTreeMap<K, V>>()?
        .get(key)
        .map(Reflect::as_reflect)
}

impl<K: Reflect + Ord, V: Reflect> Reflect for BTreeMap<K, V> {
    #[inline]
    fn reflect_ref(&self) -> ReflectRef<'_> {
        ReflectRef::Map(self)
    }
}

impl<K: Reflect + Ord, V: Reflect> Map for BTreeMap<K, V> {
    #[inline]
    fn has_str_keys(&self) -> bool {
        is_str_key::<K>()
    }

    fn get_str(&self, key: &str) -> Option<&dyn Reflect> {
        if !is_str_key::<K>() {
            return None;
        }
        let this: &dyn Any = self;
        lookup_str_key!(lookup::<_, V>(this, key))
    }

    #[inline]
    fn len(&self) -> usize {
        BTreeMap::len(self)
    }

    fn iter(&self) -> Box<dyn Iterator<Item = (&dyn Reflect, &dyn Reflect)> + '_> {
        Box::new(
            BTreeMap::iter(self)
                .map(|(key, value)| (key as &dyn Reflect, value as &dyn Reflect)),
        )
    }
}

#[cfg(test)]
mod tests {
    use alloc::borrow::Cow;
    use alloc::boxed::Box;
    use alloc::collections::BTreeMap;
    use alloc::string::String;
    use alloc::sync::Arc;

    use crate::Reflect;
    use crate::ops::Map;

    #[test]
    fn every_string_key_type() {
        let a: BTreeMap<String, u8> = [(String::from("k"), 1)].into_iter().collect();
        let b: BTreeMap<&'static str, u8> = [("k", 2)].into_iter().collect();
        let c: BTreeMap<Box<str>, u8> = [(Box::from("k"), 3)].into_iter().collect();
        let d: BTreeMap<Arc<str>, u8> = [(Arc::from("k"), 4)].into_iter().collect();
        let e: BTreeMap<Cow<'static, str>, u8> = [(Cow::Borrowed("k"), 5)].into_iter().collect();

        let maps: [&dyn Map; 5] = [&a, &b, &c, &d, &e];
        for (expected, map) in (1_u8..).zip(maps) {
            assert!(map.has_str_keys());
            assert_eq!(map.get_str_as::<u8>("k"), Some(&expected));
            assert!(map.get_str("K").is_none());
        }
    }

    #[test]
    fn non_string_keys_never_match() {
        let map: BTreeMap<u8, u8> = [(1, 1)].into_iter().collect();
        let map = map.reflect_ref().as_map().unwrap();
        assert!(!map.has_str_keys());
        assert!(map.get_str("1").is_none());
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn iterates_entries() {
        let map: BTreeMap<String, u8> =
            [(String::from("a"), 1), (String::from("b"), 2)].into_iter().collect();
        let keys: alloc::vec::Vec<&String> = Map::iter(&map)
            .filter_map(|(k, _)| k.downcast_ref::<String>())
            .collect();
        assert_eq!(keys, ["a", "b"]);
    }
}
