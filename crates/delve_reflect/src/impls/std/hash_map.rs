use alloc::boxed::Box;
use core::any::Any;
use core::borrow::Borrow;
use core::hash::{BuildHasher, Hash};
use std::collections::HashMap;

use crate::Reflect;
use crate::impls::{is_str_key, lookup_str_key};
use crate::ops::{Map, ReflectRef};

fn lookup<'m, K, V, S>(map: &'m dyn Any, key: &str) -> Option<&'m dyn Reflect>
where
    K: Eq + Hash + Borrow<str> + 'static,
    V: Reflect,
    S: BuildHasher + 'static,
{
    map.downcast_ref::<HashMap<K, V, S>>()?
        .get(key)
        .map(Reflect::as_reflect)
}

impl<K, V, S> Reflect for HashMap<K, V, S>
where
    K: Reflect + Eq + Hash,
    V: Reflect,
    S: BuildHasher + Send + Sync + 'static,
{
    #[inline]
    fn reflect_ref(&self) -> ReflectRef<'_> {
        ReflectRef::Map(self)
    }
}

impl<K, V, S> Map for HashMap<K, V, S>
where
    K: Reflect + Eq + Hash,
    V: Reflect,
    S: BuildHasher + Send + Sync + 'static,
{
    #[inline]
    fn has_str_keys(&self) -> bool {
        is_str_key::<K>()
    }

    fn get_str(&self, key: &str) -> Option<&dyn Reflect> {
        if !is_str_key::<K>() {
            return None;
        }
        let this: &dyn Any = self;
        lookup_str_key!(lookup::<_, V, S>(this, key))
    }

    #[inline]
    fn len(&self) -> usize {
        HashMap::len(self)
    }

    fn iter(&self) -> Box<dyn Iterator<Item = (&dyn Reflect, &dyn Reflect)> + '_> {
        Box::new(
            HashMap::iter(self).map(|(key, value)| (key as &dyn Reflect, value as &dyn Reflect)),
        )
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::String;
    use std::collections::HashMap;

    use crate::Reflect;
    use crate::info::ReflectKind;
    use crate::ops::Map;

    #[test]
    fn std_hash_map() {
        let mut map = HashMap::new();
        map.insert(String::from("x"), 1_u64);
        assert_eq!(map.reflect_kind(), ReflectKind::Map);

        let map = map.reflect_ref().as_map().unwrap();
        assert!(map.has_str_keys());
        assert_eq!(map.get_str_as::<u64>("x"), Some(&1));
        assert!(map.get_str("y").is_none());
        assert_eq!(map.iter().count(), 1);
    }

    #[test]
    fn integer_keys() {
        let map: HashMap<i32, u8> = [(1, 1)].into_iter().collect();
        assert!(!Map::has_str_keys(&map));
        assert!(Map::get_str(&map, "1").is_none());
    }
}
