use alloc::boxed::Box;
use core::any::Any;
use core::borrow::Borrow;
use core::hash::{BuildHasher, Hash};

use hashbrown::HashMap;

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
    use alloc::sync::Arc;
    use foldhash::fast::FixedState;
    use hashbrown::HashMap;

    use crate::access;

    #[test]
    fn hashbrown_map_in_path() {
        let mut map: HashMap<Arc<str>, [u8; 2], FixedState> =
            HashMap::with_hasher(FixedState::with_seed(0x95EE04C4F326B271));
        map.insert(Arc::from("pair"), [7, 8]);

        let value = access::get_as::<u8>(&map, "pair.1").unwrap();
        assert_eq!(value, Some(&8));
        assert!(access::get(&map, "other").is_err());
    }
}
