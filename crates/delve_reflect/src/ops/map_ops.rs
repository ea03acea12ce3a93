use alloc::boxed::Box;

use crate::Reflect;

/// A key-value association, such as `BTreeMap<K, V>` or `HashMap<K, V>`.
///
/// Path segments are strings, so only maps keyed by a string-like type can
/// be looked up by a segment. The supported key types are `String`,
/// `&'static str`, `Box<str>`, `Arc<str>` and `Cow<'static, str>`. For any
/// other key type [`has_str_keys`] is `false` and [`get_str`] always returns
/// `None`, whatever the key.
///
/// The ordering of entries is not guaranteed by this trait.
///
/// # Examples
///
/// ```
/// use delve_reflect::{Reflect, ops::Map};
/// use std::collections::BTreeMap;
///
/// let mut by_name = BTreeMap::new();
/// by_name.insert(String::from("k"), 1_i32);
/// let map: &dyn Map = &by_name;
///
/// assert!(map.has_str_keys());
/// assert_eq!(map.get_str("k").and_then(|v| v.downcast_ref::<i32>()), Some(&1));
/// assert!(map.get_str("missing").is_none());
///
/// let mut by_id = BTreeMap::new();
/// by_id.insert(1_i32, String::from("x"));
/// let map: &dyn Map = &by_id;
///
/// assert!(!map.has_str_keys());
/// assert!(map.get_str("1").is_none());
/// ```
///
/// [`has_str_keys`]: Map::has_str_keys
/// [`get_str`]: Map::get_str
pub trait Map: Reflect {
    /// Returns `true` if the key type is string-like.
    fn has_str_keys(&self) -> bool;

    /// Returns a reference to the value associated with the string key `key`.
    ///
    /// Returns `None` if the key is absent or the map is not keyed by strings.
    fn get_str(&self, key: &str) -> Option<&dyn Reflect>;

    /// Returns the number of key-value pairs in the map.
    fn len(&self) -> usize;

    /// Returns `true` if the map contains no entries.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns an iterator over the key-value pairs of the map.
    fn iter(&self) -> Box<dyn Iterator<Item = (&dyn Reflect, &dyn Reflect)> + '_>;
}

impl dyn Map {
    /// Returns a typed reference to the value associated with the string key `key`.
    ///
    /// # Examples
    ///
    /// ```
    /// use delve_reflect::ops::Map;
    /// use std::collections::BTreeMap;
    ///
    /// let map: BTreeMap<&str, i32> = [("count", 42)].into_iter().collect();
    /// let map_ref: &dyn Map = &map;
    ///
    /// assert_eq!(map_ref.get_str_as::<i32>("count"), Some(&42));
    /// assert_eq!(map_ref.get_str_as::<u8>("count"), None);
    /// ```
    #[inline]
    pub fn get_str_as<T: Reflect>(&self, key: &str) -> Option<&T> {
        self.get_str(key).and_then(<dyn Reflect>::downcast_ref)
    }
}
