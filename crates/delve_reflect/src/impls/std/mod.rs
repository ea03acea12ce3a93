// HashMap<K, V, S>
mod hash_map;
