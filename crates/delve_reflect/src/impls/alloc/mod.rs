// Box<T>, Box<dyn Reflect>
mod boxed;

// Arc<T>, Arc<dyn Reflect>
mod sync;

// Vec<T>, VecDeque<T>
mod vec;

// BTreeMap<K, V>
mod btree_map;

// String, Box<str>, Arc<str>, Cow<'static, str>
mod string;
