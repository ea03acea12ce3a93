mod debug;
mod opaque;
mod str_key;

pub use debug::reflect_ref_debug;

pub(crate) use str_key::{is_str_key, lookup_str_key};
