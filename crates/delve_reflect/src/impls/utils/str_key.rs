use alloc::borrow::Cow;
use alloc::boxed::Box;
use alloc::string::String;
use alloc::sync::Arc;
use core::any::{Any, TypeId};

/// Returns `true` if `K` is one of the key types a path segment can match.
///
/// These are `String`, `&'static str`, `Box<str>`, `Arc<str>` and
/// `Cow<'static, str>`.
#[inline]
pub(crate) fn is_str_key<K: Any>() -> bool {
    let id = TypeId::of::<K>();
    id == TypeId::of::<String>()
        || id == TypeId::of::<&'static str>()
        || id == TypeId::of::<Box<str>>()
        || id == TypeId::of::<Arc<str>>()
        || id == TypeId::of::<Cow<'static, str>>()
}

/// Calls a generic lookup function once per string key type, in the same
/// order as [`is_str_key`], until one returns `Some`.
///
/// The key type is the first generic argument of `$lookup`, written `_`.
/// The function downcasts the map to the concrete key type, so at most one
/// of the calls can succeed.
///
/// ```ignore
/// lookup_str_key!(lookup::<_, V>(this, key))
/// ```
macro_rules! lookup_str_key {
    ($lookup:ident::<_ $(, $rest:ty)*>($($arg:expr),* $(,)?)) => {
        $lookup::<::alloc::string::String $(, $rest)*>($($arg),*)
            .or_else(|| $lookup::<&'static str $(, $rest)*>($($arg),*))
            .or_else(|| $lookup::<::alloc::boxed::Box<str> $(, $rest)*>($($arg),*))
            .or_else(|| $lookup::<::alloc::sync::Arc<str> $(, $rest)*>($($arg),*))
            .or_else(|| $lookup::<::alloc::borrow::Cow<'static, str> $(, $rest)*>($($arg),*))
    };
}

pub(crate) use lookup_str_key;

#[cfg(test)]
mod tests {
    use alloc::borrow::Cow;
    use alloc::boxed::Box;
    use alloc::string::String;
    use alloc::sync::Arc;

    use super::is_str_key;

    #[test]
    fn string_like_keys() {
        assert!(is_str_key::<String>());
        assert!(is_str_key::<&'static str>());
        assert!(is_str_key::<Box<str>>());
        assert!(is_str_key::<Arc<str>>());
        assert!(is_str_key::<Cow<'static, str>>());
    }

    #[test]
    fn other_keys() {
        assert!(!is_str_key::<i32>());
        assert!(!is_str_key::<char>());
        assert!(!is_str_key::<Box<String>>());
        assert!(!is_str_key::<(String,)>());
    }
}
