//! Key lookup with default fallback

use crate::key::Key;
use crate::value::{Container, Value};

/// Value stored under `key`, or `default` when the key is absent
///
/// A key that is present but maps to null yields that null, not the default.
pub fn get_or<'a>(container: &'a Container, key: &Key, default: &'a Value) -> &'a Value {
    container.get(key).unwrap_or(default)
}

/// [`get_or`] with a null default
pub fn get_or_null<'a>(container: &'a Container, key: &Key) -> &'a Value {
    static NULL: Value = Value::NULL;
    get_or(container, key, &NULL)
}
