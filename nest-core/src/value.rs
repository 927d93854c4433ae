//! Ordered nested containers

use crate::error::{NestError, Result};
use crate::key::Key;
use indexmap::IndexMap;
use std::ops::Index;

/// Leaf value, opaque to container transformations
///
/// Equality is strict: values of different variants never compare equal, so
/// `Int(1)`, `Float(1.0)` and `String("1")` are all distinct. Floats compare
/// by bit pattern, which keeps equality reflexive: `NaN` equals the same
/// `NaN`, while `0.0` and `-0.0` differ.
#[derive(Debug, Clone)]
pub enum Scalar {
    /// Explicit null
    Null,
    /// Boolean value
    Bool(bool),
    /// Integer value
    Int(i64),
    /// Floating point value
    Float(f64),
    /// String value
    String(String),
}

impl Scalar {
    /// Short name of the variant, for diagnostics
    pub fn kind(&self) -> &'static str {
        match self {
            Scalar::Null => "null",
            Scalar::Bool(_) => "bool",
            Scalar::Int(_) => "int",
            Scalar::Float(_) => "float",
            Scalar::String(_) => "string",
        }
    }
}

impl PartialEq for Scalar {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Scalar::Null, Scalar::Null) => true,
            (Scalar::Bool(a), Scalar::Bool(b)) => a == b,
            (Scalar::Int(a), Scalar::Int(b)) => a == b,
            (Scalar::Float(a), Scalar::Float(b)) => a.to_bits() == b.to_bits(),
            (Scalar::String(a), Scalar::String(b)) => a == b,
            _ => false,
        }
    }
}

/// A container entry value: either a leaf or a nested container
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Leaf value
    Scalar(Scalar),
    /// Nested container
    Container(Container),
}

impl Value {
    /// The null scalar
    pub const NULL: Value = Value::Scalar(Scalar::Null);

    /// Short name of the variant, for diagnostics
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Scalar(scalar) => scalar.kind(),
            Value::Container(_) => "container",
        }
    }

    /// Check whether this value is a nested container
    pub fn is_container(&self) -> bool {
        matches!(self, Value::Container(_))
    }

    /// Borrow the nested container, if any
    pub fn as_container(&self) -> Option<&Container> {
        match self {
            Value::Container(container) => Some(container),
            Value::Scalar(_) => None,
        }
    }

    /// Mutably borrow the nested container, if any
    pub fn as_container_mut(&mut self) -> Option<&mut Container> {
        match self {
            Value::Container(container) => Some(container),
            Value::Scalar(_) => None,
        }
    }

    /// Borrow the leaf value, if any
    pub fn as_scalar(&self) -> Option<&Scalar> {
        match self {
            Value::Scalar(scalar) => Some(scalar),
            Value::Container(_) => None,
        }
    }
}

impl From<Scalar> for Value {
    fn from(scalar: Scalar) -> Self {
        Value::Scalar(scalar)
    }
}

impl From<Container> for Value {
    fn from(container: Container) -> Self {
        Value::Container(container)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Scalar(Scalar::Bool(value))
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Scalar(Scalar::Int(value))
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Scalar(Scalar::Int(i64::from(value)))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Scalar(Scalar::Float(value))
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Scalar(Scalar::String(value.to_string()))
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Scalar(Scalar::String(value))
    }
}

/// Ordered mapping from [`Key`] to [`Value`]
///
/// Entries keep insertion order. Replacing the value of an existing key keeps
/// the entry in its original position, and removal shifts later entries down.
/// Two containers are equal when they hold the same entries in the same order.
#[derive(Debug, Clone)]
pub struct Container {
    entries: IndexMap<Key, Value>,
    /// Key handed out by the next [`Container::push`]; `None` once `i64::MAX` is taken
    next_index: Option<i64>,
}

impl Container {
    /// Create an empty container
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
            next_index: Some(0),
        }
    }

    /// Create an empty container with room for `capacity` entries
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: IndexMap::with_capacity(capacity),
            next_index: Some(0),
        }
    }

    /// Number of entries at this level
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether the container has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Insert an entry, returning the value it replaced
    pub fn insert(&mut self, key: impl Into<Key>, value: impl Into<Value>) -> Option<Value> {
        let key = key.into();
        if let Key::Int(index) = key {
            self.bump_next_index(index);
        }
        self.entries.insert(key, value.into())
    }

    /// Append a value under the next free integer key
    ///
    /// The next free key is one past the largest non-negative integer key the
    /// container has held, or 0.
    pub fn push(&mut self, value: impl Into<Value>) -> Result<Key> {
        let index = self.next_index.ok_or_else(|| {
            NestError::InvalidInput("next integer key is already occupied".to_string())
        })?;
        self.insert(Key::Int(index), value);
        Ok(Key::Int(index))
    }

    fn bump_next_index(&mut self, index: i64) {
        if let Some(next) = self.next_index {
            if index >= next {
                self.next_index = index.checked_add(1);
            }
        }
    }

    /// Borrow the value stored under `key`
    pub fn get(&self, key: &Key) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Mutably borrow the value stored under `key`
    pub fn get_mut(&mut self, key: &Key) -> Option<&mut Value> {
        self.entries.get_mut(key)
    }

    /// Check whether `key` is present, even when it maps to null
    pub fn contains_key(&self, key: &Key) -> bool {
        self.entries.contains_key(key)
    }

    /// Remove an entry, keeping the order of the remaining ones
    pub fn remove(&mut self, key: &Key) -> Option<Value> {
        self.entries.shift_remove(key)
    }

    /// Iterate over entries in order
    pub fn iter(&self) -> indexmap::map::Iter<'_, Key, Value> {
        self.entries.iter()
    }

    /// Iterate over keys in order
    pub fn keys(&self) -> indexmap::map::Keys<'_, Key, Value> {
        self.entries.keys()
    }

    /// Iterate over values in order
    pub fn values(&self) -> indexmap::map::Values<'_, Key, Value> {
        self.entries.values()
    }

    /// Number of container levels, counting this one
    pub fn depth(&self) -> usize {
        1 + self
            .values()
            .filter_map(Value::as_container)
            .map(Container::depth)
            .max()
            .unwrap_or(0)
    }
}

impl Default for Container {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for Container {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl Index<&Key> for Container {
    type Output = Value;

    fn index(&self, key: &Key) -> &Value {
        match self.get(key) {
            Some(value) => value,
            None => panic!("key {} not present in container", key),
        }
    }
}

impl<K: Into<Key>, V: Into<Value>> FromIterator<(K, V)> for Container {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut container = Container::new();
        container.extend(iter);
        container
    }
}

impl<K: Into<Key>, V: Into<Value>> Extend<(K, V)> for Container {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<'a> IntoIterator for &'a Container {
    type Item = (&'a Key, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, Key, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl IntoIterator for Container {
    type Item = (Key, Value);
    type IntoIter = indexmap::map::IntoIter<Key, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
