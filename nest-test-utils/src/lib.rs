//! Nest Test Utilities
//!
//! This crate provides shared builders and fixtures for the nest test suites.

use nest_core::{generate, Container, GeneratorConfig, Key, Limits, Value};
use rand::rngs::StdRng;
use rand::SeedableRng;

pub mod fixtures;

/// Builder for creating test containers entry by entry
pub struct ContainerBuilder {
    container: Container,
}

impl ContainerBuilder {
    /// Create a new container builder
    pub fn new() -> Self {
        Self {
            container: Container::new(),
        }
    }

    /// Add an entry with any value
    pub fn entry(mut self, key: impl Into<Key>, value: impl Into<Value>) -> Self {
        self.container.insert(key, value);
        self
    }

    /// Add a string value
    pub fn string(self, key: impl Into<Key>, value: &str) -> Self {
        self.entry(key, value)
    }

    /// Add an integer value
    pub fn int(self, key: impl Into<Key>, value: i64) -> Self {
        self.entry(key, value)
    }

    /// Add a null value
    pub fn null(self, key: impl Into<Key>) -> Self {
        self.entry(key, Value::NULL)
    }

    /// Add a nested container
    pub fn nested(self, key: impl Into<Key>, nested: ContainerBuilder) -> Self {
        self.entry(key, nested.build())
    }

    /// Append a value under the next free integer key
    pub fn push(mut self, value: impl Into<Value>) -> Self {
        self.container
            .push(value)
            .expect("builder containers never exhaust integer keys");
        self
    }

    /// Build the container
    pub fn build(self) -> Container {
        self.container
    }

    /// Build the container wrapped as a value
    pub fn build_value(self) -> Value {
        Value::Container(self.container)
    }
}

impl Default for ContainerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Deterministic random container for a seed
pub fn random_container(seed: u64, depth: usize, max_len: usize) -> Container {
    let mut rng = StdRng::seed_from_u64(seed);
    generate(&mut rng, &GeneratorConfig::new(depth, max_len), &Limits::default())
        .expect("fixture generator config within default limits")
}

/// Integer keys of a container level, in order
pub fn integer_keys(container: &Container) -> Vec<i64> {
    container.keys().filter_map(Key::as_int).collect()
}

/// String keys of a container level, in order
pub fn string_keys(container: &Container) -> Vec<String> {
    container
        .keys()
        .filter_map(|key| key.as_str().map(str::to_string))
        .collect()
}

/// Check that every level holds integer keys `0..n` in order
pub fn is_renumbered(container: &Container) -> bool {
    integer_keys(container)
        .into_iter()
        .zip(0i64..)
        .all(|(key, expected)| key == expected)
        && container
            .values()
            .filter_map(Value::as_container)
            .all(is_renumbered)
}
