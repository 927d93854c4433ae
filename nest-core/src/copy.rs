//! Recursive container copy with per-level integer key renumbering
//!
//! The copy walks the source depth-first, in order. Each level keeps its own
//! counter, starting at 0, that replaces integer-like keys when renumbering is
//! requested; string keys never consume a counter value and are copied as-is.
//! Nested containers are copied with a fresh counter, so sibling and nested
//! levels are numbered independently.
//!
//! The walk recurses once per nesting level and has no depth check of its
//! own. Trees read through [`parse_str`](crate::json::parse_str) or built
//! by [`generate`](crate::generate::generate) are bounded by
//! [`Limits`](crate::Limits); callers assembling deeper trees by hand own the
//! stack budget.
//!
//! ```
//! use nest_core::{copy_container, Container, Key};
//!
//! let mut inner = Container::new();
//! inner.insert(9, "c");
//! inner.insert(0, "d");
//!
//! let mut source = Container::new();
//! source.insert(6, "a");
//! source.insert("OR", inner);
//! source.insert(4, "e");
//!
//! let copied = copy_container(&source, true);
//! let keys: Vec<_> = copied.keys().cloned().collect();
//! assert_eq!(keys, vec![Key::Int(0), Key::from("OR"), Key::Int(1)]);
//! ```

use crate::error::{NestError, Result};
use crate::key::Key;
use crate::value::{Container, Value};

/// Copy options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CopyOptions {
    /// Renumber integer-like keys 0, 1, 2, ... independently at every level
    pub reorder_integer_keys: bool,
}

/// Deep copy `source`, which must be a container
///
/// Returns [`NestError::InvalidInput`] for a scalar, since there is no
/// meaningful partial copy of one.
pub fn copy(source: &Value, reorder_integer_keys: bool) -> Result<Container> {
    match source {
        Value::Container(container) => Ok(copy_container(container, reorder_integer_keys)),
        Value::Scalar(scalar) => Err(NestError::InvalidInput(format!(
            "expected a container at the top level, found {}",
            scalar.kind()
        ))),
    }
}

/// [`copy`] driven by [`CopyOptions`]
pub fn copy_with(source: &Value, options: CopyOptions) -> Result<Container> {
    copy(source, options.reorder_integer_keys)
}

/// Deep copy a container
pub fn copy_container(source: &Container, reorder_integer_keys: bool) -> Container {
    let mut copied = Container::with_capacity(source.len());
    let mut next_index: i64 = 0;

    for (key, value) in source {
        let key = match key {
            Key::Int(_) if reorder_integer_keys => {
                let renumbered = Key::Int(next_index);
                next_index += 1;
                renumbered
            }
            _ => key.clone(),
        };

        let value = match value {
            Value::Container(inner) => {
                Value::Container(copy_container(inner, reorder_integer_keys))
            }
            Value::Scalar(scalar) => Value::Scalar(scalar.clone()),
        };

        copied.insert(key, value);
    }

    copied
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Scalar;

    fn container<K: Into<Key>>(entries: Vec<(K, Value)>) -> Container {
        entries.into_iter().collect()
    }

    fn keys(container: &Container) -> Vec<Key> {
        container.keys().cloned().collect()
    }

    #[test]
    fn test_copy_without_reorder_is_identity() {
        let source = container(vec![
            (Key::Int(6), Value::from("A")),
            (Key::from("OR"), Value::from(container(vec![(9, Value::from("C"))]))),
            (Key::Int(-2), Value::from(1.5)),
        ]);

        let copied = copy_container(&source, false);
        assert_eq!(copied, source);
        assert_eq!(keys(&copied), keys(&source));
    }

    #[test]
    fn test_per_level_renumbering() {
        let source = container(vec![
            (Key::Int(6), Value::from("A")),
            (Key::Int(1), Value::from("B")),
            (
                Key::from("OR"),
                Value::from(container(vec![(9, Value::from("C")), (0, Value::from("D"))])),
            ),
            (Key::Int(4), Value::from("E")),
        ]);
        let expected = container(vec![
            (Key::Int(0), Value::from("A")),
            (Key::Int(1), Value::from("B")),
            (
                Key::from("OR"),
                Value::from(container(vec![(0, Value::from("C")), (1, Value::from("D"))])),
            ),
            (Key::Int(2), Value::from("E")),
        ]);

        assert_eq!(copy_container(&source, true), expected);
    }

    #[test]
    fn test_mixed_level_string_keys_do_not_consume_counter() {
        let source = container(vec![
            (Key::Int(5), Value::from("A")),
            (Key::from("label"), Value::from("B")),
            (Key::Int(2), Value::from("C")),
        ]);

        let copied = copy_container(&source, true);
        assert_eq!(keys(&copied), vec![Key::Int(0), Key::from("label"), Key::Int(1)]);
        assert_eq!(copied.get(&Key::Int(1)), Some(&Value::from("C")));
    }

    #[test]
    fn test_empty_container() {
        assert_eq!(copy_container(&Container::new(), true), Container::new());
        assert_eq!(copy_container(&Container::new(), false), Container::new());
        assert!(copy(&Value::from(Container::new()), true).unwrap().is_empty());
    }

    #[test]
    fn test_sequential_keys_unchanged() {
        let source = container(vec![
            (0, Value::from("a")),
            (1, Value::from("b")),
            (2, Value::from("c")),
        ]);
        assert_eq!(copy_container(&source, true), source);
    }

    #[test]
    fn test_counter_restarts_at_every_level() {
        let level3 = container(vec![(30, Value::from("x")), (31, Value::from("y"))]);
        let level2 = container(vec![
            (Key::Int(20), Value::from("p")),
            (Key::from("deeper"), Value::from(level3)),
            (Key::Int(21), Value::from("q")),
        ]);
        let sibling = container(vec![(40, Value::from("s"))]);
        let source = container(vec![
            (Key::Int(10), Value::from(level2)),
            (Key::Int(11), Value::from(sibling)),
        ]);

        let copied = copy_container(&source, true);
        assert_eq!(keys(&copied), vec![Key::Int(0), Key::Int(1)]);

        let level2 = copied[&Key::Int(0)].as_container().unwrap();
        assert_eq!(
            keys(level2),
            vec![Key::Int(0), Key::from("deeper"), Key::Int(1)]
        );
        let level3 = level2[&Key::from("deeper")].as_container().unwrap();
        assert_eq!(keys(level3), vec![Key::Int(0), Key::Int(1)]);

        let sibling = copied[&Key::Int(1)].as_container().unwrap();
        assert_eq!(keys(sibling), vec![Key::Int(0)]);
    }

    #[test]
    fn test_no_aliasing() {
        let source = container(vec![(
            Key::from("inner"),
            Value::from(container(vec![(0, Value::from("leaf"))])),
        )]);
        let mut copied = copy_container(&source, false);

        copied
            .get_mut(&Key::from("inner"))
            .and_then(Value::as_container_mut)
            .unwrap()
            .insert(0, "changed");

        assert_eq!(
            source[&Key::from("inner")].as_container().unwrap()[&Key::Int(0)],
            Value::from("leaf")
        );
        assert_ne!(copied, source);
    }

    #[test]
    fn test_copy_of_nan_leaf_equals_source() {
        let source = container(vec![
            (Key::Int(3), Value::from(f64::NAN)),
            (Key::from("z"), Value::from(-0.0)),
        ]);
        assert_eq!(copy_container(&source, false), source);

        let renumbered = copy_container(&source, true);
        assert_eq!(renumbered[&Key::Int(0)], Value::from(f64::NAN));
    }

    #[test]
    fn test_copy_rejects_scalar_source() {
        match copy(&Value::from(3), true) {
            Err(NestError::InvalidInput(msg)) => assert!(msg.contains("int")),
            other => panic!("unexpected result: {:?}", other),
        }
        assert!(copy(&Value::Scalar(Scalar::Null), false).is_err());
    }

    #[test]
    fn test_copy_with_options() {
        let source = Value::from(container(vec![(7, Value::from("a"))]));
        let options = CopyOptions {
            reorder_integer_keys: true,
        };
        let copied = copy_with(&source, options).unwrap();
        assert_eq!(keys(&copied), vec![Key::Int(0)]);
        assert_eq!(
            copy_with(&source, CopyOptions::default()).unwrap(),
            *source.as_container().unwrap()
        );
    }
}
