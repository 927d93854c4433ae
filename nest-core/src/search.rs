//! Key/value searches over nested containers
//!
//! Matching is strict: a container matches when it holds `key` and the value
//! stored there equals `target` exactly, variant included. Matches are
//! returned as borrows into the searched tree.

use crate::key::Key;
use crate::value::{Container, Value};

/// Collect every container in the tree holding `key` with value `target`
///
/// The walk is depth-first pre-order, so a matching container is listed
/// before any of its matching descendants. The root counts when it is a
/// container; a scalar root yields no matches.
pub fn search_recursive<'a>(root: &'a Value, key: &Key, target: &Value) -> Vec<&'a Container> {
    let mut results = Vec::new();
    collect_matches(root, key, target, &mut results);
    results
}

fn collect_matches<'a>(
    value: &'a Value,
    key: &Key,
    target: &Value,
    results: &mut Vec<&'a Container>,
) {
    let Value::Container(container) = value else {
        return;
    };

    if container.get(key) == Some(target) {
        results.push(container);
    }

    for child in container.values() {
        collect_matches(child, key, target, results);
    }
}

/// Collect the direct child containers holding `key` with value `target`
///
/// Only one level is inspected; scalar children are skipped.
pub fn search_flat<'a>(container: &'a Container, key: &Key, target: &Value) -> Vec<&'a Container> {
    container
        .values()
        .filter_map(Value::as_container)
        .filter(|child| child.get(key) == Some(target))
        .collect()
}
