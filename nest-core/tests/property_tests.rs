//! Property-based tests for container copy

use nest_core::{copy, copy_container, Container, Key, Value};
use nest_test_utils::{is_renumbered, string_keys};
use proptest::prelude::*;

fn arb_key() -> impl Strategy<Value = Key> {
    prop_oneof![
        (-50i64..50).prop_map(Key::Int),
        "[a-zA-Z#]{1,6}".prop_map(Key::from),
    ]
}

fn arb_scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::NULL),
        any::<bool>().prop_map(Value::from),
        any::<i64>().prop_map(Value::from),
        any::<f64>().prop_map(Value::from),
        Just(Value::from(f64::NAN)),
        "[a-z0-9]{0,8}".prop_map(Value::from),
    ]
}

fn arb_container() -> impl Strategy<Value = Container> {
    let leaf = prop::collection::vec((arb_key(), arb_scalar()), 0..6)
        .prop_map(|entries| entries.into_iter().collect::<Container>());

    leaf.prop_recursive(4, 64, 6, |inner| {
        prop::collection::vec(
            (
                arb_key(),
                prop_oneof![arb_scalar(), inner.prop_map(Value::Container)],
            ),
            0..6,
        )
        .prop_map(|entries| entries.into_iter().collect::<Container>())
    })
}

/// Same shape level by level: string keys in place, integer keys in place
fn same_layout(original: &Container, renumbered: &Container) -> bool {
    original.len() == renumbered.len()
        && original
            .iter()
            .zip(renumbered.iter())
            .all(|((key_a, value_a), (key_b, value_b))| {
                let keys_match = match key_a {
                    Key::Int(_) => key_b.is_integer_like(),
                    Key::Str(_) => key_a == key_b,
                };
                let values_match = match (value_a, value_b) {
                    (Value::Container(a), Value::Container(b)) => same_layout(a, b),
                    (Value::Scalar(a), Value::Scalar(b)) => a == b,
                    _ => false,
                };
                keys_match && values_match
            })
}

proptest! {
    #[test]
    fn copy_without_reorder_is_identity(source in arb_container()) {
        let copied = copy_container(&source, false);
        prop_assert_eq!(&copied, &source);
    }

    #[test]
    fn copy_without_reorder_is_idempotent(source in arb_container()) {
        let once = copy_container(&source, false);
        let twice = copy_container(&once, false);
        prop_assert_eq!(twice, once);
    }

    #[test]
    fn reorder_numbers_every_level_from_zero(source in arb_container()) {
        let copied = copy_container(&source, true);
        prop_assert!(is_renumbered(&copied));
    }

    #[test]
    fn reorder_keeps_string_keys_and_positions(source in arb_container()) {
        let copied = copy_container(&source, true);
        prop_assert_eq!(string_keys(&copied), string_keys(&source));
        prop_assert!(same_layout(&source, &copied));
    }

    #[test]
    fn reorder_is_idempotent(source in arb_container()) {
        let once = copy_container(&source, true);
        let twice = copy_container(&once, true);
        prop_assert_eq!(twice, once);
    }

    #[test]
    fn copy_of_value_matches_copy_of_container(source in arb_container(), reorder in any::<bool>()) {
        let wrapped = Value::Container(source.clone());
        let copied = copy(&wrapped, reorder).expect("container input never fails");
        prop_assert_eq!(copied, copy_container(&source, reorder));
    }

    #[test]
    fn copy_preserves_depth(source in arb_container(), reorder in any::<bool>()) {
        prop_assert_eq!(copy_container(&source, reorder).depth(), source.depth());
    }
}
