//! Canned containers shaped like query filter trees

use crate::ContainerBuilder;
use nest_core::Container;
use serde_json::{json, Value as Json};

fn condition(col: &str, operator: &str) -> ContainerBuilder {
    ContainerBuilder::new()
        .string("col", col)
        .string("operator", operator)
        .int("val", 58)
}

/// Filter tree with scattered integer keys at two levels
pub fn filter_tree() -> Container {
    ContainerBuilder::new()
        .nested(6, condition("column_name_1", ">"))
        .nested(1, condition("column_name_2", ">"))
        .nested(
            "OR",
            ContainerBuilder::new()
                .nested(9, condition("column_name_1", "<"))
                .nested(0, condition("column_name_2", "<")),
        )
        .nested(4, condition("column_name_3", ">="))
        .nested(
            "OR#2",
            ContainerBuilder::new()
                .nested(44, condition("column_name_4", "="))
                .push(condition("column_name_5", "=").build()),
        )
        .build()
}

/// [`filter_tree`] after renumbering integer keys at every level
pub fn filter_tree_renumbered() -> Container {
    ContainerBuilder::new()
        .nested(0, condition("column_name_1", ">"))
        .nested(1, condition("column_name_2", ">"))
        .nested(
            "OR",
            ContainerBuilder::new()
                .nested(0, condition("column_name_1", "<"))
                .nested(1, condition("column_name_2", "<")),
        )
        .nested(2, condition("column_name_3", ">="))
        .nested(
            "OR#2",
            ContainerBuilder::new()
                .nested(0, condition("column_name_4", "="))
                .nested(1, condition("column_name_5", "=")),
        )
        .build()
}

/// [`filter_tree`] as JSON text input
pub fn filter_tree_json() -> Json {
    let cond = |col: &str, op: &str| json!({"col": col, "operator": op, "val": 58});
    json!({
        "6": cond("column_name_1", ">"),
        "1": cond("column_name_2", ">"),
        "OR": {
            "9": cond("column_name_1", "<"),
            "0": cond("column_name_2", "<")
        },
        "4": cond("column_name_3", ">="),
        "OR#2": {
            "44": cond("column_name_4", "="),
            "45": cond("column_name_5", "=")
        }
    })
}
