//! Tests for TreeBuilder: JSON value → arena tree conversion

use jsontree::arena::NodeKind;
use jsontree::errors::ExplorerError;
use jsontree::util::testing;
use jsontree::TreeBuilder;
use rstest::rstest;
use serde_json::{json, Value};

#[ctor::ctor]
fn init() {
    testing::init_test_setup();
}

// ============================================================
// Structure Tests
// ============================================================

#[test]
fn given_nested_object_when_building_then_every_key_becomes_one_node() {
    let tree = TreeBuilder::new()
        .build(&json!({"a": {"b": 1, "c": null}}))
        .unwrap();

    assert_eq!(tree.key_names(), vec!["a", "b", "c"]);
    // root → a → b → leaf
    assert_eq!(tree.depth(), 4);
}

#[test]
fn given_nested_object_when_building_then_root_is_synthetic_wrapper() {
    let tree = TreeBuilder::new().build(&json!({"a": 1})).unwrap();

    let root_idx = tree.root().unwrap();
    let root = tree.get_node(root_idx).unwrap();
    assert_eq!(root.data.name, "root");
    assert!(root.parent.is_none());
    assert!(root.is_last);
    assert_eq!(root.children.len(), 1);
}

#[test]
fn given_siblings_when_building_then_only_final_key_is_last() {
    let tree = TreeBuilder::new()
        .build(&json!({"a": {"b": 1, "c": null}}))
        .unwrap();

    let root_idx = tree.root().unwrap();
    let a_idx = tree.first_child(root_idx).unwrap();
    let a = tree.get_node(a_idx).unwrap();
    assert!(a.is_last);
    assert_eq!(a.children.len(), 2);

    let b = tree.get_node(a.children[0]).unwrap();
    let c = tree.get_node(a.children[1]).unwrap();
    assert_eq!(b.data.name, "b");
    assert!(!b.is_last);
    assert_eq!(c.data.name, "c");
    assert!(c.is_last);
}

#[test]
fn given_many_keys_when_building_then_insertion_order_matches_source() {
    let tree = TreeBuilder::new()
        .build(&json!({"k3": 1, "k1": {"inner": 2}, "k2": 3}))
        .unwrap();

    assert_eq!(tree.key_names(), vec!["k3", "k1", "inner", "k2"]);
}

#[test]
fn given_null_value_when_building_then_leaf_is_null() {
    let tree = TreeBuilder::new().build(&json!({"k": null})).unwrap();

    let root_idx = tree.root().unwrap();
    let k_idx = tree.first_child(root_idx).unwrap();
    let leaf_idx = tree.first_child(k_idx).unwrap();
    let leaf = tree.get_node(leaf_idx).unwrap();
    assert_eq!(leaf.data.kind, NodeKind::Leaf { is_null: true });
    assert_eq!(leaf.data.name, "");
}

#[rstest]
#[case(json!("text"), "text")]
#[case(json!(42), "42")]
#[case(json!(1.5), "1.5")]
#[case(json!(true), "true")]
#[case(json!(false), "false")]
fn given_scalar_when_building_then_leaf_text_is_json_literal(
    #[case] value: Value,
    #[case] expected: &str,
) {
    let tree = TreeBuilder::new().build(&json!({"k": value})).unwrap();
    assert_eq!(tree.leaf_names(), vec![expected]);
}

// ============================================================
// Rejected Shapes
// ============================================================

#[test]
fn given_array_value_when_building_then_fails_with_location() {
    let err = TreeBuilder::new()
        .build(&json!({"a": {"b": [1, 2]}}))
        .unwrap_err();

    match err {
        ExplorerError::UnsupportedShape { location, reason } => {
            assert_eq!(location, "$.a.b");
            assert!(reason.contains("array"), "reason: {}", reason);
        }
        other => panic!("expected UnsupportedShape, got {:?}", other),
    }
}

#[test]
fn given_top_level_array_when_building_then_fails_at_document_root() {
    let err = TreeBuilder::new().build(&json!([1, 2])).unwrap_err();

    match err {
        ExplorerError::UnsupportedShape { location, .. } => assert_eq!(location, "$"),
        other => panic!("expected UnsupportedShape, got {:?}", other),
    }
}

#[test]
fn given_empty_object_when_building_then_fails_with_location() {
    let err = TreeBuilder::new().build(&json!({"a": {}})).unwrap_err();

    match err {
        ExplorerError::UnsupportedShape { location, reason } => {
            assert_eq!(location, "$.a");
            assert!(reason.contains("empty"), "reason: {}", reason);
        }
        other => panic!("expected UnsupportedShape, got {:?}", other),
    }
}

// ============================================================
// Traversal Properties
// ============================================================

#[test]
fn given_deep_document_when_iterating_then_pre_order_matches_key_enumeration() {
    let doc = json!({
        "oranges": {
            "mandarin": {
                "clementine": null,
                "tangerine": "cheap & juicy!"
            }
        },
        "apples": {
            "gala": null,
            "pink lady": null
        }
    });
    let tree = TreeBuilder::new().build(&doc).unwrap();

    assert_eq!(
        tree.key_names(),
        vec![
            "oranges",
            "mandarin",
            "clementine",
            "tangerine",
            "apples",
            "gala",
            "pink lady"
        ]
    );
    assert_eq!(tree.leaf_names(), vec!["", "cheap & juicy!", "", ""]);
}
