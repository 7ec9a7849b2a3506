//! End-to-end tests for the Explorer orchestrator and style registry

use std::io::Write;

use jsontree::arena::TreeArena;
use jsontree::errors::{ExplorerError, ExplorerResult};
use jsontree::style::Style;
use jsontree::util::testing;
use jsontree::{Explorer, IconSet};
use serde_json::json;

#[ctor::ctor]
fn init() {
    testing::init_test_setup();
}

#[test]
fn given_unknown_style_when_rendering_then_fails_without_silent_default() {
    let err = Explorer::default()
        .render_to_string(&json!({"a": 1}), "circle", "icon1")
        .unwrap_err();

    assert!(matches!(err, ExplorerError::UnknownStyle(name) if name == "circle"));
}

#[test]
fn given_unknown_icon_family_when_rendering_then_fails_with_family_name() {
    let err = Explorer::default()
        .render_to_string(&json!({"a": 1}), "tree", "icon9")
        .unwrap_err();

    assert!(matches!(err, ExplorerError::UnknownIconFamily(name) if name == "icon9"));
}

#[test]
fn given_mixed_case_style_name_when_rendering_then_resolves() {
    let output = Explorer::default()
        .render_to_string(&json!({"a": 1}), "Tree", "icon1")
        .unwrap();
    assert_eq!(output, "└─♣a: 1\n");
}

#[test]
fn given_unsupported_shape_when_rendering_then_build_error_propagates() {
    let err = Explorer::default()
        .render_to_string(&json!({"a": []}), "tree", "icon1")
        .unwrap_err();

    assert!(matches!(err, ExplorerError::UnsupportedShape { .. }));
}

// ============================================================
// Style Registration
// ============================================================

/// Minimal style: one line per leaf, no prefixes. Exercises the
/// registry's extension seam.
#[derive(Debug)]
struct FlatStyle {
    icons: IconSet,
}

impl Style for FlatStyle {
    fn render(&mut self, tree: &TreeArena, out: &mut dyn Write) -> ExplorerResult<()> {
        for (_, node) in tree.iter() {
            if !node.data.is_internal() {
                writeln!(out, "{}{}", self.icons.leaf, node.data.name)?;
            }
        }
        Ok(())
    }
}

#[test]
fn given_registered_custom_style_when_rendering_then_dispatch_needs_no_changes() {
    let mut explorer = Explorer::default();
    explorer
        .registry_mut()
        .register("flat", |icons, _| Box::new(FlatStyle { icons }));

    let output = explorer
        .render_to_string(&json!({"a": {"b": 1, "c": "x"}}), "flat", "icon1")
        .unwrap();
    assert_eq!(output, "♣1\n♣x\n");

    // lookup is case-insensitive on the requested name
    assert!(explorer
        .render_to_string(&json!({"a": 1}), "FLAT", "icon1")
        .is_ok());
}

#[test]
fn given_scalar_document_when_rendering_then_value_line_only() {
    // a bare scalar hangs directly under the synthetic root
    let output = Explorer::default()
        .render_to_string(&json!(5), "tree", "icon1")
        .unwrap();
    assert_eq!(output, ": 5\n");
}

#[test]
fn given_null_document_when_rendering_then_blank_line() {
    let output = Explorer::default()
        .render_to_string(&json!(null), "tree", "icon1")
        .unwrap();
    assert_eq!(output, "\n");
}
