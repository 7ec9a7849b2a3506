use serde_json::Value;
use tracing::instrument;

use crate::arena::{NodeData, TreeArena};
use crate::errors::{ExplorerError, ExplorerResult};
use generational_arena::Index;

/// Converts a parsed JSON value into a [`TreeArena`].
///
/// Every JSON object key becomes exactly one internal node at the
/// corresponding depth; scalar and null values become leaf children of the
/// node named after their key. Only the final key at each nesting level
/// carries the last-sibling flag.
///
/// Arrays and empty objects are rejected with
/// [`ExplorerError::UnsupportedShape`] rather than given made-up semantics.
#[derive(Debug, Default)]
pub struct TreeBuilder;

impl TreeBuilder {
    pub fn new() -> Self {
        Self
    }

    /// Builds the tree for one rendering pass.
    ///
    /// The result is rooted under a synthetic node named `root` which no
    /// style ever emits; its children are the converted top-level value.
    #[instrument(level = "debug", skip(self, value))]
    pub fn build(&self, value: &Value) -> ExplorerResult<TreeArena> {
        let mut tree = TreeArena::new();
        let root = tree.insert_node(NodeData::internal("root"), None, true);
        self.attach(&mut tree, root, value, "$")?;
        Ok(tree)
    }

    /// Attaches `value` beneath `parent`: object keys expand to sibling
    /// internal nodes, anything else becomes a single leaf child.
    fn attach(
        &self,
        tree: &mut TreeArena,
        parent: Index,
        value: &Value,
        location: &str,
    ) -> ExplorerResult<()> {
        match value {
            Value::Object(map) => {
                if map.is_empty() {
                    return Err(ExplorerError::UnsupportedShape {
                        location: location.to_string(),
                        reason: "empty JSON object".to_string(),
                    });
                }
                let last = map.len() - 1;
                for (i, (key, child)) in map.iter().enumerate() {
                    let node =
                        tree.insert_node(NodeData::internal(key), Some(parent), i == last);
                    self.attach(tree, node, child, &format!("{location}.{key}"))?;
                }
                Ok(())
            }
            Value::Array(_) => Err(ExplorerError::UnsupportedShape {
                location: location.to_string(),
                reason: "JSON array".to_string(),
            }),
            Value::Null => {
                tree.insert_node(NodeData::null_leaf(), Some(parent), true);
                Ok(())
            }
            scalar => {
                tree.insert_node(NodeData::leaf(scalar_text(scalar)), Some(parent), true);
                Ok(())
            }
        }
    }
}

/// Textual representation of a scalar leaf: raw string contents (no
/// quotes), JSON literal text for numbers and booleans.
fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
