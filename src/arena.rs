use generational_arena::{Arena, Index};
use std::fmt;
use tracing::instrument;

use crate::errors::{ExplorerError, ExplorerResult};

/// Variant tag for tree entities.
///
/// A JSON object key becomes an `Internal` node; a scalar or null value
/// becomes a `Leaf`. Icon selection and render dispatch are a plain case
/// analysis on this tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    Internal,
    Leaf {
        /// True iff the originating JSON value was null
        is_null: bool,
    },
}

/// Data payload for tree nodes.
#[derive(Debug, Clone)]
pub struct NodeData {
    /// Object key for internal nodes, scalar text for leaves
    pub name: String,
    pub kind: NodeKind,
}

impl NodeData {
    pub fn internal(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: NodeKind::Internal,
        }
    }

    pub fn leaf(text: impl Into<String>) -> Self {
        Self {
            name: text.into(),
            kind: NodeKind::Leaf { is_null: false },
        }
    }

    pub fn null_leaf() -> Self {
        Self {
            name: String::new(),
            kind: NodeKind::Leaf { is_null: true },
        }
    }

    pub fn is_internal(&self) -> bool {
        matches!(self.kind, NodeKind::Internal)
    }
}

impl fmt::Display for NodeData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Tree node in the arena-based hierarchy structure.
#[derive(Debug)]
pub struct TreeNode {
    pub data: NodeData,
    /// Index of parent node in the arena, None for the root
    pub parent: Option<Index>,
    /// Indices of child nodes, insertion order = JSON key order
    pub children: Vec<Index>,
    /// True iff this is the final child among its parent's children
    pub is_last: bool,
}

/// Arena-based tree built once per rendering pass from a parsed JSON value.
///
/// Uses generational arena for memory-safe parent back-references and O(1)
/// lookups. Immutable after construction; discarded whole after rendering.
#[derive(Debug)]
pub struct TreeArena {
    arena: Arena<TreeNode>,
    root: Option<Index>,
}

impl Default for TreeArena {
    fn default() -> Self {
        Self::new()
    }
}

impl TreeArena {
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
            root: None,
        }
    }

    #[instrument(level = "trace", skip(self))]
    pub fn insert_node(&mut self, data: NodeData, parent: Option<Index>, is_last: bool) -> Index {
        let node = TreeNode {
            data,
            parent,
            children: Vec::new(),
            is_last,
        };
        let node_idx = self.arena.insert(node);

        if let Some(parent_idx) = parent {
            if let Some(parent) = self.arena.get_mut(parent_idx) {
                parent.children.push(node_idx);
            }
        } else {
            self.root = Some(node_idx);
        }

        node_idx
    }

    pub fn get_node(&self, idx: Index) -> Option<&TreeNode> {
        self.arena.get(idx)
    }

    /// Fallible node access for render paths; a stale index is a bug.
    pub fn node(&self, idx: Index) -> ExplorerResult<&TreeNode> {
        self.get_node(idx)
            .ok_or_else(|| ExplorerError::InternalError(format!("stale arena index: {:?}", idx)))
    }

    pub fn root(&self) -> Option<Index> {
        self.root
    }

    /// First child of a node, None for leaves.
    pub fn first_child(&self, idx: Index) -> Option<Index> {
        self.get_node(idx).and_then(|n| n.children.first().copied())
    }

    #[instrument(level = "trace", skip(self))]
    pub fn iter(&self) -> TreeIterator {
        TreeIterator::new(self)
    }

    #[instrument(level = "debug", skip(self))]
    pub fn depth(&self) -> usize {
        if let Some(root) = self.root {
            self.calculate_depth(root)
        } else {
            0
        }
    }

    fn calculate_depth(&self, node_idx: Index) -> usize {
        if let Some(node) = self.get_node(node_idx) {
            1 + node
                .children
                .iter()
                .map(|&child| self.calculate_depth(child))
                .max()
                .unwrap_or(0)
        } else {
            0
        }
    }

    /// Collects the text of all leaf nodes in pre-order.
    ///
    /// Leaf order equals the recursive key order of the source JSON.
    #[instrument(level = "debug", skip(self))]
    pub fn leaf_names(&self) -> Vec<String> {
        self.iter()
            .filter(|(_, node)| !node.data.is_internal())
            .map(|(_, node)| node.data.name.clone())
            .collect()
    }

    /// Names of internal nodes in pre-order, excluding the synthetic root.
    pub fn key_names(&self) -> Vec<String> {
        self.iter()
            .filter(|(_, node)| node.data.is_internal() && node.parent.is_some())
            .map(|(_, node)| node.data.name.clone())
            .collect()
    }
}

/// Pre-order depth-first iterator, children visited in stored order.
pub struct TreeIterator<'a> {
    arena: &'a TreeArena,
    stack: Vec<Index>,
}

impl<'a> TreeIterator<'a> {
    fn new(arena: &'a TreeArena) -> Self {
        let mut stack = Vec::new();
        if let Some(root) = arena.root() {
            stack.push(root);
        }
        Self { arena, stack }
    }
}

impl<'a> Iterator for TreeIterator<'a> {
    type Item = (Index, &'a TreeNode);

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(current_idx) = self.stack.pop() {
            if let Some(node) = self.arena.get_node(current_idx) {
                // Push children in reverse order for left-to-right traversal
                for &child in node.children.iter().rev() {
                    self.stack.push(child);
                }
                return Some((current_idx, node));
            }
        }
        None
    }
}
