//! Classic indentation/connector tree rendering.

use std::io::Write;

use generational_arena::Index;
use tracing::instrument;

use crate::arena::{NodeKind, TreeArena, TreeNode};
use crate::errors::ExplorerResult;
use crate::icons::IconSet;
use crate::style::{pick_icon, Style};

/// Renders the tree with `└─`/`├─` connectors and per-ancestor
/// indentation. Stateless across lines; still one instance per pass by
/// registry convention.
#[derive(Debug)]
pub struct TreeStyle {
    icons: IconSet,
}

impl TreeStyle {
    pub fn new(icons: IconSet) -> Self {
        Self { icons }
    }

    fn show(&self, tree: &TreeArena, idx: Index, out: &mut dyn Write) -> ExplorerResult<()> {
        let node = tree.node(idx)?;
        // The synthetic root emits no line of its own
        if let Some(parent) = node.parent {
            self.indent(tree, parent, out)?;
            let (icon, is_node_icon) = pick_icon(&self.icons, tree, node)?;
            let connector = if node.is_last { "└─" } else { "├─" };
            write!(out, "{connector}{icon}{}", node.data.name)?;
            // A leaf-icon line is finished by the leaf's own value segment
            if is_node_icon {
                writeln!(out)?;
            }
        }
        for &child_idx in &node.children {
            let child = tree.node(child_idx)?;
            match child.data.kind {
                NodeKind::Internal => self.show(tree, child_idx, out)?,
                NodeKind::Leaf { is_null } => self.leaf_line(child, is_null, out)?,
            }
        }
        Ok(())
    }

    /// Emits the cumulative ancestor prefix; each ancestor below the
    /// synthetic root contributes one 3-column segment.
    fn indent(&self, tree: &TreeArena, idx: Index, out: &mut dyn Write) -> ExplorerResult<()> {
        let node = tree.node(idx)?;
        if let Some(parent) = node.parent {
            self.indent(tree, parent, out)?;
            let segment = if node.is_last { "   " } else { "|  " };
            write!(out, "{segment}")?;
        }
        Ok(())
    }

    fn leaf_line(&self, node: &TreeNode, is_null: bool, out: &mut dyn Write) -> ExplorerResult<()> {
        if !is_null {
            writeln!(out, ": {}", node.data.name)?;
        } else {
            writeln!(out)?;
        }
        Ok(())
    }
}

impl Style for TreeStyle {
    #[instrument(level = "debug", skip_all)]
    fn render(&mut self, tree: &TreeArena, out: &mut dyn Write) -> ExplorerResult<()> {
        if let Some(root) = tree.root() {
            self.show(tree, root, out)?;
        }
        Ok(())
    }
}
