//! Boxed rendering: every row padded to a fixed visual width, corners
//! closing the box as the pass progresses.

use std::io::Write;

use generational_arena::Index;
use tracing::instrument;

use crate::arena::{NodeKind, TreeArena, TreeNode};
use crate::errors::ExplorerResult;
use crate::icons::IconSet;
use crate::style::{pick_icon, Style};

/// Renders the tree as a closed box of `line_width`-column rows.
///
/// Carries cross-call pass state: a running width counter reset per row
/// and corner marks that transition once each as rendering progresses
/// (`┌`→`├`, `┐`→`┤`, and `┴`/`┘` on the bottom row). One instance per
/// rendering pass; `render` re-initializes the marks so a reused
/// instance cannot leak prior-pass state.
#[derive(Debug)]
pub struct RectangleStyle {
    icons: IconSet,
    line_width: usize,
    /// Columns consumed on the current row
    width: usize,
    begin_mark: char,
    end_mark: char,
    bottom_turn: char,
}

impl RectangleStyle {
    pub fn new(icons: IconSet, line_width: usize) -> Self {
        Self {
            icons,
            line_width,
            width: 0,
            begin_mark: '┌',
            end_mark: '┐',
            bottom_turn: '└',
        }
    }

    /// A node is "all last" iff it and every ancestor up to the root are
    /// last siblings; its first leaf row is the bottom border of the box.
    fn is_all_last(&self, tree: &TreeArena, idx: Index) -> ExplorerResult<bool> {
        let mut current = Some(idx);
        while let Some(node_idx) = current {
            let node = tree.node(node_idx)?;
            if !node.is_last {
                return Ok(false);
            }
            current = node.parent;
        }
        Ok(true)
    }

    fn show(&mut self, tree: &TreeArena, idx: Index, out: &mut dyn Write) -> ExplorerResult<()> {
        let node = tree.node(idx)?;
        if let Some(parent) = node.parent {
            self.width = 0;
            self.indent(tree, parent, out)?;
            let (icon, is_node_icon) = pick_icon(&self.icons, tree, node)?;
            write!(out, "{}─{}{}", self.begin_mark, icon, node.data.name)?;
            self.width += 3 + node.data.name.chars().count();
            if self.begin_mark == '┌' {
                self.begin_mark = '├';
            }
            // Node-icon rows hold no value segment, close them here
            if is_node_icon {
                let pad = self.line_width.saturating_sub(self.width + 1);
                writeln!(out, "{}{}", "-".repeat(pad), self.end_mark)?;
                if self.end_mark == '┐' {
                    self.end_mark = '┤';
                }
            }
        }
        for &child_idx in &node.children {
            let child = tree.node(child_idx)?;
            match child.data.kind {
                NodeKind::Internal => {
                    // Entering the parent of the tree's final leaf: switch
                    // to bottom border marks before its row is emitted
                    if self.first_child_is_leaf(tree, child_idx)?
                        && self.is_all_last(tree, child_idx)?
                    {
                        self.begin_mark = '┴';
                        self.end_mark = '┘';
                    }
                    self.show(tree, child_idx, out)?;
                }
                NodeKind::Leaf { is_null } => self.leaf_line(child, is_null, out)?,
            }
        }
        Ok(())
    }

    fn first_child_is_leaf(&self, tree: &TreeArena, idx: Index) -> ExplorerResult<bool> {
        match tree.first_child(idx) {
            Some(first) => Ok(!tree.node(first)?.data.is_internal()),
            None => Ok(false),
        }
    }

    /// Ancestor prefix, 3 columns per ancestor below the synthetic root.
    /// On the bottom row the open columns are closed with turn marks
    /// instead of the usual pipe padding.
    fn indent(&mut self, tree: &TreeArena, idx: Index, out: &mut dyn Write) -> ExplorerResult<()> {
        let node = tree.node(idx)?;
        if let Some(parent) = node.parent {
            self.indent(tree, parent, out)?;
            self.width += 3;
            if self.begin_mark == '┴' {
                write!(out, "{}--", self.bottom_turn)?;
                if self.bottom_turn == '└' {
                    self.bottom_turn = '┴';
                }
            } else {
                write!(out, "|  ")?;
            }
        }
        Ok(())
    }

    fn leaf_line(
        &mut self,
        node: &TreeNode,
        is_null: bool,
        out: &mut dyn Write,
    ) -> ExplorerResult<()> {
        if !is_null {
            let pad = self
                .line_width
                .saturating_sub(self.width + node.data.name.chars().count() + 3);
            writeln!(out, ": {}{}{}", node.data.name, "-".repeat(pad), self.end_mark)?;
        } else {
            let pad = self.line_width.saturating_sub(self.width + 1);
            writeln!(out, "{}{}", "-".repeat(pad), self.end_mark)?;
        }
        if self.end_mark == '┐' {
            self.end_mark = '┤';
        }
        Ok(())
    }
}

impl Style for RectangleStyle {
    #[instrument(level = "debug", skip_all)]
    fn render(&mut self, tree: &TreeArena, out: &mut dyn Write) -> ExplorerResult<()> {
        self.width = 0;
        self.begin_mark = '┌';
        self.end_mark = '┐';
        self.bottom_turn = '└';
        if let Some(root) = tree.root() {
            self.show(tree, root, out)?;
        }
        Ok(())
    }
}
