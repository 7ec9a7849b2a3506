//! Rendering styles: the polymorphic traversal contract plus the
//! registry that maps style names to factories.

pub mod rectangle;
pub mod tree;

use std::collections::HashMap;
use std::io::Write;

use crate::arena::{NodeKind, TreeArena, TreeNode};
use crate::errors::{ExplorerError, ExplorerResult};
use crate::icons::IconSet;

pub use rectangle::RectangleStyle;
pub use tree::TreeStyle;

/// Knobs shared by style factories.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Total visual width of rectangle-style rows
    pub line_width: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            line_width: crate::config::DEFAULT_LINE_WIDTH,
        }
    }
}

/// A rendering strategy.
///
/// `render` walks the tree depth-first in pre-order, children in stored
/// order, so printed name order equals the recursive key order of the
/// source JSON. Takes `&mut self` because some styles carry cross-call
/// pass state; construct a fresh instance per rendering pass (the
/// registry factories do exactly that).
pub trait Style: std::fmt::Debug {
    fn render(&mut self, tree: &TreeArena, out: &mut dyn Write) -> ExplorerResult<()>;
}

/// Icon chosen for a node's own line, decided by the kind of its first
/// child: internal children get the node icon, leaf children the leaf icon.
/// Returns the glyph and whether it was the node icon (which governs
/// line termination).
pub(crate) fn pick_icon<'a>(
    icons: &'a IconSet,
    tree: &TreeArena,
    node: &TreeNode,
) -> ExplorerResult<(&'a str, bool)> {
    let first = node.children.first().copied().ok_or_else(|| {
        ExplorerError::InternalError(format!("internal node '{}' has no children", node.data))
    })?;
    match tree.node(first)?.data.kind {
        NodeKind::Internal => Ok((icons.node.as_str(), true)),
        NodeKind::Leaf { .. } => Ok((icons.leaf.as_str(), false)),
    }
}

/// Factory producing a fresh style instance for one rendering pass.
pub type StyleFactory = fn(IconSet, &RenderOptions) -> Box<dyn Style>;

/// Explicit mapping from lowercase style name to factory.
///
/// Adding a style means registering a factory; dispatch code never
/// changes. Lookup of an unregistered name is a hard error, never a
/// silent default.
pub struct StyleRegistry {
    factories: HashMap<String, StyleFactory>,
}

impl Default for StyleRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}

impl StyleRegistry {
    pub fn empty() -> Self {
        Self {
            factories: HashMap::new(),
        }
    }

    /// Registry preloaded with the built-in `tree` and `rectangle` styles.
    pub fn with_builtins() -> Self {
        let mut registry = Self::empty();
        registry.register("tree", |icons, _| Box::new(TreeStyle::new(icons)));
        registry.register("rectangle", |icons, opts| {
            Box::new(RectangleStyle::new(icons, opts.line_width))
        });
        registry
    }

    /// Registers `factory` under the lowercase form of `name`.
    pub fn register(&mut self, name: &str, factory: StyleFactory) {
        self.factories.insert(name.to_ascii_lowercase(), factory);
    }

    /// Creates a fresh renderer for one pass.
    pub fn create(
        &self,
        name: &str,
        icons: IconSet,
        options: &RenderOptions,
    ) -> ExplorerResult<Box<dyn Style>> {
        let factory = self
            .factories
            .get(&name.to_ascii_lowercase())
            .ok_or_else(|| ExplorerError::UnknownStyle(name.to_string()))?;
        Ok(factory(icons, options))
    }

    pub fn style_names(&self) -> Vec<String> {
        let mut names: Vec<_> = self.factories.keys().cloned().collect();
        names.sort();
        names
    }
}
