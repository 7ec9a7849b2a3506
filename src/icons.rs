//! Icon families: named pairs of display glyphs for internal nodes and leaves.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::errors::{ExplorerError, ExplorerResult};

/// One icon family: the glyph pair looked up at render time.
///
/// Serde field names match the configuration wire format:
/// `{"Node": "<glyph>", "Leaf": "<glyph>"}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct IconSet {
    #[serde(rename = "Node")]
    pub node: String,
    #[serde(rename = "Leaf")]
    pub leaf: String,
}

impl IconSet {
    pub fn new(node: impl Into<String>, leaf: impl Into<String>) -> Self {
        Self {
            node: node.into(),
            leaf: leaf.into(),
        }
    }
}

/// Read-only map from icon family name to [`IconSet`].
///
/// Fixed after [`Settings::load`](crate::config::Settings::load); lookup
/// of an absent family is a hard error, never a silent default.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct IconLibrary {
    families: HashMap<String, IconSet>,
}

impl Default for IconLibrary {
    fn default() -> Self {
        let mut families = HashMap::new();
        families.insert("icon1".to_string(), IconSet::new("♦", "♣"));
        families.insert("icon2".to_string(), IconSet::new("★", "☆"));
        Self { families }
    }
}

impl IconLibrary {
    pub fn lookup(&self, family: &str) -> ExplorerResult<&IconSet> {
        self.families
            .get(family)
            .ok_or_else(|| ExplorerError::UnknownIconFamily(family.to_string()))
    }

    /// Overlay families from another library; overlay wins per family.
    pub fn merge(&mut self, overlay: IconLibrary) {
        self.families.extend(overlay.families);
    }

    pub fn family_names(&self) -> Vec<String> {
        let mut names: Vec<_> = self.families.keys().cloned().collect();
        names.sort();
        names
    }
}
