//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults (`icon1`/`icon2`, line width 45)
//! 2. Global config: `$XDG_CONFIG_HOME/jsontree/config.json`
//! 3. Explicit config passed via `--config`
//!
//! Wire format (JSON):
//! `{"line_width": 45, "icons": {"icon1": {"Node": "♦", "Leaf": "♣"}}}`
//! Icon maps merge per family with the overlay winning; scalar options
//! are replaced outright. Family names and the `Node`/`Leaf` keys are
//! case-sensitive.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::errors::{ExplorerError, ExplorerResult};
use crate::icons::IconLibrary;

pub const DEFAULT_LINE_WIDTH: usize = 45;

/// Raw settings for intermediate parsing (fields are Option to
/// distinguish "not specified" from an explicit value).
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub line_width: Option<usize>,
    pub icons: Option<IconLibrary>,
}

/// Unified configuration for jsontree.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Total visual width of rectangle-style rows
    pub line_width: usize,
    /// Icon families selectable at render time
    pub icons: IconLibrary,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            line_width: DEFAULT_LINE_WIDTH,
            icons: IconLibrary::default(),
        }
    }
}

impl Settings {
    /// Loads settings with layered precedence.
    ///
    /// The global file is optional; an explicit path must exist.
    #[instrument(level = "debug")]
    pub fn load(explicit: Option<&Path>) -> ExplorerResult<Self> {
        let mut settings = Self::default();

        if let Some(global) = Self::global_config_path() {
            if global.exists() {
                debug!("applying global config: {}", global.display());
                settings.apply(Self::read_file(&global)?);
            }
        }

        if let Some(path) = explicit {
            if !path.exists() {
                return Err(ExplorerError::InputNotFound(path.to_path_buf()));
            }
            debug!("applying explicit config: {}", path.display());
            settings.apply(Self::read_file(path)?);
        }

        Ok(settings)
    }

    /// Global config location: `<XDG config dir>/jsontree/config.json`.
    pub fn global_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "jsontree").map(|dirs| dirs.config_dir().join("config.json"))
    }

    fn read_file(path: &Path) -> ExplorerResult<RawSettings> {
        let contents = fs::read_to_string(path).map_err(|source| ExplorerError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&contents).map_err(|source| ExplorerError::MalformedJson {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Merge overlay onto self: scalars replace, icon families union
    /// with the overlay winning per family.
    fn apply(&mut self, overlay: RawSettings) {
        if let Some(width) = overlay.line_width {
            self.line_width = width;
        }
        if let Some(icons) = overlay.icons {
            self.icons.merge(icons);
        }
    }
}
