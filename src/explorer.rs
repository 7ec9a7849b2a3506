//! Orchestration of one rendering pass: icon lookup, style creation,
//! tree construction, rendering.

use std::io::Write;

use serde_json::Value;
use tracing::instrument;

use crate::builder::TreeBuilder;
use crate::config::Settings;
use crate::errors::{ExplorerError, ExplorerResult};
use crate::style::{RenderOptions, StyleRegistry};

/// Wires [`TreeBuilder`], [`StyleRegistry`] and the icon library
/// together for rendering passes.
pub struct Explorer {
    settings: Settings,
    registry: StyleRegistry,
}

impl Default for Explorer {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}

impl Explorer {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            registry: StyleRegistry::with_builtins(),
        }
    }

    /// Access for registering additional styles.
    pub fn registry_mut(&mut self) -> &mut StyleRegistry {
        &mut self.registry
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// One full rendering pass.
    ///
    /// Output written before an error is not meaningful; callers should
    /// only trust the sink after a successful return.
    #[instrument(level = "debug", skip(self, value, out))]
    pub fn render(
        &self,
        value: &Value,
        style_name: &str,
        icon_family: &str,
        out: &mut dyn Write,
    ) -> ExplorerResult<()> {
        let icons = self.settings.icons.lookup(icon_family)?.clone();
        let options = RenderOptions {
            line_width: self.settings.line_width,
        };
        let mut style = self.registry.create(style_name, icons, &options)?;
        let tree = TreeBuilder::new().build(value)?;
        style.render(&tree, out)
    }

    /// Rendering pass collected into a string, for tests and library use.
    pub fn render_to_string(
        &self,
        value: &Value,
        style_name: &str,
        icon_family: &str,
    ) -> ExplorerResult<String> {
        let mut buf = Vec::new();
        self.render(value, style_name, icon_family, &mut buf)?;
        String::from_utf8(buf)
            .map_err(|e| ExplorerError::InternalError(format!("non-UTF8 render output: {e}")))
    }
}
