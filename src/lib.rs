//! jsontree renders a JSON document as a labeled console tree.
//!
//! Pipeline: parsed JSON value → [`builder::TreeBuilder`] →
//! [`arena::TreeArena`] → a [`style::Style`] (consulting an
//! [`icons::IconSet`]) → text lines on the output sink.

pub mod arena;
pub mod builder;
pub mod cli;
pub mod config;
pub mod errors;
pub mod explorer;
pub mod icons;
pub mod style;
pub mod util;

pub use builder::TreeBuilder;
pub use config::Settings;
pub use errors::{ExplorerError, ExplorerResult};
pub use explorer::Explorer;
pub use icons::{IconLibrary, IconSet};
pub use style::{RenderOptions, Style, StyleRegistry};
