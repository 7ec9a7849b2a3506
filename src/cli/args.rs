//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueHint};

/// Render a JSON document as a labeled console tree
#[derive(Parser, Debug)]
#[command(name = "jsontree")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// JSON file to render
    #[arg(short, long, default_value = "test.json", value_hint = ValueHint::FilePath)]
    pub file: PathBuf,

    /// Rendering style (tree, rectangle, or a registered name)
    #[arg(short, long, default_value = "tree")]
    pub style: String,

    /// Icon family (icon1, icon2, or one from the config file)
    #[arg(short, long, default_value = "icon1")]
    pub icon: String,

    /// Config file (default: $XDG_CONFIG_HOME/jsontree/config.json)
    #[arg(short, long, value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Total width of rectangle-style rows (overrides config)
    #[arg(long)]
    pub line_width: Option<usize>,

    /// Increase debug verbosity (-d, -dd, -ddd)
    #[arg(short, long, action = ArgAction::Count)]
    pub debug: u8,

    /// Print version and author info
    #[arg(long)]
    pub info: bool,
}
