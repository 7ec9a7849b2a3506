use std::fs;
use std::io;

use anyhow::Result;
use serde_json::Value;
use tracing::{debug, instrument};

use crate::cli::args::Cli;
use crate::config::Settings;
use crate::errors::{ExplorerError, ExplorerResult};
use crate::explorer::Explorer;

pub fn execute_command(cli: &Cli) -> Result<()> {
    _render(cli)?;
    Ok(())
}

#[instrument(skip(cli))]
fn _render(cli: &Cli) -> ExplorerResult<()> {
    debug!(
        "file: {:?}, style: {:?}, icon: {:?}",
        cli.file, cli.style, cli.icon
    );

    let mut settings = Settings::load(cli.config.as_deref())?;
    if let Some(width) = cli.line_width {
        settings.line_width = width;
    }

    let value = read_document(cli)?;
    let explorer = Explorer::new(settings);

    let stdout = io::stdout();
    let mut lock = stdout.lock();
    explorer.render(&value, &cli.style, &cli.icon, &mut lock)
}

fn read_document(cli: &Cli) -> ExplorerResult<Value> {
    if !cli.file.exists() {
        return Err(ExplorerError::InputNotFound(cli.file.clone()));
    }
    let contents = fs::read_to_string(&cli.file).map_err(|source| ExplorerError::Io {
        path: cli.file.clone(),
        source,
    })?;
    serde_json::from_str(&contents).map_err(|source| ExplorerError::MalformedJson {
        path: cli.file.clone(),
        source,
    })
}
