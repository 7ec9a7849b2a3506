use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExplorerError {
    #[error("Input file not found: {0}")]
    InputNotFound(PathBuf),

    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed JSON in {path}: {source}")]
    MalformedJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Unknown style: {0}")]
    UnknownStyle(String),

    #[error("Unknown icon family: {0}")]
    UnknownIconFamily(String),

    #[error("Unsupported JSON shape at {location}: {reason}")]
    UnsupportedShape { location: String, reason: String },

    #[error("Failed to write rendered output: {0}")]
    Output(#[from] std::io::Error),

    #[error("Internal tree operation failed: {0}")]
    InternalError(String),
}

pub type ExplorerResult<T> = Result<T, ExplorerError>;
