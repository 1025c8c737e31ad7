use std::path::PathBuf;

use thiserror::Error;
use tiho_engine::EngineError;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config or surface table file could not be read.
    #[error("cannot read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// TOML / JSON parse or deserialization error.
    #[error("config parse error: {0}")]
    Parse(String),
    /// Config validation error (duplicate key, bad prefix, etc.).
    #[error("config validation error: {0}")]
    Validation(String),
    /// File extension is neither `.toml` nor `.json`.
    #[error("unsupported config format: {} (expected .toml or .json)", .0.display())]
    UnsupportedFormat(PathBuf),
    /// The surface table the config points at is invalid.
    #[error(transparent)]
    Table(#[from] EngineError),
}
