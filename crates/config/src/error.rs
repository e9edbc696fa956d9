#![forbid(unsafe_code)]

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to extract config: {0}")]
    Extract(#[from] figment::Error),

    #[error("failed to serialize TOML: {0}")]
    TomlSer(#[from] toml_edit::ser::Error),

    #[error("invalid path: {0}")]
    InvalidPath(PathBuf),

    #[error("invalid consensus thresholds: threshold {threshold}%, fallback {fallback}%")]
    InvalidConsensus { threshold: f64, fallback: f64 },
}
