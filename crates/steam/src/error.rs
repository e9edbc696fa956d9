#![forbid(unsafe_code)]

use reqwest::StatusCode;
use std::sync::Arc;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("access token must be {expected} characters long, got {actual}")]
    InvalidCredential { expected: usize, actual: usize },

    #[error("no identifiers to fetch")]
    NoIdentifiers,

    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected response status: {0}")]
    Status(StatusCode),

    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("chunk {index} failed: {source}")]
    ChunkFailed {
        index: usize,
        #[source]
        source: Arc<Error>,
    },

    #[error("record {record} belongs to {actual}, expected {expected}")]
    ScopeMismatch {
        record: u64,
        expected: u64,
        actual: u64,
    },

    #[error("fetch cancelled with {skipped} chunk(s) left")]
    Cancelled { skipped: usize },

    #[error("empty version map")]
    EmptyInput,

    #[error("threshold {0:.2}% must be a number not greater than 99%")]
    InvalidThreshold(f64),

    #[error("fallback threshold {0:.2}% must be a finite number")]
    InvalidFallback(f64),

    #[error(
        "fallback threshold {fallback:.2}% is too close to threshold {threshold:.2}%, must be at most {limit:.2}%"
    )]
    FallbackTooClose {
        threshold: f64,
        fallback: f64,
        limit: f64,
    },

    #[error("cannot use both nor and nand conditions in the same filter")]
    InvalidFilter,

    #[error("notification rejected: {0}")]
    Notify(String),
}

impl Error {
    /// Whether the error came from the network call itself rather than from
    /// local validation.
    pub fn is_transport(&self) -> bool {
        match self {
            Self::Http(_) | Self::Status(_) | Self::Decode(_) => true,
            Self::ChunkFailed { source, .. } => source.is_transport(),
            _ => false,
        }
    }
}
