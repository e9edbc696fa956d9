#![forbid(unsafe_code)]

use crate::fetch_mode::FetchMode;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Fetch {
    /// Identifiers per request. Steam answers 414 URI Too Long above 220.
    pub chunk_max: usize,

    /// Maximum number of requests in flight at once.
    pub concurrency: usize,

    pub mode: FetchMode,
}

impl Default for Fetch {
    fn default() -> Self {
        Self {
            chunk_max: 220,
            concurrency: 10,
            mode: FetchMode::default(),
        }
    }
}
