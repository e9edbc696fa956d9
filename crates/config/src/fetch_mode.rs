#![forbid(unsafe_code)]

use serde::{Deserialize, Serialize};

/// How chunked bulk requests are driven.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum FetchMode {
    /// One chunk at a time, stop at the first failure.
    Sequential,
    /// All chunks under the concurrency cap, failures are collected.
    #[default]
    Concurrent,
}
