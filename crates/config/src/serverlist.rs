#![forbid(unsafe_code)]

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ServerList {
    /// Maximum number of servers returned by one GetServerList call.
    pub limit: u32,
}

impl Default for ServerList {
    fn default() -> Self {
        Self { limit: 10_000 }
    }
}
