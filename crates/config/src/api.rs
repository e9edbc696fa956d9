#![forbid(unsafe_code)]

use serde::{Deserialize, Serialize};
use serde_with::serde_as;
use std::time::Duration;

#[serde_as]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Api {
    /// Steam Web API key. Also read from `STEAM_API_KEY`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,

    /// Per-request timeout in seconds, enforced by the HTTP client.
    #[serde_as(as = "serde_with::DurationSeconds")]
    pub timeout: Duration,
}

impl Default for Api {
    fn default() -> Self {
        Self {
            key: None,
            timeout: Duration::from_secs(30),
        }
    }
}
