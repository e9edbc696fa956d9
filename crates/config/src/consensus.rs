#![forbid(unsafe_code)]

use crate::Error;
use serde::{Deserialize, Serialize};

/// Support percentages used when picking the current release version.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Consensus {
    /// Main threshold in percent (0..=99).
    pub threshold: f64,

    /// Secondary threshold in percent. Defaults to 60% of `threshold`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback: Option<f64>,
}

impl Default for Consensus {
    fn default() -> Self {
        Self {
            threshold: 30.0,
            fallback: None,
        }
    }
}

impl Consensus {
    pub fn fallback(&self) -> f64 {
        self.fallback.unwrap_or(self.threshold * 0.6)
    }

    /// Reject pairs that the selector would refuse anyway, so a bad config
    /// fails at startup instead of after a full fetch.
    pub fn validate(self) -> Result<Self, Error> {
        let fallback = self.fallback();
        let valid = self.threshold.is_finite()
            && fallback.is_finite()
            && self.threshold <= 99.0
            && fallback * 1.1 <= self.threshold;
        if valid {
            Ok(self)
        } else {
            Err(Error::InvalidConsensus {
                threshold: self.threshold,
                fallback,
            })
        }
    }
}
