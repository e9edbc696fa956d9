#![forbid(unsafe_code)]

use super::compare_versions;
use crate::Error;
use std::collections::HashMap;
use tracing::{debug, trace};

/// Version string to number of occurrences.
pub type VersionMap = HashMap<String, u32>;

/// Share of the threshold used as fallback by [`find_version`].
const SIMPLE_FALLBACK_RATIO: f64 = 0.6;

/// The fallback has to stay at least this factor below the threshold,
/// otherwise the second pass would select the same candidates as the first.
const FALLBACK_MARGIN: f64 = 1.1;

const MAX_THRESHOLD: f64 = 99.0;

/// Select the newest version carried by at least `threshold` percent of the
/// population, using `threshold * 0.6` as fallback.
pub fn find_version(versions: &VersionMap, threshold: f64) -> Result<String, Error> {
    find_version_safe(versions, threshold, threshold * SIMPLE_FALLBACK_RATIO)
}

/// Select the newest version carried by at least `threshold` percent of the
/// population, retrying with `fallback` and finally returning the highest
/// version present.
pub fn find_version_safe(
    versions: &VersionMap,
    threshold: f64,
    fallback: f64,
) -> Result<String, Error> {
    if versions.is_empty() {
        return Err(Error::EmptyInput);
    }
    Consensus::new(threshold, fallback)?.select(versions)
}

/// A validated threshold pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Consensus {
    threshold: f64,
    fallback: f64,
}

impl Consensus {
    pub fn new(threshold: f64, fallback: f64) -> Result<Self, Error> {
        if !threshold.is_finite() || threshold > MAX_THRESHOLD {
            return Err(Error::InvalidThreshold(threshold));
        }
        if !fallback.is_finite() {
            return Err(Error::InvalidFallback(fallback));
        }
        if fallback * FALLBACK_MARGIN > threshold {
            return Err(Error::FallbackTooClose {
                threshold,
                fallback,
                limit: threshold / FALLBACK_MARGIN,
            });
        }
        Ok(Self {
            threshold,
            fallback,
        })
    }

    pub fn simple(threshold: f64) -> Result<Self, Error> {
        Self::new(threshold, threshold * SIMPLE_FALLBACK_RATIO)
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn fallback(&self) -> f64 {
        self.fallback
    }

    /// Pick the consensus version out of `versions`.
    ///
    /// Versions that compare equal (`"1.01"` and `"1.1"`) are resolved by
    /// byte order so the result does not depend on map iteration order.
    pub fn select(&self, versions: &VersionMap) -> Result<String, Error> {
        if versions.is_empty() {
            return Err(Error::EmptyInput);
        }

        let total: u64 = versions.values().map(|&count| u64::from(count)).sum();

        let mut candidates = Self::filter(versions, total, self.threshold);
        if candidates.is_empty() {
            trace!(threshold = self.threshold, "no version reached threshold");
            candidates = Self::filter(versions, total, self.fallback);
        }
        if candidates.is_empty() {
            trace!(fallback = self.fallback, "no version reached fallback");
            candidates = versions.keys().map(String::as_str).collect();
        }

        let selected = candidates
            .into_iter()
            .max_by(|a, b| compare_versions(a, b).then_with(|| a.cmp(b)))
            .ok_or(Error::EmptyInput)?;

        debug!(
            version = selected,
            total,
            threshold = self.threshold,
            fallback = self.fallback,
            "consensus version selected"
        );
        Ok(selected.to_owned())
    }

    fn filter(versions: &VersionMap, total: u64, threshold: f64) -> Vec<&str> {
        if threshold <= 0.0 {
            return versions.keys().map(String::as_str).collect();
        }
        if total == 0 {
            return Vec::new();
        }

        versions
            .iter()
            .filter(|&(_, &count)| count as f64 / total as f64 * 100.0 >= threshold)
            .map(|(version, _)| version.as_str())
            .collect()
    }
}
