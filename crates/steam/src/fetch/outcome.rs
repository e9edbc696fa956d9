#![forbid(unsafe_code)]

use crate::Error;
use crate::fetch::Scoped;
use std::fmt;
use std::sync::Arc;

/// A chunk whose fetch returned an error.
#[derive(Debug, Clone)]
pub struct ChunkFailure {
    /// Position of the chunk in the plan.
    pub index: usize,
    pub ids: Vec<u64>,
    pub error: Arc<Error>,
}

impl ChunkFailure {
    pub(crate) fn new(index: usize, ids: &[u64], error: Error) -> Self {
        Self {
            index,
            ids: ids.to_vec(),
            error: Arc::new(error),
        }
    }
}

/// A record whose scope differs from the one requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScopeMismatch {
    pub record: u64,
    pub expected: u64,
    pub actual: u64,
}

impl From<ScopeMismatch> for Error {
    fn from(mismatch: ScopeMismatch) -> Self {
        Error::ScopeMismatch {
            record: mismatch.record,
            expected: mismatch.expected,
            actual: mismatch.actual,
        }
    }
}

/// Everything a bulk fetch produced.
///
/// Records are in completion order. A fetch is complete only when no chunk
/// failed, none was skipped and no record failed the scope check.
#[derive(Debug)]
pub struct FetchOutcome<R> {
    pub records: Vec<R>,
    pub failures: Vec<ChunkFailure>,
    pub mismatches: Vec<ScopeMismatch>,
    /// Chunks never attempted, after a fail-fast abort or a cancellation.
    pub skipped: usize,
}

impl<R> Default for FetchOutcome<R> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            failures: Vec::new(),
            mismatches: Vec::new(),
            skipped: 0,
        }
    }
}

impl<R> FetchOutcome<R> {
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty() && self.mismatches.is_empty() && self.skipped == 0
    }

    /// The error describing why the fetch is not complete, if it is not.
    ///
    /// Chunk failures take precedence over scope mismatches, which take
    /// precedence over skipped chunks.
    pub fn error(&self) -> Option<Error> {
        if let Some(failure) = self.failures.first() {
            return Some(Error::ChunkFailed {
                index: failure.index,
                source: Arc::clone(&failure.error),
            });
        }
        if let Some(mismatch) = self.mismatches.first() {
            return Some((*mismatch).into());
        }
        (self.skipped > 0).then_some(Error::Cancelled {
            skipped: self.skipped,
        })
    }

    /// `Ok` with every record for a complete fetch, otherwise the records
    /// that were fetched together with the reason.
    pub fn into_result(self) -> Result<Vec<R>, PartialFetch<R>> {
        match self.error() {
            None => Ok(self.records),
            Some(error) => Err(PartialFetch {
                failed_chunks: self.failures.len(),
                records: self.records,
                error,
            }),
        }
    }
}

impl<R: Scoped> FetchOutcome<R> {
    /// Record every fetched record whose scope differs from `expected`.
    /// Records are kept either way.
    pub fn check_scope(&mut self, expected: u64) {
        let mismatches = self
            .records
            .iter()
            .filter(|record| record.scope() != expected)
            .map(|record| ScopeMismatch {
                record: record.id(),
                expected,
                actual: record.scope(),
            });
        self.mismatches.extend(mismatches);
    }
}

/// Records from an incomplete fetch.
#[derive(Debug)]
pub struct PartialFetch<R> {
    pub records: Vec<R>,
    pub failed_chunks: usize,
    pub error: Error,
}

impl<R> fmt::Display for PartialFetch<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "partial fetch ({} records kept, {} chunk(s) failed)",
            self.records.len(),
            self.failed_chunks
        )
    }
}

impl<R: fmt::Debug> std::error::Error for PartialFetch<R> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    #[derive(Debug)]
    struct Item {
        id: u64,
        app: u64,
    }

    impl Scoped for Item {
        fn id(&self) -> u64 {
            self.id
        }

        fn scope(&self) -> u64 {
            self.app
        }
    }

    #[test]
    fn complete_outcome_yields_records() {
        let outcome = FetchOutcome {
            records: vec![1, 2, 3],
            ..Default::default()
        };
        assert!(outcome.is_complete());
        assert_eq!(outcome.into_result().unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn failure_keeps_records() {
        let outcome = FetchOutcome {
            records: vec![1, 2],
            failures: vec![ChunkFailure::new(
                3,
                &[7, 8],
                Error::Status(StatusCode::FORBIDDEN),
            )],
            skipped: 1,
            ..Default::default()
        };

        let partial = outcome.into_result().unwrap_err();
        assert_eq!(partial.records, vec![1, 2]);
        assert_eq!(partial.failed_chunks, 1);
        assert!(matches!(partial.error, Error::ChunkFailed { index: 3, .. }));
        assert!(partial.error.is_transport());
    }

    #[test]
    fn scope_mismatch_is_reported_with_data() {
        let mut outcome = FetchOutcome {
            records: vec![Item { id: 1, app: 221100 }, Item { id: 2, app: 107410 }],
            ..Default::default()
        };
        outcome.check_scope(221100);

        assert_eq!(
            outcome.mismatches,
            vec![ScopeMismatch {
                record: 2,
                expected: 221100,
                actual: 107410
            }]
        );
        let partial = outcome.into_result().unwrap_err();
        assert_eq!(partial.records.len(), 2);
        assert!(matches!(partial.error, Error::ScopeMismatch { record: 2, .. }));
    }

    #[test]
    fn skipped_chunks_mean_cancelled() {
        let outcome: FetchOutcome<u64> = FetchOutcome {
            skipped: 4,
            ..Default::default()
        };
        assert!(matches!(outcome.error(), Some(Error::Cancelled { skipped: 4 })));
    }
}
