#![forbid(unsafe_code)]

use crate::Error;
use crate::fetch::{ChunkFailure, ChunkFetcher, FetchOutcome};
use futures::future::join_all;
use parking_lot::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::Semaphore;
use tokio_util::sync::CancellationToken;
use tracing::{Instrument, debug, debug_span, warn};

/// Length of a Steam Web API key.
pub const API_KEY_LEN: usize = 32;

pub const DEFAULT_CONCURRENCY: usize = 10;

/// Drives one fetch per chunk through a [`ChunkFetcher`].
///
/// Two policies are offered:
///
/// * [`run_sequential`](Self::run_sequential) fetches one chunk at a time
///   and stops at the first failure, so a rejected key is not retried for
///   every remaining chunk.
/// * [`run_concurrent`](Self::run_concurrent) starts every chunk, keeps at
///   most `concurrency` fetches in flight and never lets one failure abort
///   the others. Failures are collected in the outcome and, when configured,
///   sent on a failure channel as they happen.
///
/// Once the cancellation token fires no new fetch is started. Fetches
/// already in flight run to completion.
#[derive(Debug, Clone)]
pub struct FetchCoordinator {
    concurrency: usize,
    cancel: CancellationToken,
    failures: Option<flume::Sender<ChunkFailure>>,
}

impl Default for FetchCoordinator {
    fn default() -> Self {
        Self::new(DEFAULT_CONCURRENCY)
    }
}

impl FetchCoordinator {
    /// A zero `concurrency` is raised to one.
    pub fn new(concurrency: usize) -> Self {
        Self {
            concurrency: concurrency.max(1),
            cancel: CancellationToken::new(),
            failures: None,
        }
    }

    pub fn with_cancellation(mut self, cancel: CancellationToken) -> Self {
        self.cancel = cancel;
        self
    }

    /// Send every chunk failure on `failures` as soon as it is observed.
    /// Failures that do not fit a bounded channel are only kept in the
    /// outcome.
    pub fn with_failure_channel(mut self, failures: flume::Sender<ChunkFailure>) -> Self {
        self.failures = Some(failures);
        self
    }

    pub fn concurrency(&self) -> usize {
        self.concurrency
    }

    /// Fetch chunks one by one, aborting at the first failure.
    ///
    /// Records fetched before the failure are kept in the outcome; chunks
    /// after it are counted as skipped.
    pub async fn run_sequential<F: ChunkFetcher>(
        &self,
        credential: &str,
        chunks: &[&[u64]],
        fetcher: &F,
    ) -> Result<FetchOutcome<F::Record>, Error> {
        Self::preflight(credential, chunks)?;

        let span = debug_span!("fetch", mode = "sequential", chunks = chunks.len());
        let outcome = self.sequential(chunks, fetcher).instrument(span).await;
        Ok(outcome)
    }

    /// Fetch all chunks concurrently, collecting failures instead of
    /// aborting.
    pub async fn run_concurrent<F: ChunkFetcher>(
        &self,
        credential: &str,
        chunks: &[&[u64]],
        fetcher: &F,
    ) -> Result<FetchOutcome<F::Record>, Error> {
        Self::preflight(credential, chunks)?;

        let span = debug_span!(
            "fetch",
            mode = "concurrent",
            chunks = chunks.len(),
            concurrency = self.concurrency
        );
        let outcome = self.concurrent(chunks, fetcher).instrument(span).await;
        Ok(outcome)
    }

    fn preflight(credential: &str, chunks: &[&[u64]]) -> Result<(), Error> {
        if credential.len() != API_KEY_LEN {
            return Err(Error::InvalidCredential {
                expected: API_KEY_LEN,
                actual: credential.len(),
            });
        }
        if chunks.is_empty() {
            return Err(Error::NoIdentifiers);
        }
        Ok(())
    }

    async fn sequential<F: ChunkFetcher>(
        &self,
        chunks: &[&[u64]],
        fetcher: &F,
    ) -> FetchOutcome<F::Record> {
        let mut outcome = FetchOutcome::default();

        for (index, chunk) in chunks.iter().enumerate() {
            if self.cancel.is_cancelled() {
                outcome.skipped = chunks.len() - index;
                debug!(skipped = outcome.skipped, "fetch cancelled");
                break;
            }

            match fetcher.fetch(chunk).await {
                Ok(batch) => outcome.records.extend(batch),
                Err(err) => {
                    outcome.failures.push(self.report(index, chunk, err));
                    outcome.skipped = chunks.len() - index - 1;
                    break;
                }
            }
        }

        debug!(
            records = outcome.records.len(),
            skipped = outcome.skipped,
            "sequential fetch finished"
        );
        outcome
    }

    async fn concurrent<F: ChunkFetcher>(
        &self,
        chunks: &[&[u64]],
        fetcher: &F,
    ) -> FetchOutcome<F::Record> {
        let semaphore = Semaphore::new(self.concurrency);
        let records = Mutex::new(Vec::new());
        let failures = Mutex::new(Vec::new());
        let skipped = AtomicUsize::new(0);

        let tasks = chunks.iter().enumerate().map(|(index, chunk)| {
            let semaphore = &semaphore;
            let records = &records;
            let failures = &failures;
            let skipped = &skipped;

            async move {
                let permit = tokio::select! {
                    biased;
                    _ = self.cancel.cancelled() => None,
                    permit = semaphore.acquire() => permit.ok(),
                };
                let Some(permit) = permit else {
                    skipped.fetch_add(1, Ordering::Relaxed);
                    return;
                };

                let result = fetcher.fetch(chunk).await;
                drop(permit);

                match result {
                    Ok(batch) => records.lock().extend(batch),
                    Err(err) => {
                        let failure = self.report(index, chunk, err);
                        failures.lock().push(failure);
                    }
                }
            }
        });
        join_all(tasks).await;

        let mut failures = failures.into_inner();
        failures.sort_by_key(|failure| failure.index);
        let outcome = FetchOutcome {
            records: records.into_inner(),
            failures,
            mismatches: Vec::new(),
            skipped: skipped.into_inner(),
        };

        debug!(
            records = outcome.records.len(),
            failed = outcome.failures.len(),
            skipped = outcome.skipped,
            "concurrent fetch finished"
        );
        outcome
    }

    /// Log the failure and offer it to the failure channel. A full or closed
    /// channel never stalls the fetch; the failure is still in the outcome.
    fn report(&self, index: usize, chunk: &[u64], error: Error) -> ChunkFailure {
        let failure = ChunkFailure::new(index, chunk, error);
        warn!(index, ids = chunk.len(), error = %failure.error, "chunk fetch failed");

        if let Some(tx) = &self.failures {
            match tx.try_send(failure.clone()) {
                Ok(()) => {}
                Err(flume::TrySendError::Full(_)) => {
                    debug!(index, "failure channel full, report dropped");
                }
                Err(flume::TrySendError::Disconnected(_)) => debug!("failure channel closed"),
            }
        }
        failure
    }
}
