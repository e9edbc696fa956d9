#![forbid(unsafe_code)]

use async_trait::async_trait;
use pretty_assertions::assert_eq;
use reqwest::StatusCode;
use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use steam::Error;
use steam::fetch::{ChunkFetcher, FetchCoordinator, plan_chunks};
use tokio_util::sync::CancellationToken;

const KEY: &str = "0123456789ABCDEF0123456789ABCDEF";

/// Echoes the chunk back after a delay, tracking calls and concurrency.
#[derive(Default)]
struct Probe {
    delay: Duration,
    /// Chunks whose first ID is listed here fail.
    fail: HashSet<u64>,
    /// Cancelled on the first call, when set.
    cancel_on_call: Option<CancellationToken>,
    calls: AtomicUsize,
    in_flight: AtomicUsize,
    peak: AtomicUsize,
}

impl Probe {
    fn delayed(ms: u64) -> Self {
        Self {
            delay: Duration::from_millis(ms),
            ..Default::default()
        }
    }

    fn failing(mut self, first_ids: impl IntoIterator<Item = u64>) -> Self {
        self.fail.extend(first_ids);
        self
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn peak(&self) -> usize {
        self.peak.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ChunkFetcher for Probe {
    type Record = u64;

    async fn fetch(&self, chunk: &[u64]) -> Result<Vec<u64>, Error> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(cancel) = &self.cancel_on_call {
            cancel.cancel();
        }

        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak.fetch_max(now, Ordering::SeqCst);
        tokio::time::sleep(self.delay).await;
        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        if self.fail.contains(&chunk[0]) {
            return Err(Error::Status(StatusCode::BAD_GATEWAY));
        }
        Ok(chunk.to_vec())
    }
}

fn ids(n: u64) -> Vec<u64> {
    (1..=n).collect()
}

fn sorted(mut v: Vec<u64>) -> Vec<u64> {
    v.sort_unstable();
    v
}

#[tokio::test(start_paused = true)]
async fn concurrent_fetch_respects_limit() {
    let ids = ids(200);
    let chunks = plan_chunks(&ids, 10);
    let probe = Probe::delayed(100);

    let outcome = FetchCoordinator::new(4)
        .run_concurrent(KEY, &chunks, &probe)
        .await
        .unwrap();

    assert!(outcome.is_complete());
    assert_eq!(probe.calls(), 20);
    assert_eq!(probe.peak(), 4);
    assert_eq!(sorted(outcome.records), ids);
}

#[tokio::test(start_paused = true)]
async fn zero_concurrency_runs_one_at_a_time() {
    let ids = ids(30);
    let chunks = plan_chunks(&ids, 10);
    let probe = Probe::delayed(10);

    let coordinator = FetchCoordinator::new(0);
    assert_eq!(coordinator.concurrency(), 1);
    let outcome = coordinator.run_concurrent(KEY, &chunks, &probe).await.unwrap();

    assert!(outcome.is_complete());
    assert_eq!(probe.peak(), 1);
}

#[tokio::test(start_paused = true)]
async fn concurrent_failures_do_not_abort_others() {
    let ids = ids(100);
    let chunks = plan_chunks(&ids, 10);
    // Chunks 1, 4 and 9.
    let probe = Probe::delayed(50).failing([11, 41, 91]);
    let (tx, rx) = flume::unbounded();

    let outcome = FetchCoordinator::new(3)
        .with_failure_channel(tx)
        .run_concurrent(KEY, &chunks, &probe)
        .await
        .unwrap();

    assert_eq!(probe.calls(), 10);
    assert!(!outcome.is_complete());
    assert_eq!(outcome.skipped, 0);
    assert_eq!(outcome.records.len(), 70);

    let failed: Vec<_> = outcome.failures.iter().map(|f| f.index).collect();
    assert_eq!(failed, vec![1, 4, 9]);
    assert_eq!(outcome.failures[0].ids, (11..=20).collect::<Vec<_>>());
    assert!(outcome.failures.iter().all(|f| f.error.is_transport()));

    let mut reported: Vec<_> = rx.drain().map(|f| f.index).collect();
    reported.sort_unstable();
    assert_eq!(reported, failed);

    let expected: Vec<_> = ids
        .iter()
        .copied()
        .filter(|id| !matches!(id, 11..=20 | 41..=50 | 91..=100))
        .collect();
    let partial = outcome.into_result().unwrap_err();
    assert_eq!(partial.failed_chunks, 3);
    assert!(matches!(partial.error, Error::ChunkFailed { index: 1, .. }));
    assert_eq!(sorted(partial.records), expected);
}

#[tokio::test(start_paused = true)]
async fn sequential_fetch_stops_at_first_failure() {
    let ids = ids(50);
    let chunks = plan_chunks(&ids, 10);
    let probe = Probe::delayed(5).failing([21]);

    let outcome = FetchCoordinator::default()
        .run_sequential(KEY, &chunks, &probe)
        .await
        .unwrap();

    assert_eq!(probe.calls(), 3);
    assert_eq!(probe.peak(), 1);
    assert_eq!(outcome.records, (1..=20).collect::<Vec<_>>());
    assert_eq!(outcome.failures.len(), 1);
    assert_eq!(outcome.failures[0].index, 2);
    assert_eq!(outcome.skipped, 2);

    let partial = outcome.into_result().unwrap_err();
    assert_eq!(partial.records.len(), 20);
    assert!(matches!(partial.error, Error::ChunkFailed { index: 2, .. }));
}

#[tokio::test(start_paused = true)]
async fn sequential_fetch_keeps_chunk_order() {
    let ids = ids(95);
    let chunks = plan_chunks(&ids, 20);
    let probe = Probe::delayed(1);

    let records = FetchCoordinator::default()
        .run_sequential(KEY, &chunks, &probe)
        .await
        .unwrap()
        .into_result()
        .unwrap();

    assert_eq!(probe.calls(), 5);
    assert_eq!(records, ids);
}

#[tokio::test]
async fn preflight_rejects_before_fetching() {
    let ids = ids(10);
    let chunks = plan_chunks(&ids, 5);
    let probe = Probe::default();
    let coordinator = FetchCoordinator::default();

    let err = coordinator
        .run_concurrent("short", &chunks, &probe)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        Error::InvalidCredential {
            expected: 32,
            actual: 5
        }
    ));

    let err = coordinator
        .run_sequential(KEY, &[], &probe)
        .await
        .unwrap_err();
    assert!(matches!(err, Error::NoIdentifiers));

    let err = coordinator
        .run_concurrent(KEY, &[], &probe)
        .await
        .unwrap_err();
    assert!(matches!(err, Error::NoIdentifiers));

    assert_eq!(probe.calls(), 0);
}

#[tokio::test(start_paused = true)]
async fn cancelled_before_start_fetches_nothing() {
    let ids = ids(40);
    let chunks = plan_chunks(&ids, 10);
    let probe = Probe::delayed(10);
    let cancel = CancellationToken::new();
    cancel.cancel();
    let coordinator = FetchCoordinator::new(2).with_cancellation(cancel);

    let outcome = coordinator.run_concurrent(KEY, &chunks, &probe).await.unwrap();
    assert_eq!(outcome.skipped, 4);
    assert!(outcome.records.is_empty());

    let outcome = coordinator.run_sequential(KEY, &chunks, &probe).await.unwrap();
    assert_eq!(outcome.skipped, 4);
    assert!(matches!(outcome.error(), Some(Error::Cancelled { skipped: 4 })));

    assert_eq!(probe.calls(), 0);
}

#[tokio::test(start_paused = true)]
async fn cancelling_mid_fetch_skips_pending_chunks() {
    let ids = ids(100);
    let chunks = plan_chunks(&ids, 10);
    let cancel = CancellationToken::new();
    let probe = Probe {
        cancel_on_call: Some(cancel.clone()),
        ..Probe::delayed(10)
    };

    let outcome = FetchCoordinator::new(2)
        .with_cancellation(cancel)
        .run_concurrent(KEY, &chunks, &probe)
        .await
        .unwrap();

    // In-flight fetches complete; nothing new starts.
    let calls = probe.calls();
    assert!((1..=2).contains(&calls));
    assert_eq!(calls + outcome.skipped, 10);
    assert_eq!(outcome.records.len(), calls * 10);
    assert!(outcome.failures.is_empty());
    assert!(matches!(outcome.into_result().unwrap_err().error, Error::Cancelled { .. }));
}

#[tokio::test(start_paused = true)]
async fn cancelling_sequential_fetch_keeps_earlier_records() {
    let ids = ids(30);
    let chunks = plan_chunks(&ids, 10);
    let cancel = CancellationToken::new();
    let probe = Probe {
        cancel_on_call: Some(cancel.clone()),
        ..Probe::delayed(10)
    };

    let outcome = FetchCoordinator::default()
        .with_cancellation(cancel)
        .run_sequential(KEY, &chunks, &probe)
        .await
        .unwrap();

    assert_eq!(probe.calls(), 1);
    assert_eq!(outcome.records, (1..=10).collect::<Vec<_>>());
    assert_eq!(outcome.skipped, 2);
}

#[tokio::test(start_paused = true)]
async fn full_failure_channel_does_not_stall_fetch() {
    let ids = ids(30);
    let chunks = plan_chunks(&ids, 10);
    let probe = Probe::delayed(10).failing([1, 11, 21]);
    let (tx, rx) = flume::bounded(1);

    for sequential in [false, true] {
        let coordinator = FetchCoordinator::new(3).with_failure_channel(tx.clone());
        let run = async {
            if sequential {
                coordinator.run_sequential(KEY, &chunks, &probe).await
            } else {
                coordinator.run_concurrent(KEY, &chunks, &probe).await
            }
        };
        let outcome = tokio::time::timeout(Duration::from_secs(5), run)
            .await
            .expect("fetch stalled on a full failure channel")
            .unwrap();

        let expected = if sequential { 1 } else { 3 };
        assert_eq!(outcome.failures.len(), expected);
        assert!(outcome.records.is_empty());
    }

    // Only the first report fit; the receiver was never drained.
    assert_eq!(rx.len(), 1);
}
