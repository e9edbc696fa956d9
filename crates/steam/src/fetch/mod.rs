#![forbid(unsafe_code)]

mod chunk;
mod coordinator;
mod fetcher;
mod outcome;

pub use chunk::{DEFAULT_CHUNK_MAX, plan_chunks};
pub use coordinator::{API_KEY_LEN, DEFAULT_CONCURRENCY, FetchCoordinator};
pub use fetcher::{ChunkFetcher, Scoped};
pub use outcome::{ChunkFailure, FetchOutcome, PartialFetch, ScopeMismatch};
