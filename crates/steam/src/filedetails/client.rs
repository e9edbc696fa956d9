#![forbid(unsafe_code)]

use super::response::Envelope;
use super::{BASE_URL, FileDetail, Query};
use crate::Error;
use crate::fetch::{
    ChunkFetcher, DEFAULT_CHUNK_MAX, FetchCoordinator, FetchOutcome, plan_chunks,
};
use crate::http::ensure_success;
use async_trait::async_trait;
use tracing::trace;

/// GetDetails client for any number of file IDs.
///
/// IDs are split into chunks of `chunk_max` and each chunk is one request.
/// When the query carries an app ID, every returned record is checked to be
/// consumed by that app.
#[derive(Debug, Clone)]
pub struct FileDetails {
    client: reqwest::Client,
    base_url: String,
    key: String,
    query: Query,
    chunk_max: usize,
    coordinator: FetchCoordinator,
}

impl FileDetails {
    pub fn new(client: reqwest::Client, key: impl Into<String>, query: Query) -> Self {
        Self {
            client,
            base_url: BASE_URL.to_owned(),
            key: key.into(),
            query,
            chunk_max: DEFAULT_CHUNK_MAX,
            coordinator: FetchCoordinator::default(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_chunk_max(mut self, chunk_max: usize) -> Self {
        self.chunk_max = chunk_max;
        self
    }

    pub fn with_coordinator(mut self, coordinator: FetchCoordinator) -> Self {
        self.coordinator = coordinator;
        self
    }

    pub fn set_key(&mut self, key: impl Into<String>) {
        self.key = key.into();
    }

    pub fn query(&self) -> &Query {
        &self.query
    }

    /// Fetch details chunk by chunk, stopping at the first failed request.
    pub async fn get(&self, ids: &[u64]) -> Result<FetchOutcome<FileDetail>, Error> {
        let chunks = plan_chunks(ids, self.chunk_max);
        let outcome = self
            .coordinator
            .run_sequential(&self.key, &chunks, self)
            .await?;
        Ok(self.check(outcome))
    }

    /// Fetch all chunks concurrently. Failed chunks are reported in the
    /// outcome and do not abort the others.
    pub async fn get_concurrent(&self, ids: &[u64]) -> Result<FetchOutcome<FileDetail>, Error> {
        let chunks = plan_chunks(ids, self.chunk_max);
        let outcome = self
            .coordinator
            .run_concurrent(&self.key, &chunks, self)
            .await?;
        Ok(self.check(outcome))
    }

    fn check(&self, mut outcome: FetchOutcome<FileDetail>) -> FetchOutcome<FileDetail> {
        if self.query.app_id != 0 {
            outcome.check_scope(self.query.app_id);
        }
        outcome
    }
}

#[async_trait]
impl ChunkFetcher for FileDetails {
    type Record = FileDetail;

    async fn fetch(&self, chunk: &[u64]) -> Result<Vec<FileDetail>, Error> {
        let response = self
            .client
            .get(&self.base_url)
            .query(&self.query.params(&self.key, chunk))
            .send()
            .await?;
        let body = ensure_success(response)?.bytes().await?;
        let envelope: Envelope = serde_json::from_slice(&body)?;

        let details = envelope.response.publishedfiledetails;
        trace!(requested = chunk.len(), received = details.len(), "file details chunk");
        Ok(details
            .into_iter()
            .map(FileDetail::with_default_url)
            .collect())
    }
}
