#![forbid(unsafe_code)]

use crate::Error;
use async_trait::async_trait;

#[async_trait]
pub trait ChunkFetcher: Send + Sync {
    type Record: Send;

    /// Fetch the records for one chunk of identifiers.
    async fn fetch(&self, chunk: &[u64]) -> Result<Vec<Self::Record>, Error>;
}

/// A record that can be checked against the scope it was requested for.
pub trait Scoped {
    fn id(&self) -> u64;

    fn scope(&self) -> u64;
}
