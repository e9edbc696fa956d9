#![forbid(unsafe_code)]

use super::response::Envelope;
use super::{BASE_URL, Filter, Server};
use crate::Error;
use crate::http::ensure_success;
use tracing::debug;

/// Servers returned by one request unless overridden.
pub const DEFAULT_LIMIT: u32 = 10_000;

#[derive(Debug, Clone)]
pub struct ServerList {
    client: reqwest::Client,
    base_url: String,
    key: String,
    limit: u32,
}

impl ServerList {
    pub fn new(client: reqwest::Client, key: impl Into<String>) -> Self {
        Self {
            client,
            base_url: BASE_URL.to_owned(),
            key: key.into(),
            limit: DEFAULT_LIMIT,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    pub fn set_key(&mut self, key: impl Into<String>) {
        self.key = key.into();
    }

    /// List servers matching `filter`.
    pub async fn get(&self, filter: &Filter) -> Result<Vec<Server>, Error> {
        let filter = filter.build()?;
        let limit = self.limit.to_string();
        let params = [
            ("key", self.key.as_str()),
            ("filter", filter.as_str()),
            ("format", "json"),
            ("limit", limit.as_str()),
        ];

        let response = self
            .client
            .get(&self.base_url)
            .query(&params)
            .send()
            .await?;
        let body = ensure_success(response)?.bytes().await?;
        let envelope: Envelope = serde_json::from_slice(&body)?;

        debug!(
            filter = %filter,
            servers = envelope.response.servers.len(),
            "server list fetched"
        );
        Ok(envelope.response.servers)
    }
}
