#![forbid(unsafe_code)]

use super::Notifier;
use crate::Error;
use crate::http::ensure_success;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, serde_as};
use tracing::debug;

pub const BASE_URL: &str = "https://discord.com";

/// Discord webhook client.
#[derive(Debug, Clone)]
pub struct Discord {
    client: reqwest::Client,
    base_url: String,
    webhook_id: String,
    webhook_token: String,
}

#[derive(Serialize)]
struct Message<'a> {
    content: &'a str,
}

#[serde_as]
#[derive(Deserialize)]
struct Created {
    #[serde_as(as = "DisplayFromStr")]
    id: u64,
}

impl Discord {
    pub fn new(
        client: reqwest::Client,
        webhook_id: impl Into<String>,
        webhook_token: impl Into<String>,
    ) -> Self {
        Self {
            client,
            base_url: BASE_URL.to_owned(),
            webhook_id: webhook_id.into(),
            webhook_token: webhook_token.into(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn webhook_url(&self) -> String {
        format!(
            "{}/api/webhooks/{}/{}",
            self.base_url, self.webhook_id, self.webhook_token
        )
    }

    fn message_url(&self, id: u64) -> String {
        format!("{}/messages/{id}", self.webhook_url())
    }
}

#[async_trait]
impl Notifier for Discord {
    async fn send(&self, message: &str) -> Result<u64, Error> {
        let response = self
            .client
            .post(self.webhook_url())
            .query(&[("wait", "true")])
            .json(&Message { content: message })
            .send()
            .await?;
        let body = ensure_success(response)?.bytes().await?;
        let created: Created = serde_json::from_slice(&body)?;

        debug!(id = created.id, "discord message sent");
        Ok(created.id)
    }

    async fn edit(&self, id: u64, message: &str) -> Result<(), Error> {
        let response = self
            .client
            .patch(self.message_url(id))
            .json(&Message { content: message })
            .send()
            .await?;
        ensure_success(response)?;
        Ok(())
    }

    async fn delete(&self, id: u64) -> Result<(), Error> {
        let response = self.client.delete(self.message_url(id)).send().await?;
        ensure_success(response)?;
        Ok(())
    }
}
