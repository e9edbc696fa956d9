#![forbid(unsafe_code)]

use super::Notifier;
use crate::Error;
use crate::http::ensure_success;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

pub const BASE_URL: &str = "https://api.telegram.org";

/// Telegram Bot API client posting to a single chat.
#[derive(Debug, Clone)]
pub struct Telegram {
    client: reqwest::Client,
    base_url: String,
    bot_token: String,
    chat_id: String,
}

#[derive(Debug, Serialize)]
struct Payload<'a> {
    chat_id: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    parse_mode: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    message_id: Option<u64>,
}

#[derive(Debug, Deserialize)]
struct Reply {
    ok: bool,
    #[serde(default)]
    description: Option<String>,
    /// A message object, or `true` for calls that only acknowledge.
    #[serde(default)]
    result: serde_json::Value,
}

impl Reply {
    fn check(self, method: &str) -> Result<serde_json::Value, Error> {
        if self.ok {
            return Ok(self.result);
        }
        let reason = self.description.unwrap_or_else(|| "no description".into());
        Err(Error::Notify(format!("telegram {method}: {reason}")))
    }
}

impl Telegram {
    pub fn new(
        client: reqwest::Client,
        bot_token: impl Into<String>,
        chat_id: impl Into<String>,
    ) -> Self {
        Self {
            client,
            base_url: BASE_URL.to_owned(),
            bot_token: bot_token.into(),
            chat_id: chat_id.into(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn method_url(&self, method: &str) -> String {
        format!("{}/bot{}/{method}", self.base_url, self.bot_token)
    }

    fn text<'a>(&'a self, text: &'a str, message_id: Option<u64>) -> Payload<'a> {
        Payload {
            chat_id: &self.chat_id,
            text: Some(text),
            parse_mode: Some("Markdown"),
            message_id,
        }
    }

    async fn call(&self, method: &str, payload: &Payload<'_>) -> Result<serde_json::Value, Error> {
        let response = self
            .client
            .post(self.method_url(method))
            .json(payload)
            .send()
            .await?;
        let body = ensure_success(response)?.bytes().await?;
        let reply: Reply = serde_json::from_slice(&body)?;
        reply.check(method)
    }
}

#[async_trait]
impl Notifier for Telegram {
    async fn send(&self, message: &str) -> Result<u64, Error> {
        let sent = self.call("sendMessage", &self.text(message, None)).await?;
        match sent["message_id"].as_u64() {
            Some(id) if id != 0 => {
                debug!(id, "telegram message sent");
                Ok(id)
            }
            _ => Err(Error::Notify("telegram sendMessage: missing message id".into())),
        }
    }

    async fn edit(&self, id: u64, message: &str) -> Result<(), Error> {
        self.call("editMessageText", &self.text(message, Some(id)))
            .await
            .map(drop)
    }

    async fn delete(&self, id: u64) -> Result<(), Error> {
        let payload = Payload {
            chat_id: &self.chat_id,
            text: None,
            parse_mode: None,
            message_id: Some(id),
        };
        self.call("deleteMessage", &payload).await.map(drop)
    }
}
