#![forbid(unsafe_code)]

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Notify {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discord: Option<Discord>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub telegram: Option<Telegram>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Discord {
    pub webhook_id: String,
    pub webhook_token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Telegram {
    pub bot_token: String,
    pub chat_id: String,
}
