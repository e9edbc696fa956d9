#![forbid(unsafe_code)]

use crate::signals::SignalEvent;
use flume::SendError;
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Failed to install signal handler: {0}")]
    SignalHandler(#[source] io::Error),

    #[error("Failed to send signal event: {0}")]
    SendSignal(#[from] SendError<SignalEvent>),

    #[error(transparent)]
    Config(#[from] config::Error),

    #[error(transparent)]
    Steam(#[from] steam::Error),

    #[error("No Steam Web API key, set `api.key` or STEAM_API_KEY")]
    MissingKey,

    #[error("Fetch incomplete, {kept} record(s) kept: {source}")]
    Incomplete {
        kept: usize,
        #[source]
        source: steam::Error,
    },

    #[error("Failed to encode output: {0}")]
    Encode(#[from] serde_json::Error),
}
