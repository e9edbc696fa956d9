#![forbid(unsafe_code)]

//! Send, edit and delete status messages on chat platforms.

mod discord;
mod telegram;

pub use discord::Discord;
pub use telegram::Telegram;

use crate::Error;
use async_trait::async_trait;

#[async_trait]
pub trait Notifier: Send + Sync {
    /// Post a new message and return its platform ID.
    async fn send(&self, message: &str) -> Result<u64, Error>;

    async fn edit(&self, id: u64, message: &str) -> Result<(), Error>;

    async fn delete(&self, id: u64) -> Result<(), Error>;
}
