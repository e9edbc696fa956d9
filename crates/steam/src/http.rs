#![forbid(unsafe_code)]

use crate::Error;
use std::time::Duration;

/// Build the HTTP client shared by all API wrappers.
pub fn client(timeout: Duration) -> Result<reqwest::Client, Error> {
    let client = reqwest::Client::builder()
        .timeout(timeout)
        .user_agent(concat!("steam-rs/", env!("CARGO_PKG_VERSION")))
        .build()?;
    Ok(client)
}

/// Turn a non-success status into [`Error::Status`].
pub(crate) fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, Error> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(Error::Status(status))
    }
}
