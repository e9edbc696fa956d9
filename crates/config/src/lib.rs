#![forbid(unsafe_code)]

mod api;
mod consensus;
mod error;
mod fetch;
mod fetch_mode;
mod notify;
mod serverlist;

pub use api::Api;
pub use consensus::Consensus;
pub use error::Error;
pub use fetch::Fetch;
pub use fetch_mode::FetchMode;
pub use notify::{Discord, Notify, Telegram};
pub use serverlist::ServerList;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub api: Api,
    pub fetch: Fetch,
    pub consensus: Consensus,
    pub serverlist: ServerList,
    pub notify: Notify,
}

impl Config {
    /// Defaults overlaid with the environment.
    pub fn new() -> Result<Self, Error> {
        Self::extract(Self::base())
    }

    /// Defaults, then the TOML file at `path`, then the environment.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(Error::InvalidPath(path.to_owned()));
        }
        let figment = Figment::from(Serialized::defaults(Self::default()))
            .merge(Toml::file(path))
            .merge(Self::env());
        Self::extract(figment)
    }

    /// Render the configuration as a TOML document.
    pub fn to_toml(&self) -> Result<String, Error> {
        Ok(toml_edit::ser::to_string_pretty(self)?)
    }

    fn base() -> Figment {
        Figment::from(Serialized::defaults(Self::default())).merge(Self::env())
    }

    fn env() -> Figment {
        // `STEAM_FETCH__CONCURRENCY=4` -> `fetch.concurrency`
        Figment::new()
            .merge(Env::prefixed("STEAM_").split("__").ignore(&["api_key"]))
            .merge(Env::raw().only(&["steam_api_key"]).map(|_| "api.key".into()))
    }

    fn extract(figment: Figment) -> Result<Self, Error> {
        let config: Self = figment.extract()?;
        config.consensus.validate()?;
        Ok(config)
    }
}
