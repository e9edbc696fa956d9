#![forbid(unsafe_code)]

use crate::version::VersionMap;
use serde::{Deserialize, Deserializer, Serialize};
use serde_with::{DisplayFromStr, serde_as};

#[derive(Debug, Default, Deserialize)]
pub(crate) struct Envelope {
    #[serde(default)]
    pub response: Response,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct Response {
    #[serde(default)]
    pub servers: Vec<Server>,
}

/// A game server as reported by the master server.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Server {
    /// `ip:port` of the query port.
    pub addr: String,
    #[serde(rename = "gameport")]
    pub game_port: u16,
    #[serde_as(as = "DisplayFromStr")]
    #[serde(rename = "steamid")]
    pub steam_id: u64,
    pub name: String,
    #[serde(rename = "appid")]
    pub app_id: u64,
    #[serde(rename = "gamedir")]
    pub game_dir: String,
    pub version: String,
    pub product: String,
    pub region: i32,
    pub players: u16,
    pub max_players: u16,
    pub bots: u16,
    pub map: String,
    pub secure: bool,
    pub dedicated: bool,
    /// `l` for Linux, `w` for Windows.
    pub os: String,
    /// Server tags, sent as one comma separated string.
    #[serde(rename = "gametype", deserialize_with = "comma_separated")]
    pub game_type: Vec<String>,
}

fn comma_separated<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    let raw = String::deserialize(deserializer)?;
    if raw.is_empty() {
        return Ok(Vec::new());
    }
    Ok(raw.split(',').map(|tag| tag.trim().to_owned()).collect())
}

/// Count how many servers report each version.
pub fn version_map(servers: &[Server]) -> VersionMap {
    let mut versions = VersionMap::new();
    for server in servers {
        *versions.entry(server.version.clone()).or_default() += 1;
    }
    versions
}
