#![forbid(unsafe_code)]

//! Game server listing through `IGameServersService/GetServerList`.
//!
//! Filters follow the Master Server Query Protocol, see
//! <https://developer.valvesoftware.com/wiki/Master_Server_Query_Protocol>.

mod client;
mod filter;
mod response;

pub use client::{DEFAULT_LIMIT, ServerList};
pub use filter::{Filter, FilterKey};
pub use response::{Server, version_map};

pub(crate) const BASE_URL: &str =
    "https://api.steampowered.com/IGameServersService/GetServerList/v1/";
