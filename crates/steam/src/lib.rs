#![forbid(unsafe_code)]

pub mod appid;
mod error;
pub mod fetch;
pub mod filedetails;
mod http;
pub mod notify;
pub mod serverlist;
pub mod version;

pub use error::Error;
pub use http::client as http_client;
