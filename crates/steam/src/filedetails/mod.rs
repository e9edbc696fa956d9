#![forbid(unsafe_code)]

//! Workshop file metadata through `IPublishedFileService/GetDetails`.
//!
//! See <https://steamapi.xpaw.me/#IPublishedFileService/GetDetails>.

mod client;
mod query;
mod response;

pub use client::FileDetails;
pub use query::Query;
pub use response::{Child, FileDetail, KvTag, Preview, Reaction, Tag, VoteData};

pub(crate) const BASE_URL: &str =
    "https://api.steampowered.com/IPublishedFileService/GetDetails/v1/";

pub(crate) const BASE_FILE_URL: &str = "https://steamcommunity.com/sharedfiles/filedetails/?id=";
