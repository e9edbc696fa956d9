#![forbid(unsafe_code)]

use super::BASE_FILE_URL;
use crate::fetch::Scoped;
use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, TimestampSeconds, serde_as};
use std::time::SystemTime;

#[derive(Debug, Default, Deserialize)]
pub(crate) struct Envelope {
    #[serde(default)]
    pub response: Response,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct Response {
    #[serde(default)]
    pub publishedfiledetails: Vec<FileDetail>,
}

/// Details of a file (mod, guide, screenshot, ...) published in the
/// Steam Workshop.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileDetail {
    #[serde_as(as = "DisplayFromStr")]
    #[serde(rename = "publishedfileid")]
    pub published_file_id: u64,
    /// Result code for this item, 1 is OK.
    pub result: i32,
    pub title: String,
    #[serde(rename = "file_description")]
    pub description: String,
    pub filename: String,
    pub url: String,
    pub preview_url: String,
    #[serde(rename = "youtubevideoid")]
    pub youtube_video_id: String,
    pub app_name: String,

    #[serde_as(as = "DisplayFromStr")]
    pub creator: u64,
    #[serde(rename = "creator_appid")]
    pub creator_app_id: u64,
    #[serde(rename = "consumer_appid")]
    pub consumer_app_id: u64,
    #[serde(rename = "consumer_shortcutid")]
    pub consumer_shortcut_id: i64,

    #[serde_as(as = "Option<TimestampSeconds<i64>>")]
    pub time_created: Option<SystemTime>,
    #[serde_as(as = "Option<TimestampSeconds<i64>>")]
    pub time_updated: Option<SystemTime>,

    #[serde_as(as = "DisplayFromStr")]
    pub file_size: u64,
    #[serde_as(as = "DisplayFromStr")]
    pub preview_file_size: u64,
    #[serde_as(as = "DisplayFromStr")]
    pub hcontent_file: u64,
    #[serde_as(as = "DisplayFromStr")]
    pub hcontent_preview: u64,
    #[serde_as(as = "DisplayFromStr")]
    pub banner: u64,
    pub file_type: i32,
    pub image_width: u32,
    pub image_height: u32,
    pub language: i32,
    pub visibility: i32,
    pub flags: i64,
    pub revision: i32,
    #[serde_as(as = "DisplayFromStr")]
    pub revision_change_number: u64,

    pub subscriptions: u64,
    pub favorited: u64,
    pub followers: u64,
    pub lifetime_subscriptions: u64,
    pub lifetime_favorited: u64,
    pub lifetime_followers: u64,
    #[serde_as(as = "DisplayFromStr")]
    pub lifetime_playtime: u64,
    #[serde_as(as = "DisplayFromStr")]
    pub lifetime_playtime_sessions: u64,
    pub views: u64,
    pub num_children: u32,
    pub num_reports: u32,
    pub num_comments_public: u32,

    pub banned: bool,
    pub ban_reason: String,
    pub ban_text_check_result: i32,
    pub can_be_deleted: bool,
    pub can_subscribe: bool,
    pub show_subscribe_all: bool,
    pub workshop_file: bool,
    pub workshop_accepted: bool,
    pub maybe_inappropriate_sex: bool,
    pub maybe_inappropriate_violence: bool,

    pub children: Vec<Child>,
    #[serde(rename = "kvtags")]
    pub kv_tags: Vec<KvTag>,
    pub previews: Vec<Preview>,
    pub reactions: Vec<Reaction>,
    pub tags: Vec<Tag>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vote_data: Option<VoteData>,
}

impl FileDetail {
    /// Fill in the community page URL when the API left it empty.
    pub(crate) fn with_default_url(mut self) -> Self {
        if self.url.is_empty() {
            self.url = format!("{BASE_FILE_URL}{}", self.published_file_id);
        }
        self
    }
}

impl Scoped for FileDetail {
    fn id(&self) -> u64 {
        self.published_file_id
    }

    fn scope(&self) -> u64 {
        self.consumer_app_id
    }
}

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Child {
    #[serde_as(as = "DisplayFromStr")]
    #[serde(rename = "publishedfileid")]
    pub published_file_id: u64,
    pub file_type: i32,
    #[serde(rename = "sortorder")]
    pub sort_order: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KvTag {
    pub key: String,
    pub value: String,
}

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Preview {
    #[serde_as(as = "DisplayFromStr")]
    #[serde(rename = "previewid")]
    pub preview_id: u64,
    #[serde(rename = "sortorder")]
    pub sort_order: i32,
    pub url: String,
    pub size: u64,
    pub filename: String,
    pub preview_type: i32,
    #[serde(rename = "youtubevideoid")]
    pub youtube_video_id: String,
    pub external_reference: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Reaction {
    #[serde(rename = "reactionid")]
    pub reaction_id: u32,
    pub count: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tag {
    pub tag: String,
    pub display_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VoteData {
    pub score: f64,
    pub votes_up: u64,
    pub votes_down: u64,
}
