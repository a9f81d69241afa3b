use serde::{Deserialize, Serialize};

use crate::serde_impl::null_as_default;

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq, Hash)]
#[serde(default, rename_all = "camelCase")]
pub struct VideoDetails {
    #[serde(deserialize_with = "null_as_default")]
    pub video_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    /// Duration in seconds, kept in upstream's string encoding.
    #[serde(deserialize_with = "null_as_default")]
    pub length_seconds: String,
    #[serde(deserialize_with = "null_as_default")]
    pub keywords: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub channel_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub is_owner_viewing: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub short_description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub is_crawlable: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub thumbnail: ThumbnailList,
    #[serde(deserialize_with = "null_as_default")]
    pub allow_ratings: bool,
    /// Kept in upstream's string encoding.
    #[serde(deserialize_with = "null_as_default")]
    pub view_count: String,
    #[serde(deserialize_with = "null_as_default")]
    pub author: String,
    #[serde(deserialize_with = "null_as_default")]
    pub is_private: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub is_unplugged_corpus: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub is_live_content: bool,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq, Hash)]
#[serde(default)]
pub struct ThumbnailList {
    /// Ordered by increasing resolution, as upstream sends them.
    #[serde(deserialize_with = "null_as_default")]
    pub thumbnails: Vec<Thumbnail>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq, Hash)]
#[serde(default)]
pub struct Thumbnail {
    /// a absolute or relative url
    #[serde(deserialize_with = "null_as_default")]
    pub url: String,
    #[serde(deserialize_with = "null_as_default")]
    pub width: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub height: i64,
}

impl ThumbnailList {
    /// The last, and therefore largest, thumbnail.
    pub fn largest(&self) -> Option<&Thumbnail> {
        self.thumbnails.last()
    }
}
