use serde::{Deserialize, Serialize};

use crate::serde_impl::null_as_default;

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq, Hash)]
#[serde(default, rename_all = "camelCase")]
pub struct PlaybackTracking {
    #[serde(deserialize_with = "null_as_default")]
    pub videostats_playback_url: TrackingUrl,
    #[serde(deserialize_with = "null_as_default")]
    pub videostats_delayplay_url: TrackingUrl,
    #[serde(deserialize_with = "null_as_default")]
    pub videostats_watchtime_url: TrackingUrl,
    #[serde(deserialize_with = "null_as_default")]
    pub ptracking_url: TrackingUrl,
    #[serde(deserialize_with = "null_as_default")]
    pub qoe_url: TrackingUrl,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq, Hash)]
#[serde(default, rename_all = "camelCase")]
pub struct TrackingUrl {
    #[serde(deserialize_with = "null_as_default")]
    pub base_url: String,
    #[serde(deserialize_with = "null_as_default")]
    pub headers: Vec<TrackingUrlHeader>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq, Hash)]
#[serde(default, rename_all = "camelCase")]
pub struct TrackingUrlHeader {
    /// i.e. `USER_AUTH`, `VISITOR_ID`, `PLUS_PAGE_ID`
    #[serde(deserialize_with = "null_as_default")]
    pub header_type: String,
}
