//! All the types that hold the answer of the player endpoint.

use serde::{Deserialize, Serialize};

use crate::serde_impl::null_as_default;

use playability_status::PlayabilityStatus;
use playback_tracking::PlaybackTracking;
use player_config::PlayerConfig;
use streaming_data::StreamingData;
use video_details::VideoDetails;

pub mod playability_status;
pub mod playback_tracking;
pub mod player_config;
pub mod streaming_data;
pub mod video_details;

/// One answer of the player endpoint for one video id.
///
/// Every section defaults to its empty value when upstream leaves it out, so a response for
/// an unplayable video still deserializes; check [`PlayabilityStatus::status`] to find out
/// whether there is anything to play.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct PlayerResponse {
    #[serde(deserialize_with = "null_as_default")]
    pub response_context: ResponseContext,
    #[serde(deserialize_with = "null_as_default")]
    pub playability_status: PlayabilityStatus,
    #[serde(deserialize_with = "null_as_default")]
    pub streaming_data: StreamingData,
    #[serde(deserialize_with = "null_as_default")]
    pub playback_tracking: PlaybackTracking,
    #[serde(deserialize_with = "null_as_default")]
    pub video_details: VideoDetails,
    #[serde(deserialize_with = "null_as_default")]
    pub player_config: PlayerConfig,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq, Hash)]
#[serde(default, rename_all = "camelCase")]
pub struct ResponseContext {
    /// Opaque visitor token.
    #[serde(deserialize_with = "null_as_default")]
    pub visitor_data: String,
}

/// Deserializes a raw body of the player endpoint.
///
/// ### Errors
/// When the body is not JSON, or when a known key holds a value of the wrong type. Missing and
/// unknown keys are not errors.
pub fn parse_player_response(body: &[u8]) -> crate::Result<PlayerResponse> {
    Ok(serde_json::from_slice(body)?)
}
