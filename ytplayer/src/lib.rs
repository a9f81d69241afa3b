#![warn(rust_2018_idioms, unreachable_pub)]

//! A client for the YouTube internal player API.
//!
//! One call to [`fetch_player_response`] posts the video id to the `youtubei/v1/player`
//! endpoint with a fixed Android client identity, and deserializes the answer into a
//! [`PlayerResponse`]:
//!```no_run
//!# #[tokio::main]
//!# async fn main() -> Result<(), ytplayer::Error> {
//! let response = ytplayer::fetch_player_response("dQw4w9WgXcQ").await?;
//! for format in &response.streaming_data.formats {
//!     println!("{} {}", format.itag, format.url);
//! }
//!# Ok(())
//!# }
//!```
//!
//! The model mirrors the upstream JSON shape key for key. Missing keys decode to zero values,
//! unknown keys are ignored, and re-serializing a response gives back upstream's sparse
//! encoding for the optional sub-objects.
//!
//! Use [`PlayerFetcher`] directly to reuse a [`reqwest::Client`] across lookups or to point
//! the requests somewhere else.

pub use crate::error::Error;
pub use crate::fetcher::{fetch_player_response, PlayerFetcher};
#[doc(inline)]
pub use crate::player_response::{
    parse_player_response,
    playability_status::PlayabilityStatus,
    playback_tracking::{PlaybackTracking, TrackingUrl, TrackingUrlHeader},
    player_config::{AudioConfig, ExoplayerConfig, PlayerConfig},
    streaming_data::{AdaptiveFormat, ColorInfo, Format, Range, StreamingData},
    video_details::{Thumbnail, ThumbnailList, VideoDetails},
    PlayerResponse, ResponseContext,
};

/// Alias for `Result`, with the default error type [`Error`].
pub type Result<T, E = Error> = core::result::Result<T, E>;

pub mod error;
pub mod fetcher;
pub mod player_response;

mod serde_impl;
