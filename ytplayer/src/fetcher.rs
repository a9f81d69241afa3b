use std::time::Duration;

use log::{debug, trace};
use reqwest::{header, Client};
use serde_json::{json, Value};

use crate::{parse_player_response, Error, PlayerResponse, Result};

/// The player endpoint of the internal API.
pub const PLAYER_ENDPOINT: &str = "https://www.youtube.com/youtubei/v1/player";
/// User agent of the Android app the request pretends to come from.
pub const USER_AGENT: &str = "com.google.android.youtube/17.36.4 (Linux; U; Android 12; GB) gzip";
/// Total time a lookup may take, connecting and reading the body included.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

// The endpoint shapes its answer after the declared client.
const CLIENT_NAME: &str = "ANDROID_TESTSUITE";
const CLIENT_VERSION: &str = "1.9";
const ANDROID_SDK_VERSION: u32 = 30;
const HL: &str = "en";
const GL: &str = "US";
const UTC_OFFSET_MINUTES: i32 = 0;

/// Requests [`PlayerResponse`]s from the player endpoint.
///
/// Every call to [`PlayerFetcher::fetch`] sends exactly one request. There are no retries; a
/// caller that needs them has to loop itself. Fetchers are cheap to clone, and lookups made
/// through clones only share the connection pool.
///
/// # Example
///```no_run
///# use ytplayer::PlayerFetcher;
///# #[tokio::main]
///# async fn main() -> Result<(), ytplayer::Error> {
/// let fetcher = PlayerFetcher::new()?;
/// let response = fetcher.fetch("dQw4w9WgXcQ").await?;
/// println!("{}", response.video_details.title);
///# Ok(())
///# }
///```
#[derive(Clone, Debug)]
pub struct PlayerFetcher {
    client: Client,
    endpoint: String,
    timeout: Duration,
}

impl PlayerFetcher {
    /// Constructs a [`PlayerFetcher`] with a fresh [`Client`].
    /// ### Errors
    /// When [`reqwest`] fails to initialize an new [`Client`].
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self::with_client(client))
    }

    /// Constructs a [`PlayerFetcher`] from an existing [`Client`].
    ///
    /// The spoofed headers and the timeout are set on every request, so there are no special
    /// constrains on what the [`Client`] has to look like.
    #[inline]
    pub fn with_client(client: Client) -> Self {
        Self {
            client,
            endpoint: PLAYER_ENDPOINT.to_owned(),
            timeout: REQUEST_TIMEOUT,
        }
    }

    /// Sends the requests to `endpoint` instead of [`PLAYER_ENDPOINT`].
    #[inline]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Replaces [`REQUEST_TIMEOUT`].
    #[inline]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    #[inline]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    #[inline]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// The JSON body posted for `video_id`.
    pub fn request_body(video_id: &str) -> Value {
        json!({
            "videoId": video_id,
            "context": {
                "client": {
                    "clientName": CLIENT_NAME,
                    "clientVersion": CLIENT_VERSION,
                    "androidSdkVersion": ANDROID_SDK_VERSION,
                    "hl": HL,
                    "gl": GL,
                    "utcOffsetMinutes": UTC_OFFSET_MINUTES,
                }
            }
        })
    }

    /// Requests the player response of `video_id` and deserializes it.
    ///
    /// The id is passed on as is. Checking it is up to the caller.
    ///
    /// ### Errors
    /// - [`Error::Transport`] when the endpoint can't be reached, or the timeout elapses.
    /// - [`Error::UpstreamStatus`] when the endpoint answers with a non-success status.
    /// - [`Error::Decode`] when the body is not a valid player response.
    pub async fn fetch(&self, video_id: &str) -> Result<PlayerResponse> {
        trace!("Fetching player response of {video_id} from {}", self.endpoint);
        let response = self
            .client
            .post(&self.endpoint)
            .header(header::CONTENT_TYPE, "application/json")
            .header(header::USER_AGENT, USER_AGENT)
            .timeout(self.timeout)
            .body(Self::request_body(video_id).to_string())
            .send()
            .await?;

        let status = response.status();
        debug!("Player endpoint answered {status} for {video_id}");
        if !status.is_success() {
            return Err(Error::UpstreamStatus(status.as_u16()));
        }

        let body = response.bytes().await?;
        trace!("Read {} bytes of player response", body.len());
        parse_player_response(&body)
    }
}

/// Requests the player response of `video_id` with a default [`PlayerFetcher`].
///
/// ### Errors
/// See [`PlayerFetcher::new`] and [`PlayerFetcher::fetch`].
pub async fn fetch_player_response(video_id: &str) -> Result<PlayerResponse> {
    PlayerFetcher::new()?.fetch(video_id).await
}
