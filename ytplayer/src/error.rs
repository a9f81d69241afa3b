/// Errors that can occur while requesting or decoding a player response.
///
/// Every variant is terminal: the lookup produced no [`PlayerResponse`](crate::PlayerResponse).
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The endpoint could not be reached, the request timed out, or the body could not be read.
    #[error("request to the player endpoint failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// The endpoint answered with a non-success status. The body was discarded.
    #[error("request failed with status code: {0}")]
    UpstreamStatus(u16),
    /// The body is not JSON, or a field does not have the expected type.
    #[error("failed to parse player response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl Error {
    /// The status code returned by the endpoint, if the failure was a non-success status.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::UpstreamStatus(code) => Some(*code),
            _ => None,
        }
    }

    /// Whether the request was aborted by the timeout.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Transport(e) if e.is_timeout())
    }
}
