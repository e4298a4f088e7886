//! Client error types.

use thiserror::Error;

pub type JudgeClientResult<T> = Result<T, JudgeClientError>;

/// Errors from either contest service channel.
#[derive(Debug, Error)]
pub enum JudgeClientError {
    #[error("invalid client configuration: {0}")]
    InvalidConfig(String),

    #[error("network error: {0}")]
    Network(String),

    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    #[error("authentication failed (status {status}): {detail}")]
    Auth { status: u16, detail: String },

    #[error("not found: {0}")]
    NotFound(String),

    #[error("API error (status {status}): {detail}")]
    Api { status: u16, detail: String },

    #[error("failed to parse response: {0}")]
    Parse(String),

    /// The jury edit form carried no selected team option; the update
    /// endpoint cannot be driven without that value.
    #[error("no selected team value on the user edit form")]
    MissingTeamValue,
}

impl From<reqwest::Error> for JudgeClientError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_connect() {
            JudgeClientError::ConnectionFailed(e.to_string())
        } else if e.is_timeout() {
            JudgeClientError::Network("request timed out".to_string())
        } else {
            JudgeClientError::Network(e.to_string())
        }
    }
}
