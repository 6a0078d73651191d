use thiserror::Error;

/// Errors that can occur during time tracking operations.
#[derive(Debug, Error)]
pub enum TimeTrackingError {
    #[error("authentication failed")]
    AuthenticationFailed,
    #[error("rate limited by the time tracking service")]
    RateLimited,
    #[error("request to the time tracking service timed out")]
    Timeout,
    #[error("time tracking service unavailable: {0}")]
    Unavailable(String),
    #[error("invalid response: {0}")]
    InvalidResponse(String),
    #[error("{0}")]
    Unknown(String),
}

impl TimeTrackingError {
    pub fn unknown(msg: impl Into<String>) -> Self {
        Self::Unknown(msg.into())
    }

    pub fn invalid_response(msg: impl Into<String>) -> Self {
        Self::InvalidResponse(msg.into())
    }
}
