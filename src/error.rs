use thiserror::Error;

/// Failures surfaced to the client. `Display` is the exact `error` message
/// of the 500 response body.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PredictionError {
    #[error("API key not configured")]
    MissingApiKey,

    #[error("API error: {0}")]
    OddsStatus(u16),

    #[error("Scores API error: {0}")]
    ScoresStatus(u16),

    /// Timeout, DNS, connection reset, undecodable body.
    #[error("{0}")]
    Transport(String),
}

impl From<reqwest::Error> for PredictionError {
    fn from(err: reqwest::Error) -> Self {
        // The request URL carries the API key as a query parameter.
        PredictionError::Transport(err.without_url().to_string())
    }
}

pub type Result<T> = std::result::Result<T, PredictionError>;
