/// Error types for the taxi grid library
use thiserror::Error;

/// A composite anomaly grid key that is not two underscore-delimited integers.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseKeyError {
    /// Wrong number of `_`-separated tokens
    #[error("grid key {key:?} has {found} underscore-delimited tokens, expected 2")]
    TokenCount { key: String, found: usize },

    /// A token that does not parse as an integer
    #[error("grid key {key:?} has a non-integer token {token:?}")]
    NotAnInteger { key: String, token: String },
}

/// User input for the hour selector that cannot be used as a query hour.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HourError {
    /// Input is empty or not an integer
    #[error("hour input {0:?} is not an integer")]
    NotANumber(String),

    /// Integer outside 0-23
    #[error("hour {0} is outside the range 0-23")]
    OutOfRange(i64),
}

/// A failed hotspot or anomaly query.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The server answered with a non-success HTTP status
    #[error("{url} answered with HTTP status {status}")]
    Transport { url: String, status: u16 },

    /// The request never produced a response (connection refused, CORS, ...)
    #[error("request to {url} failed: {reason}")]
    Network { url: String, reason: String },

    /// The response body is not the expected JSON array
    #[error("failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),
}
