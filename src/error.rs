//! Error types for entity-detail.

/// Result type alias for entity-detail operations.
pub type Result<T> = std::result::Result<T, DetailError>;

/// Errors surfaced by settings loading and resource requests.
///
/// The notification bus and the detail view-models never fail; everything in
/// here comes from the collaborators around them.
#[derive(Debug, thiserror::Error)]
pub enum DetailError {
    /// Failed to load or deserialize settings.
    #[error("Failed to load settings: {0}")]
    Settings(String),

    /// An HTTP request could not be built or sent.
    #[error("Request failed: {0}")]
    Request(String),

    /// The backend answered with a non-success status.
    #[error("Request failed with status {status}: {reason}")]
    Status {
        /// Numeric HTTP status code
        status: u16,
        /// Canonical reason phrase, or "Unknown"
        reason: String,
    },

    /// A response body could not be decoded.
    #[error("Failed to deserialize response: {0}")]
    Deserialization(String),
}

impl From<config::ConfigError> for DetailError {
    fn from(err: config::ConfigError) -> Self {
        DetailError::Settings(err.to_string())
    }
}

#[cfg(feature = "resources")]
impl From<reqwest::Error> for DetailError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            DetailError::Deserialization(err.to_string())
        } else {
            DetailError::Request(err.to_string())
        }
    }
}
