//! Error types for the utility service.

/// Errors surfaced by [`AppUtil`](crate::utils::app_util::AppUtil) operations.
#[derive(Debug, thiserror::Error)]
pub enum AppUtilError {
    #[error("Invalid RFC 3339 timestamp '{input}': {reason}")]
    Parse { input: String, reason: String },

    #[error("Random source failure: {0}")]
    RandomSource(String),
}

/// Result alias used by the library operations.
pub type Result<T> = std::result::Result<T, AppUtilError>;
