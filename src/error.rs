//! Error types for Push Dispatch.

/// Top-level error type for the dispatcher.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Oracle error: {0}")]
    Oracle(#[from] OracleError),

    #[error("Submission error: {0}")]
    Submit(#[from] SubmitError),
}

/// Processing-oracle errors.
///
/// The oracle is expected to always produce a verdict (or `None` for an
/// unrecognized payload); an error here is fatal for the event, since no
/// documented recovery exists.
#[derive(Debug, thiserror::Error)]
pub enum OracleError {
    #[error("Verdict unavailable: {0}")]
    Unavailable(String),

    #[error("Payload rejected by oracle: {0}")]
    InvalidPayload(String),
}

/// Background submission errors.
///
/// Permission rejection is a distinct variant rather than a caught
/// exception so the selector's fallback is a visible branch.
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    #[error("Scheduling permission rejected by environment: {0}")]
    PermissionRejected(String),

    #[error("Submission rejected: {0}")]
    Rejected(String),
}

/// Result type alias for the dispatcher.
pub type Result<T> = std::result::Result<T, Error>;
