use thiserror::Error;

/// Error taxonomy for a linkage run.
///
/// A declined disambiguation prompt is deliberately absent here: it is a
/// per-row no-match outcome, not a failure, and never aborts the run.
#[derive(Debug, Error)]
pub enum LinkError {
    /// Missing parameter or unknown field name. Fatal before any row is
    /// processed; no output is written.
    #[error("validation failed: {0}")]
    Validation(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    Message(String),
}

pub type Result<T> = std::result::Result<T, LinkError>;
