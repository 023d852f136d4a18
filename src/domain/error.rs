use thiserror::Error;

use super::todo::TodoId;

/// Every failure a repository operation can surface. The HTTP layer maps each
/// variant to a status code; nothing is retried or swallowed internally.
#[derive(Debug, Error)]
pub enum TodoError {
    #[error("{0}")]
    Validation(String),
    #[error("todo {0} not found")]
    NotFound(TodoId),
    /// The data file exists but is not valid JSON. Surfaced as-is so the file
    /// is never overwritten with a fresh document.
    #[error("data file is not valid JSON: {0}")]
    CorruptStore(#[source] serde_json::Error),
    #[error("data file unavailable: {0}")]
    StoreUnavailable(#[from] std::io::Error),
}
