//! Error types for badge rendering.

use thiserror::Error;

/// Errors from badge rendering.
#[derive(Debug, Error)]
pub enum BadgeError {
    #[error("Unknown badge style: '{0}'")]
    UnknownStyle(String),

    #[error("Invalid id suffix '{0}': only letters, digits, '-' and '_' are allowed")]
    InvalidIdSuffix(String),

    #[error("Invalid badge request: {0}")]
    InvalidRequest(#[from] serde_json::Error),
}
