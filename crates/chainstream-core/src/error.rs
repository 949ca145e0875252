//! Error types for the history pipeline.
//!
//! Reconciliation itself never fails: missing data becomes a sentinel and
//! unknown event kinds are suppressed. Only the feed boundary can error.

use thiserror::Error;

/// Errors that can occur while fetching or converting feed events.
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("Invalid amount in '{field}': {value}")]
    InvalidAmount { field: String, value: String },

    #[error("Invalid timestamp: {value}")]
    InvalidTimestamp { value: String },

    #[error("Missing required field: {field}")]
    MissingField { field: String },

    #[error("Unrecognised history document: {reason}")]
    UnrecognisedDocument { reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

impl FeedError {
    /// Returns `true` if the error came from malformed event content rather
    /// than from the transport or the document envelope.
    pub fn is_data_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidAmount { .. } | Self::InvalidTimestamp { .. } | Self::MissingField { .. }
        )
    }
}
