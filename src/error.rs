//! Error types for `life-timeline`.

use thiserror::Error;

/// Primary error type for milestone operations.
#[derive(Error, Debug)]
pub enum TimelineError {
    /// Milestone with the specified id was not found.
    #[error("Milestone not found: {id}")]
    MilestoneNotFound { id: String },

    /// Field validation failed.
    #[error("Validation failed: {field}: {reason}")]
    Validation { field: String, reason: String },

    /// A date field matched neither accepted input format.
    #[error("Invalid date '{value}': expected YYYY-MM-DD or MM/DD/YYYY")]
    InvalidDate { value: String },

    /// File system I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl TimelineError {
    #[must_use]
    pub fn validation(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Result type using `TimelineError`.
pub type Result<T> = std::result::Result<T, TimelineError>;
