//! Persistence error types.

use thiserror::Error;

/// Errors that can occur while loading or saving history
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// The storage facility could not be read
    #[error("Failed to read storage slot '{key}': {reason}")]
    ReadFailed { key: String, reason: String },

    /// The storage facility rejected the write
    #[error("Failed to write storage slot '{key}': {reason}")]
    WriteFailed { key: String, reason: String },

    /// Stored payload is not a list of history records
    #[error("Stored history is malformed: {0}")]
    Malformed(String),

    /// Payload parsed, but individual records failed validation
    #[error("Stored history has {} invalid record(s)", .0.len())]
    InvalidRecords(Vec<RecordViolation>),

    /// Serialization to JSON failed
    #[error("Serialization failed: {0}")]
    SerializationFailed(String),
}

/// Problem found in a single stored record.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum RecordViolation {
    #[error("record {index}: timestamp '{value}' is not an ISO-8601 date-time")]
    InvalidTimestamp { index: usize, value: String },
}
