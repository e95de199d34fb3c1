//! Error types for the reservation desk.

use crate::types::{BookingId, RoomId};
use chrono::NaiveDate;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for desk operations.
pub type Result<T> = std::result::Result<T, DeskError>;

/// Failure taxonomy for the reservation desk.
///
/// Nothing here is fatal to the process: malformed records are skipped during
/// load, I/O failures fall back to safe in-memory state, and the remaining
/// variants are reported to the operator by the shell.
#[derive(Debug, Error)]
pub enum DeskError {
    /// A persisted line failed to parse and was skipped.
    #[error("malformed record: {reason}")]
    MalformedRecord {
        /// What made the line unusable
        reason: String,
    },

    /// A file could not be read or written.
    #[error("I/O failure on {}: {source}", path.display())]
    Io {
        /// Path of the file involved
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// No booking carries the requested id.
    #[error("booking {0} not found")]
    BookingNotFound(BookingId),

    /// No room carries the requested id.
    #[error("room {0} not found")]
    RoomNotFound(RoomId),

    /// Check-out must be strictly after check-in.
    #[error("check-out {checkout} must be after check-in {check_in}")]
    InvalidRange {
        /// Requested check-in date
        check_in: NaiveDate,
        /// Requested checkout date
        checkout: NaiveDate,
    },
}

impl DeskError {
    /// Shorthand for a [`DeskError::MalformedRecord`]
    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedRecord {
            reason: reason.into(),
        }
    }
}
