//! Solver error types
//!
//! Only input validation can fail. Once a [`DiskCount`](super::DiskCount) exists,
//! solving is infallible.

use thiserror::Error;

/// Errors raised while setting up a puzzle
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolveError {
    /// Disk count outside the supported range
    #[error("invalid disk count {requested}: must be between {min} and {max}")]
    InvalidDiskCount { requested: i64, min: u8, max: u8 },

    /// Disk count could not be parsed as a number
    #[error("invalid disk count '{input}': not a number")]
    NotANumber { input: String },
}
