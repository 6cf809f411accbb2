//! Checklist Errors

use thiserror::Error;

/// Common result type for checklist operations
pub type ChecklistResult<T> = Result<T, ChecklistError>;

/// Errors raised by the storage seam and the snapshot codec.
///
/// None of these reach the user: the controller logs them and carries on.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ChecklistError {
    #[error("storage unavailable: {0}")]
    StorageUnavailable(String),
    #[error("storage write failed: {0}")]
    StorageWrite(String),
    #[error("could not encode snapshot: {0}")]
    Encode(String),
    #[error("could not decode snapshot: {0}")]
    Decode(String),
    #[error("no row at section {section}, index {row}")]
    UnknownRow { section: usize, row: usize },
}
