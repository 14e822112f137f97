//! Typed error enum for the service layer.

use newsticker_storage::StorageError;
use thiserror::Error;

/// Service-layer error unifying validation and storage failures.
///
/// Most bad input is normalized away rather than rejected (a whitespace
/// `add` is a silent no-op); `Validation` is reserved for the one
/// operation that demands text, the reporter free-text path.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Underlying persistence unreachable or write failed. The previously
    /// committed record is left unchanged.
    #[error("storage: {0}")]
    Storage(#[from] StorageError),

    /// Caller omitted required text.
    #[error("invalid input: {0}")]
    Validation(String),
}

impl ServiceError {
    /// Whether this error is a caller mistake rather than a backend fault.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}
