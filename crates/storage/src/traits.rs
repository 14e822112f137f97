//! Storage backend abstraction trait
//!
//! The source platform grew two parallel ticker backends with slightly
//! different semantics; this trait collapses them to one contract the
//! service layer programs against. Implementations only need "find the
//! singleton by its fixed key" and "upsert the whole record".

use newsticker_core::TickerState;

use crate::StorageError;

/// Keyed-record store for the singleton ticker.
///
/// Every mutation in the service layer is a read-modify-write cycle
/// through this trait. There is no compare-and-swap: concurrent writers
/// race and the last upsert wins, which is acceptable for operator-driven
/// ticker content.
pub trait TickerStore: Send + Sync {
    /// Load the singleton record; `None` when no write has created it yet.
    fn find(&self) -> Result<Option<TickerState>, StorageError>;

    /// Create or fully replace the singleton record.
    fn upsert(&self, state: &TickerState) -> Result<(), StorageError>;
}
