//! In-memory ticker store
//!
//! Same contract as the SQLite store, backed by a `RwLock`. Used by unit
//! tests and available for ephemeral deployments where the ticker does not
//! need to survive a restart.

use std::sync::RwLock;

use newsticker_core::TickerState;

use crate::{StorageError, TickerStore};

#[derive(Default)]
pub struct MemoryStore {
    state: RwLock<Option<TickerState>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl TickerStore for MemoryStore {
    fn find(&self) -> Result<Option<TickerState>, StorageError> {
        let guard = self
            .state
            .read()
            .map_err(|e| StorageError::Poisoned(e.to_string()))?;
        Ok(guard.clone())
    }

    fn upsert(&self, state: &TickerState) -> Result<(), StorageError> {
        let mut guard = self
            .state
            .write()
            .map_err(|e| StorageError::Poisoned(e.to_string()))?;
        *guard = Some(state.clone());
        Ok(())
    }
}
