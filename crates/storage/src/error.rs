//! Typed error enum for the storage layer.

use thiserror::Error;

/// Storage-layer error covering every expected failure mode.
///
/// A failed operation never partially applies: the single statement either
/// commits the whole record or leaves the previous one in place.
#[derive(Debug, Error)]
pub enum StorageError {
    /// SQL / connection failure.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// Row data could not be deserialized into the domain type.
    #[error("data corruption: {context}")]
    DataCorruption {
        context: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Connection mutex poisoned by a panicking writer.
    #[error("lock poisoned: {0}")]
    Poisoned(String),

    /// Migration failure.
    #[error("migration error: {0}")]
    Migration(String),
}

impl From<serde_json::Error> for StorageError {
    fn from(err: serde_json::Error) -> Self {
        Self::DataCorruption {
            context: "JSON serialization/deserialization".to_owned(),
            source: Box::new(err),
        }
    }
}
