//! Storage layer for newsticker
//!
//! One `TickerStore` trait over the singleton ticker record, with a
//! SQLite implementation for durable deployments and an in-memory one for
//! tests. The merge algorithm lives in `newsticker-core` and is
//! backend-agnostic; this crate only finds and upserts the record.

mod error;
mod memory;
mod migrations;
mod sqlite;
mod traits;

pub use error::StorageError;
pub use memory::MemoryStore;
pub use sqlite::SqliteStore;
pub use traits::TickerStore;
