//! Service layer for newsticker
//!
//! Centralizes the read-modify-write cycle between HTTP/CLI callers and
//! the storage backend.

mod error;
mod ticker_service;

pub use error::ServiceError;
pub use ticker_service::TickerService;
