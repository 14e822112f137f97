//! Core types and merge semantics for newsticker
//!
//! This crate contains the domain types shared across all other crates and
//! the pure list-merge algorithm behind every ticker mutation. Persistence
//! and transport live elsewhere; everything here is side-effect free.

mod constants;
mod ticker;

pub use constants::*;
pub use ticker::*;
