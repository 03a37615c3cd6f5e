//! Option documentation catalog and keyword search

pub mod catalog;
mod search;

pub use catalog::{DocEntry, EntryKind, CATALOG};
pub use search::{search, SearchHit};
