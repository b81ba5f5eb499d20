//! Storage Layer - SQLite-backed persistence
//!
//! System of record is SQLite with tables:
//! - directors(id, name)
//! - movies(id, title, genre, director_id)

pub mod schema;
pub mod sqlite;

pub use sqlite::{CatalogStore, StoreOptions, DbStats};
