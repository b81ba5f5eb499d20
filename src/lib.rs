//! # moviedb - Minimal Movie Catalog
//!
//! Directors and their movies, persisted in a local SQLite file.
//!
//! moviedb provides:
//! - Two record types, [`Director`] and [`Movie`], linked by `director_id`
//! - A long-lived store handle that creates its tables on open
//! - Create/list data access functions over that handle
//! - Optional TOML configuration and a themed terminal UI for the CLI

pub mod director;
pub mod movie;
pub mod storage;
pub mod catalog;
pub mod output;
pub mod config;
pub mod ui;

// Re-exports for convenient access
pub use director::{Director, DirectorId};
pub use movie::{Movie, MovieId};
pub use storage::{CatalogStore, StoreOptions};
pub use catalog::Catalog;

/// Result type alias for moviedb operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for moviedb operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(String),
}
