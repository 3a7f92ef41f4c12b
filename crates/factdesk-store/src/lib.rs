//! Factdesk Storage Layer
//!
//! Implements the [`StoryStore`](factdesk_domain::StoryStore) trait three ways:
//!
//! - [`MemoryStore`] keeps the workspace in memory (tests, one-shot runs)
//! - [`JsonFileStore`] writes a pretty-printed JSON snapshot
//! - [`SqliteStore`] keeps stories, claims, logs and sources in SQLite
//!
//! [`FileStore`] picks the JSON or SQLite store from a path's extension.
//! Every store loads an empty workspace when nothing was saved yet.
//!
//! # Examples
//!
//! ```no_run
//! use factdesk_domain::StoryStore;
//! use factdesk_store::SqliteStore;
//!
//! let store = SqliteStore::new("factdesk.db").unwrap();
//! let workspace = store.load().unwrap();
//! println!("{} claims", workspace.claims().len());
//! ```

#![warn(missing_docs)]

mod file;
mod json;
mod memory;
mod sqlite;

use factdesk_domain::DomainError;
use thiserror::Error;

pub use file::FileStore;
pub use json::JsonFileStore;
pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

/// Errors that can occur during storage operations
#[derive(Error, Debug)]
pub enum StoreError {
    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// File could not be read or written
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Snapshot is not valid JSON for a workspace
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Stored values do not form a valid workspace
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// Stored records break a workspace invariant
    #[error("Inconsistent workspace: {0}")]
    Domain(#[from] DomainError),
}
