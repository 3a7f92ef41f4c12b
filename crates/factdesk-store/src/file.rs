//! Store selection by file extension

use std::path::Path;

use factdesk_domain::{StoryStore, Workspace};

use crate::{JsonFileStore, SqliteStore, StoreError};

/// A file-backed store chosen from the workspace path
///
/// `.db`, `.sqlite` and `.sqlite3` paths open a [`SqliteStore`]; anything
/// else is a [`JsonFileStore`] snapshot.
pub enum FileStore {
    /// JSON snapshot
    Json(JsonFileStore),
    /// SQLite database
    Sqlite(SqliteStore),
}

impl FileStore {
    /// Open the store for `path`, creating parent directories for SQLite
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let path = path.as_ref();
        let is_sqlite = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| matches!(ext, "db" | "sqlite" | "sqlite3"));

        if is_sqlite {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)?;
            }
            Ok(FileStore::Sqlite(SqliteStore::new(path)?))
        } else {
            Ok(FileStore::Json(JsonFileStore::new(path)))
        }
    }
}

impl StoryStore for FileStore {
    type Error = StoreError;

    fn load(&self) -> Result<Workspace, Self::Error> {
        match self {
            FileStore::Json(store) => store.load(),
            FileStore::Sqlite(store) => store.load(),
        }
    }

    fn save(&mut self, workspace: &Workspace) -> Result<(), Self::Error> {
        match self {
            FileStore::Json(store) => store.save(workspace),
            FileStore::Sqlite(store) => store.save(workspace),
        }
    }
}
