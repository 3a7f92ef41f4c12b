//! JSON snapshot store

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use factdesk_domain::{StoryStore, Workspace};
use tracing::debug;

use crate::StoreError;

/// Saves the whole workspace as one JSON document
///
/// Writes go to a sibling temporary file that is synced and then renamed over
/// the snapshot, so a failed save leaves the previous snapshot intact.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store backed by `path`; the file need not exist yet
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Snapshot location
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StoryStore for JsonFileStore {
    type Error = StoreError;

    fn load(&self) -> Result<Workspace, Self::Error> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "No snapshot yet, starting empty");
            return Ok(Workspace::new());
        }
        let contents = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    fn save(&mut self, workspace: &Workspace) -> Result<(), Self::Error> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(workspace)?;
        atomic_write(&self.path, contents.as_bytes())?;
        debug!(
            path = %self.path.display(),
            claims = workspace.claims().len(),
            sources = workspace.sources().len(),
            "Saved snapshot"
        );
        Ok(())
    }
}

/// Write to a temp file, fsync it, rename it over `target`, then fsync the
/// directory so the rename itself survives a crash.
fn atomic_write(target: &Path, contents: &[u8]) -> std::io::Result<()> {
    let tmp = target.with_extension("json.tmp");
    {
        let mut file = fs::File::create(&tmp)?;
        file.write_all(contents)?;
        file.sync_all()?;
    }
    fs::rename(&tmp, target)?;

    let dir = match target.parent().filter(|p| !p.as_os_str().is_empty()) {
        Some(parent) => parent,
        None => Path::new("."),
    };
    // Directories cannot be opened for syncing on every platform.
    if let Ok(dir) = fs::File::open(dir) {
        let _ = dir.sync_all();
    }
    Ok(())
}
