//! In-memory store

use std::convert::Infallible;

use factdesk_domain::{StoryStore, Workspace};

/// Keeps the last saved workspace in memory
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    saved: Workspace,
    saves: usize,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that already holds `workspace`
    pub fn with_workspace(workspace: Workspace) -> Self {
        Self {
            saved: workspace,
            saves: 0,
        }
    }

    /// How many times `save` has been called
    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl StoryStore for MemoryStore {
    type Error = Infallible;

    fn load(&self) -> Result<Workspace, Self::Error> {
        Ok(self.saved.clone())
    }

    fn save(&mut self, workspace: &Workspace) -> Result<(), Self::Error> {
        self.saved = workspace.clone();
        self.saves += 1;
        Ok(())
    }
}
