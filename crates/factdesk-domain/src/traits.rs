//! Trait definitions for external collaborators
//!
//! The analysis pipelines depend on plain data only. Storage and document
//! retrieval happen outside them, behind these traits.

use thiserror::Error;

use crate::Workspace;

/// Load and save the authoritative story workspace
///
/// Implemented by the infrastructure layer (factdesk-store)
pub trait StoryStore {
    /// Error type for store operations
    type Error;

    /// Load the saved workspace (an empty one if nothing was saved yet)
    fn load(&self) -> Result<Workspace, Self::Error>;

    /// Persist the workspace, replacing what was saved before
    fn save(&mut self, workspace: &Workspace) -> Result<(), Self::Error>;
}

/// Failure to retrieve a document for analysis
///
/// Both variants are recoverable: the user can retry or paste the text in.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// The document could not be reached
    #[error("Could not reach {location}: {reason}")]
    Network {
        /// URL or path that was requested
        location: String,
        /// Underlying failure
        reason: String,
    },

    /// The document was retrieved but no text could be extracted
    #[error("Could not extract text from {location}: {reason}")]
    Parse {
        /// URL or path that was requested
        location: String,
        /// Underlying failure
        reason: String,
    },
}

impl FetchError {
    /// Whether trying again might succeed
    ///
    /// Unreadable content stays unreadable, so only transport failures qualify.
    pub fn is_retryable(&self) -> bool {
        matches!(self, FetchError::Network { .. })
    }
}

/// Turn a document location into plain text
///
/// Implemented by the presentation layer (factdesk-cli reads files and stdin)
pub trait DocumentFetcher {
    /// Fetch the plain text behind `location`
    fn fetch(&self, location: &str) -> Result<String, FetchError>;
}
