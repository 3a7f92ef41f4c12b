//! Error types for the CLI application.

use std::convert::Infallible;

use factdesk_domain::{DomainError, FetchError};
use factdesk_extractor::ExtractorError;
use factdesk_review::ReviewError;
use factdesk_store::StoreError;
use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Workspace rule violated
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Workspace could not be loaded or saved
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Text could not be read for analysis
    #[error("{0}{hint}", hint = fetch_hint(.0))]
    Fetch(#[from] FetchError),

    /// Analyzer configuration error
    #[error(transparent)]
    Extractor(#[from] ExtractorError),

    /// Review configuration or checklist error
    #[error(transparent)]
    Review(#[from] ReviewError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Operation not permitted
    #[error("Operation not permitted: {0}")]
    NotPermitted(String),

    /// No story open in the workspace
    #[error("No story open. Use the 'intake' command first.")]
    NoStory,
}

/// Shown after a fetch failure that a second attempt might fix
pub const FETCH_RETRY_HINT: &str = "retry, or pipe the text in with 'factdesk analyze -'";

fn fetch_hint(err: &FetchError) -> String {
    if err.is_retryable() {
        format!("\n  hint: {FETCH_RETRY_HINT}")
    } else {
        String::new()
    }
}

impl From<Infallible> for CliError {
    fn from(never: Infallible) -> Self {
        match never {}
    }
}
