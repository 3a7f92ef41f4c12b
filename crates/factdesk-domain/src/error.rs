//! Domain error types

use thiserror::Error;

/// Errors raised by workspace edits and model constructors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Identifier string could not be parsed
    #[error("Invalid identifier: {0}")]
    InvalidId(String),

    /// Enum label not recognized
    #[error("Unknown {kind}: '{value}'")]
    UnknownLabel {
        /// Name of the enum being parsed
        kind: &'static str,
        /// Rejected input
        value: String,
    },

    /// No entity with the given id
    #[error("{kind} not found: {id}")]
    NotFound {
        /// Entity kind (claim, source)
        kind: &'static str,
        /// Requested id
        id: String,
    },

    /// An operation needs a current story and none is set
    #[error("No story is open")]
    NoStory,

    /// Entity belongs to a different story than the workspace
    #[error("{kind} belongs to story {found}, expected {expected}")]
    StoryMismatch {
        /// Entity kind (claim, source)
        kind: &'static str,
        /// Story of the current workspace
        expected: String,
        /// Story carried by the entity
        found: String,
    },

    /// A verification log was appended to the wrong claim
    #[error("Verification log for claim {log_claim} cannot be appended to claim {claim}")]
    LogClaimMismatch {
        /// Claim receiving the log
        claim: String,
        /// Claim named by the log
        log_claim: String,
    },

    /// An update would drop or rewrite recorded verification logs
    #[error("Verification history of claim {0} is append-only")]
    LogHistoryRewritten(String),

    /// Verification logs need at least one source found
    #[error("Verification log requires at least one source found")]
    NoSourcesFound,
}
