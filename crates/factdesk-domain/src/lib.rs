//! Factdesk Domain Layer
//!
//! The data model shared by the extraction and red-flag pipelines and by the
//! collaborators around them (store, CLI).
//!
//! ## Key Concepts
//!
//! - **Story**: the piece under verification; owns claims and sources
//! - **Claim**: a discrete assertion with a type, priority and append-only
//!   verification history
//! - **Source**: who a claim rests on, with a derived credibility
//!   [`SourceAssessment`] (see [`assess`])
//! - **Workspace**: the current story with its claims and sources, as loaded
//!   and saved by a [`StoryStore`](traits::StoryStore)
//!
//! Nothing in this crate performs I/O.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod label;

pub mod claim;
pub mod error;
pub mod ids;
pub mod source;
pub mod story;
pub mod traits;
pub mod workspace;

// Re-exports for convenience
pub use claim::{
    Claim, ClaimStatus, ClaimType, Confidence, Priority, VerificationLog, UNATTRIBUTED_SOURCE,
};
pub use error::DomainError;
pub use ids::{ClaimId, IdSource, LogId, RandomIds, SequentialIds, SourceId, StoryId};
pub use source::{assess, Corroboration, Source, SourceAssessment, SourceStake, SourceType};
pub use story::{Sensitivity, Story};
pub use traits::{DocumentFetcher, FetchError, StoryStore};
pub use workspace::{MergePolicy, MergeSummary, Workspace};
