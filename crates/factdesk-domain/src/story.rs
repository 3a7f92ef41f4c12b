//! Story module - the unit of reporting work

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::label::labeled;
use crate::StoryId;

/// How carefully a story has to be handled before publication
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Sensitivity {
    /// Routine coverage
    #[default]
    Standard,
    /// Feature writing
    Feature,
    /// Profile of a person or organization
    Profile,
    /// Investigative reporting
    Investigative,
    /// Developing, time-critical coverage
    BreakingNews,
}

labeled!(Sensitivity, "sensitivity", {
    Standard => "Standard",
    Feature => "Feature",
    Profile => "Profile",
    Investigative => "Investigative",
    BreakingNews => "Breaking News",
});

/// A story under verification
///
/// Created once at intake. Claims and sources refer back to it by id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Story {
    /// Unique identifier
    pub id: StoryId,

    /// Slug or working title
    pub title: String,

    /// What the piece is about
    pub summary: String,

    /// Filing deadline
    pub deadline: NaiveDate,

    /// Handling level
    pub sensitivity: Sensitivity,

    /// When the story was taken in
    pub created_at: DateTime<Utc>,

    /// Last edit
    pub updated_at: DateTime<Utc>,
}

impl Story {
    /// Create a new story with a fresh id
    pub fn new(
        title: impl Into<String>,
        summary: impl Into<String>,
        deadline: NaiveDate,
        sensitivity: Sensitivity,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: StoryId::new(),
            title: title.into(),
            summary: summary.into(),
            deadline,
            sensitivity,
            created_at: now,
            updated_at: now,
        }
    }

    /// Record an edit
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}
