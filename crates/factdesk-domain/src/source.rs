//! Source module - who a claim rests on, and how far to trust them

use serde::{Deserialize, Serialize};

use crate::label::labeled;
use crate::{SourceId, StoryId};

/// Relationship of a source to the events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SourceType {
    /// Firsthand
    #[default]
    Primary,
    /// Reported elsewhere
    Secondary,
    /// Identity withheld
    Anonymous,
    /// Record or file
    Documentary,
}

labeled!(SourceType, "source type", {
    Primary => "Primary",
    Secondary => "Secondary",
    Anonymous => "Anonymous",
    Documentary => "Documentary",
});

/// Bias or conflict-of-interest level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SourceStake {
    /// Independent
    #[default]
    None,
    /// Minor interest
    Low,
    /// Some interest
    Medium,
    /// Conflict of interest
    High,
}

labeled!(SourceStake, "stake", {
    None => "None",
    Low => "Low",
    Medium => "Medium",
    High => "High",
});

/// Whether other evidence backs the source up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Corroboration {
    /// Independently confirmed
    Yes,
    /// Not confirmed
    #[default]
    No,
    /// Confirmed in part
    Partially,
}

labeled!(Corroboration, "corroboration", {
    Yes => "Yes",
    No => "No",
    Partially => "Partially",
});

/// Credibility label for a source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SourceAssessment {
    /// Safe to rely on
    Credible,
    /// Usable with care
    UseWithCaution,
    /// Needs a second source
    RequiresCorroboration,
    /// Do not rely on
    Unreliable,
}

labeled!(SourceAssessment, "assessment", {
    Credible => "Credible",
    UseWithCaution => "Use with caution",
    RequiresCorroboration => "Requires corroboration",
    Unreliable => "Unreliable",
});

/// Suggest an assessment from a source's profile.
///
/// Rules are checked in order and the first match wins:
/// 1. primary, no stake, corroborated → credible
/// 2. high stake → use with caution
/// 3. not corroborated → requires corroboration
/// 4. anything else → use with caution
///
/// # Examples
///
/// ```
/// use factdesk_domain::{assess, Corroboration, SourceAssessment, SourceStake, SourceType};
///
/// let a = assess(SourceType::Primary, SourceStake::None, Corroboration::Yes);
/// assert_eq!(a, SourceAssessment::Credible);
/// ```
pub fn assess(
    source_type: SourceType,
    stake: SourceStake,
    corroborated: Corroboration,
) -> SourceAssessment {
    match (source_type, stake, corroborated) {
        (SourceType::Primary, SourceStake::None, Corroboration::Yes) => SourceAssessment::Credible,
        (_, SourceStake::High, _) => SourceAssessment::UseWithCaution,
        (_, _, Corroboration::No) => SourceAssessment::RequiresCorroboration,
        _ => SourceAssessment::UseWithCaution,
    }
}

/// A person, document or entity claims are attributed to
///
/// The assessment follows the profile (type, stake, corroboration) until a
/// human overrides it. An override sticks through later profile edits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Source {
    /// Unique identifier
    pub id: SourceId,

    /// Owning story
    pub story_id: StoryId,

    /// Display name, a pseudonym if confidential
    pub name: String,

    /// Whether the identity must be protected
    pub is_confidential: bool,

    /// Free-text notes
    pub notes: String,

    #[serde(rename = "type")]
    source_type: SourceType,
    stake: SourceStake,
    corroborated: Corroboration,
    assessment: SourceAssessment,
    #[serde(default)]
    assessment_overridden: bool,
}

impl Source {
    /// Create a source with a computed assessment
    pub fn new(
        id: SourceId,
        story_id: StoryId,
        name: impl Into<String>,
        source_type: SourceType,
        stake: SourceStake,
        corroborated: Corroboration,
    ) -> Self {
        Self {
            id,
            story_id,
            name: name.into(),
            is_confidential: false,
            notes: String::new(),
            source_type,
            stake,
            corroborated,
            assessment: assess(source_type, stake, corroborated),
            assessment_overridden: false,
        }
    }

    /// Mark the source confidential
    pub fn with_confidential(mut self, is_confidential: bool) -> Self {
        self.is_confidential = is_confidential;
        self
    }

    /// Attach notes
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }

    /// Relationship to the events
    pub fn source_type(&self) -> SourceType {
        self.source_type
    }

    /// Conflict-of-interest level
    pub fn stake(&self) -> SourceStake {
        self.stake
    }

    /// Corroboration state
    pub fn corroborated(&self) -> Corroboration {
        self.corroborated
    }

    /// Current credibility label
    pub fn assessment(&self) -> SourceAssessment {
        self.assessment
    }

    /// Whether a human has pinned the assessment
    pub fn is_assessment_overridden(&self) -> bool {
        self.assessment_overridden
    }

    /// Change the profile; the assessment is recomputed unless overridden
    pub fn set_profile(
        &mut self,
        source_type: SourceType,
        stake: SourceStake,
        corroborated: Corroboration,
    ) {
        self.source_type = source_type;
        self.stake = stake;
        self.corroborated = corroborated;
        if !self.assessment_overridden {
            self.assessment = assess(source_type, stake, corroborated);
        }
    }

    /// Pin the assessment to a human judgement
    pub fn override_assessment(&mut self, assessment: SourceAssessment) {
        self.assessment = assessment;
        self.assessment_overridden = true;
    }

    /// Drop the override and return to the computed assessment
    pub fn clear_override(&mut self) {
        self.assessment_overridden = false;
        self.assessment = assess(self.source_type, self.stake, self.corroborated);
    }
}
