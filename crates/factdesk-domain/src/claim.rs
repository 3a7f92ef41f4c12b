//! Claim module - discrete assertions awaiting verification

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::label::labeled;
use crate::{ClaimId, DomainError, LogId, StoryId};

/// Source label given to claims that are not attributed to a named party
pub const UNATTRIBUTED_SOURCE: &str = "Text Analysis";

/// Kind of assertion a claim makes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ClaimType {
    /// Plain statement of fact
    #[default]
    Factual,
    /// Numbers, rates, amounts
    Statistical,
    /// Statement about past events
    Historical,
    /// Quoted or attributed material
    Attribution,
    /// Who someone is (name, title, role)
    Identity,
}

labeled!(ClaimType, "claim type", {
    Factual => "Factual",
    Statistical => "Statistical",
    Historical => "Historical",
    Attribution => "Attribution",
    Identity => "Identity",
});

/// Verification state of a claim, also used as a log verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ClaimStatus {
    /// Not yet checked
    #[default]
    Unverified,
    /// Confirmed
    Verified,
    /// Contradicted by some evidence
    Disputed,
    /// Shown to be wrong
    False,
    /// Cannot be checked
    Unverifiable,
}

labeled!(ClaimStatus, "claim status", {
    Unverified => "Unverified",
    Verified => "Verified",
    Disputed => "Disputed",
    False => "False",
    Unverifiable => "Unverifiable",
});

/// Risk priority of a claim
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Priority {
    /// Story falls apart if wrong
    Critical,
    /// Must be checked before filing
    High,
    /// Default
    #[default]
    Medium,
    /// Nice to confirm
    Low,
}

labeled!(Priority, "priority", {
    Critical => "Critical",
    High => "High",
    Medium => "Medium",
    Low => "Low",
});

/// How sure the checker is about a verification finding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Confidence {
    /// Strong evidence
    #[default]
    High,
    /// Some evidence
    Medium,
    /// Weak evidence
    Low,
}

labeled!(Confidence, "confidence", {
    High => "High",
    Medium => "Medium",
    Low => "Low",
});

/// One verification step recorded against a claim
///
/// Logs are never edited once appended to a claim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerificationLog {
    /// Unique identifier
    pub id: LogId,

    /// Claim this step verified
    pub claim_id: ClaimId,

    /// How the check was done (public records, interview, ...)
    pub method: String,

    /// URLs or document names consulted
    pub sources_found: Vec<String>,

    /// What the evidence showed
    pub finding: String,

    /// Outcome of this step
    pub verdict: ClaimStatus,

    /// Strength of the finding
    pub confidence: Confidence,

    /// When the step was recorded
    pub timestamp: DateTime<Utc>,
}

impl VerificationLog {
    /// Record a verification step now
    ///
    /// # Errors
    /// Returns [`DomainError::NoSourcesFound`] if no non-blank source is given.
    pub fn new(
        claim_id: ClaimId,
        method: impl Into<String>,
        sources_found: Vec<String>,
        finding: impl Into<String>,
        verdict: ClaimStatus,
        confidence: Confidence,
    ) -> Result<Self, DomainError> {
        let sources_found: Vec<String> = sources_found
            .into_iter()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        if sources_found.is_empty() {
            return Err(DomainError::NoSourcesFound);
        }

        Ok(Self {
            id: LogId::new(),
            claim_id,
            method: method.into(),
            sources_found,
            finding: finding.into(),
            verdict,
            confidence,
            timestamp: Utc::now(),
        })
    }
}

/// A discrete factual assertion tied to one story
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claim {
    /// Unique identifier
    pub id: ClaimId,

    /// Owning story
    pub story_id: StoryId,

    /// Verbatim or paraphrased assertion
    pub text: String,

    /// Kind of assertion
    #[serde(rename = "type")]
    pub claim_type: ClaimType,

    /// Risk priority
    pub priority: Priority,

    /// Who or what the claim is attributed to
    pub source: String,

    /// Free-text notes
    #[serde(default)]
    pub notes: String,

    #[serde(default)]
    status: ClaimStatus,

    #[serde(default)]
    verification_logs: Vec<VerificationLog>,
}

impl Claim {
    /// Create an unverified claim with no history
    pub fn new(
        id: ClaimId,
        story_id: StoryId,
        text: impl Into<String>,
        claim_type: ClaimType,
        priority: Priority,
        source: impl Into<String>,
    ) -> Self {
        Self {
            id,
            story_id,
            text: text.into(),
            claim_type,
            priority,
            source: source.into(),
            notes: String::new(),
            status: ClaimStatus::Unverified,
            verification_logs: Vec::new(),
        }
    }

    /// Attach notes
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }

    /// Current verification state
    pub fn status(&self) -> ClaimStatus {
        self.status
    }

    /// Explicitly change the verification state
    pub fn set_status(&mut self, status: ClaimStatus) {
        self.status = status;
    }

    /// Verification history in the order it was recorded
    pub fn verification_logs(&self) -> &[VerificationLog] {
        &self.verification_logs
    }

    /// Append a verification step
    ///
    /// # Errors
    /// Returns [`DomainError::LogClaimMismatch`] if the log names another claim.
    pub fn append_log(&mut self, log: VerificationLog) -> Result<(), DomainError> {
        if log.claim_id != self.id {
            return Err(DomainError::LogClaimMismatch {
                claim: self.id.to_string(),
                log_claim: log.claim_id.to_string(),
            });
        }
        self.verification_logs.push(log);
        Ok(())
    }

    /// True if `updated` keeps this claim's history as a prefix
    pub fn history_preserved_by(&self, updated: &Claim) -> bool {
        updated.verification_logs.starts_with(&self.verification_logs)
    }
}
