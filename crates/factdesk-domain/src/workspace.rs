//! The working set of one story: its claims and sources
//!
//! This is the aggregate the store collaborator loads and saves. Every edit
//! checks that claims and sources belong to the open story, and claim
//! updates may only extend verification history, never rewrite it.

use serde::{Deserialize, Serialize};

use crate::{
    Claim, ClaimId, ClaimStatus, DomainError, Source, SourceId, Story, StoryId, VerificationLog,
};

/// How extraction output is folded into an existing workspace
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MergePolicy {
    /// Keep what is there and add the new items after it
    #[default]
    Append,
    /// Discard existing claims and sources first
    Replace,
}

/// Counts of a merge, for reporting back to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MergeSummary {
    /// Claims added
    pub claims_added: usize,
    /// Sources added
    pub sources_added: usize,
    /// Claims dropped by a replace
    pub claims_removed: usize,
    /// Sources dropped by a replace
    pub sources_removed: usize,
}

/// Current story with its claims and sources
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Workspace {
    #[serde(default)]
    story: Option<Story>,
    #[serde(default)]
    claims: Vec<Claim>,
    #[serde(default)]
    sources: Vec<Source>,
}

impl Workspace {
    /// Empty workspace with no story
    pub fn new() -> Self {
        Self::default()
    }

    /// The open story, if any
    pub fn story(&self) -> Option<&Story> {
        self.story.as_ref()
    }

    /// Claims in insertion order
    pub fn claims(&self) -> &[Claim] {
        &self.claims
    }

    /// Sources in insertion order
    pub fn sources(&self) -> &[Source] {
        &self.sources
    }

    /// Look up a claim
    pub fn claim(&self, id: ClaimId) -> Option<&Claim> {
        self.claims.iter().find(|c| c.id == id)
    }

    /// Look up a source
    pub fn source(&self, id: SourceId) -> Option<&Source> {
        self.sources.iter().find(|s| s.id == id)
    }

    /// Open a story. Switching to a different story clears claims and sources.
    pub fn set_story(&mut self, story: Story) {
        if self.story.as_ref().map(|s| s.id) != Some(story.id) {
            self.claims.clear();
            self.sources.clear();
        }
        self.story = Some(story);
    }

    /// Edit the open story in place
    pub fn update_story(&mut self, edit: impl FnOnce(&mut Story)) -> Result<(), DomainError> {
        let story = self.story.as_mut().ok_or(DomainError::NoStory)?;
        let id = story.id;
        edit(&mut *story);
        story.id = id;
        story.touch();
        Ok(())
    }

    /// Add a claim to the open story
    pub fn add_claim(&mut self, claim: Claim) -> Result<(), DomainError> {
        self.check_story("claim", claim.story_id)?;
        self.claims.push(claim);
        Ok(())
    }

    /// Replace a claim with an edited copy
    ///
    /// # Errors
    /// Fails if the claim is unknown, moved to another story, or drops
    /// verification logs that were already recorded.
    pub fn update_claim(&mut self, claim: Claim) -> Result<(), DomainError> {
        self.check_story("claim", claim.story_id)?;
        let slot = self
            .claims
            .iter_mut()
            .find(|c| c.id == claim.id)
            .ok_or_else(|| not_found("claim", claim.id))?;
        if !slot.history_preserved_by(&claim) {
            return Err(DomainError::LogHistoryRewritten(claim.id.to_string()));
        }
        *slot = claim;
        Ok(())
    }

    /// Remove a claim, returning it
    pub fn remove_claim(&mut self, id: ClaimId) -> Result<Claim, DomainError> {
        let idx = self
            .claims
            .iter()
            .position(|c| c.id == id)
            .ok_or_else(|| not_found("claim", id))?;
        Ok(self.claims.remove(idx))
    }

    /// Explicitly change a claim's verification state
    pub fn set_claim_status(&mut self, id: ClaimId, status: ClaimStatus) -> Result<(), DomainError> {
        self.claim_mut(id)?.set_status(status);
        Ok(())
    }

    /// Append a verification step to a claim
    pub fn append_verification_log(
        &mut self,
        id: ClaimId,
        log: VerificationLog,
    ) -> Result<(), DomainError> {
        self.claim_mut(id)?.append_log(log)
    }

    /// Add a source to the open story
    pub fn add_source(&mut self, source: Source) -> Result<(), DomainError> {
        self.check_story("source", source.story_id)?;
        self.sources.push(source);
        Ok(())
    }

    /// Replace a source with an edited copy
    pub fn update_source(&mut self, source: Source) -> Result<(), DomainError> {
        self.check_story("source", source.story_id)?;
        let slot = self
            .sources
            .iter_mut()
            .find(|s| s.id == source.id)
            .ok_or_else(|| not_found("source", source.id))?;
        *slot = source;
        Ok(())
    }

    /// Mutable access to a source, for profile edits and overrides
    pub fn source_mut(&mut self, id: SourceId) -> Result<&mut Source, DomainError> {
        self.sources
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or_else(|| not_found("source", id))
    }

    /// Remove a source, returning it
    pub fn remove_source(&mut self, id: SourceId) -> Result<Source, DomainError> {
        let idx = self
            .sources
            .iter()
            .position(|s| s.id == id)
            .ok_or_else(|| not_found("source", id))?;
        Ok(self.sources.remove(idx))
    }

    /// Fold extraction output into the workspace
    ///
    /// Nothing is changed if any item belongs to another story.
    pub fn merge(
        &mut self,
        claims: Vec<Claim>,
        sources: Vec<Source>,
        policy: MergePolicy,
    ) -> Result<MergeSummary, DomainError> {
        for claim in &claims {
            self.check_story("claim", claim.story_id)?;
        }
        for source in &sources {
            self.check_story("source", source.story_id)?;
        }

        let mut summary = MergeSummary {
            claims_added: claims.len(),
            sources_added: sources.len(),
            ..MergeSummary::default()
        };
        if policy == MergePolicy::Replace {
            summary.claims_removed = self.claims.len();
            summary.sources_removed = self.sources.len();
            self.claims.clear();
            self.sources.clear();
        }
        self.claims.extend(claims);
        self.sources.extend(sources);
        Ok(summary)
    }

    /// Close the story and drop everything
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    fn claim_mut(&mut self, id: ClaimId) -> Result<&mut Claim, DomainError> {
        self.claims
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| not_found("claim", id))
    }

    fn check_story(&self, kind: &'static str, found: StoryId) -> Result<(), DomainError> {
        let story = self.story.as_ref().ok_or(DomainError::NoStory)?;
        if story.id != found {
            return Err(DomainError::StoryMismatch {
                kind,
                expected: story.id.to_string(),
                found: found.to_string(),
            });
        }
        Ok(())
    }
}

fn not_found(kind: &'static str, id: impl ToString) -> DomainError {
    DomainError::NotFound {
        kind,
        id: id.to_string(),
    }
}
