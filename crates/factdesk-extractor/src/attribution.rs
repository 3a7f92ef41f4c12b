//! Turning attributed names into candidate sources

use std::collections::HashSet;

use factdesk_domain::{Corroboration, IdSource, Source, SourceStake, SourceType, StoryId};
use tracing::debug;

use crate::config::AnalyzerConfig;
use crate::segment::truncate_chars;

/// Why an attributed name did not become a new source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameOutcome {
    /// A new source was proposed
    Proposed,
    /// The name is on the stoplist
    Stopword,
    /// The name was already proposed in this run
    Duplicate,
}

/// Proposes sources for attributed names during one extraction run.
///
/// The seen-name set lives only as long as the attributor, so names are
/// deduplicated within a run (exact, case-sensitive) and never across runs.
#[derive(Debug)]
pub struct SourceAttributor<'c> {
    config: &'c AnalyzerConfig,
    story_id: StoryId,
    seen: HashSet<String>,
}

impl<'c> SourceAttributor<'c> {
    /// Start a run for one story
    pub fn new(config: &'c AnalyzerConfig, story_id: StoryId) -> Self {
        Self {
            config,
            story_id,
            seen: HashSet::new(),
        }
    }

    /// Offer a name captured from `segment`.
    ///
    /// Accepted names become a primary, unconfidential, uncorroborated
    /// source that requires corroboration until a human upgrades it.
    pub fn propose<I: IdSource + ?Sized>(
        &mut self,
        name: &str,
        segment: &str,
        ids: &mut I,
    ) -> (NameOutcome, Option<Source>) {
        if self.config.is_stopword(name) {
            debug!(name, "Rejected stopword attribution");
            return (NameOutcome::Stopword, None);
        }
        if !self.seen.insert(name.to_string()) {
            return (NameOutcome::Duplicate, None);
        }

        let notes = format!(
            "Auto-extracted from context: \"{}...\"",
            truncate_chars(segment, self.config.provenance_chars)
        );
        let source = Source::new(
            ids.source_id(),
            self.story_id,
            name,
            SourceType::Primary,
            SourceStake::None,
            Corroboration::No,
        )
        .with_confidential(false)
        .with_notes(notes);

        debug!(name, "Proposed source");
        (NameOutcome::Proposed, Some(source))
    }
}
