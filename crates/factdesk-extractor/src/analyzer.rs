//! Core TextAnalyzer implementation

use factdesk_domain::{Claim, IdSource, RandomIds, StoryId};
use tracing::{debug, info};

use crate::attribution::{NameOutcome, SourceAttributor};
use crate::classifier::classify;
use crate::config::AnalyzerConfig;
use crate::segment::{derive_summary, derive_title, Segmenter};
use crate::types::{Analysis, AnalysisStats};

/// Note attached to every auto-extracted claim
pub const AUTO_EXTRACTED_NOTE: &str = "Auto-extracted from text";

/// The TextAnalyzer converts raw narrative text into candidate claims and sources
///
/// Analysis is a pure function of the text, the story id and the
/// configuration. It cannot fail: any string, including an empty one,
/// yields a (possibly empty) [`Analysis`].
#[derive(Debug, Clone, Default)]
pub struct TextAnalyzer {
    config: AnalyzerConfig,
}

impl TextAnalyzer {
    /// Create a new TextAnalyzer
    pub fn new(config: AnalyzerConfig) -> Self {
        Self { config }
    }

    /// Active configuration
    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Analyze text with fresh UUIDv7 identities
    pub fn analyze(&self, text: &str, story_id: StoryId) -> Analysis {
        self.analyze_with_ids(text, story_id, &mut RandomIds)
    }

    /// Analyze text drawing identities from `ids`
    pub fn analyze_with_ids<I: IdSource + ?Sized>(
        &self,
        text: &str,
        story_id: StoryId,
        ids: &mut I,
    ) -> Analysis {
        let segmenter = Segmenter::new(self.config.min_segment_chars);
        let mut attributor = SourceAttributor::new(&self.config, story_id);
        let mut stats = AnalysisStats::default();
        let mut claims = Vec::new();
        let mut sources = Vec::new();

        for segment in segmenter.segments(text) {
            stats.segments_classified += 1;

            let Some(classification) = classify(segment) else {
                continue;
            };

            if let Some(name) = classification.attributed_to {
                let (outcome, source) = attributor.propose(name, segment, ids);
                match outcome {
                    NameOutcome::Stopword => stats.names_rejected += 1,
                    NameOutcome::Duplicate => stats.names_repeated += 1,
                    NameOutcome::Proposed => {}
                }
                sources.extend(source);
            }

            debug!(
                claim_type = %classification.claim_type,
                priority = %classification.priority,
                "Extracted claim from segment {}",
                stats.segments_classified
            );
            claims.push(
                Claim::new(
                    ids.claim_id(),
                    story_id,
                    segment,
                    classification.claim_type,
                    classification.priority,
                    classification.source_label(),
                )
                .with_notes(AUTO_EXTRACTED_NOTE),
            );
        }

        info!(
            "Analyzed {} chars: {} segments, {} claims, {} sources",
            text.len(),
            stats.segments_classified,
            claims.len(),
            sources.len()
        );

        Analysis {
            title: derive_title(text, self.config.title_max_chars),
            summary: derive_summary(text, self.config.summary_lines, self.config.summary_max_chars),
            claims,
            sources,
            stats,
        }
    }
}

/// Analyze text with the default configuration
///
/// # Examples
///
/// ```
/// use factdesk_domain::{ClaimStatus, ClaimType, StoryId};
///
/// let analysis = factdesk_extractor::analyze(
///     "Officials said the city saw a 22% rise in shelter use.",
///     StoryId::new(),
/// );
/// assert_eq!(analysis.claims.len(), 1);
/// assert_eq!(analysis.claims[0].claim_type, ClaimType::Statistical);
/// assert_eq!(analysis.claims[0].status(), ClaimStatus::Unverified);
/// assert_eq!(analysis.sources[0].name, "Officials");
/// ```
pub fn analyze(text: &str, story_id: StoryId) -> Analysis {
    TextAnalyzer::default().analyze(text, story_id)
}
