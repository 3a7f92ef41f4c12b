//! Result types for analysis

use factdesk_domain::{Claim, Source};
use serde::{Deserialize, Serialize};

/// Everything extracted from one piece of text
///
/// Claims and sources are candidates for human review; the caller decides
/// whether and how to merge them into a story.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    /// Title hint (first non-empty line)
    pub title: String,

    /// Summary hint (first lines, truncated)
    pub summary: String,

    /// Candidate claims in text order
    pub claims: Vec<Claim>,

    /// Candidate sources in order of first mention
    pub sources: Vec<Source>,

    /// Counters about the run
    pub stats: AnalysisStats,
}

impl Analysis {
    /// True if nothing claim-worthy was found
    pub fn is_empty(&self) -> bool {
        self.claims.is_empty() && self.sources.is_empty()
    }

    /// Split into claims and sources for merging
    pub fn into_parts(self) -> (Vec<Claim>, Vec<Source>) {
        (self.claims, self.sources)
    }
}

/// Counters about an analysis run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisStats {
    /// Segments long enough to classify
    pub segments_classified: usize,

    /// Attributed names rejected by the stoplist
    pub names_rejected: usize,

    /// Attributed names already proposed earlier in the run
    pub names_repeated: usize,
}
