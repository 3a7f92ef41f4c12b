//! Red-flag heuristics over claims
//!
//! Two detectors run over a claim list. The statistical detector looks at
//! the text of Statistical claims; the attribution detector looks at the
//! source label of Attribution claims. Each check is independent, so one
//! claim can raise several flags. Flags are advisory and never change the
//! claims they point at.

use factdesk_domain::{Claim, ClaimType};
use serde::{Serialize, Serializer};
use tracing::debug;

use crate::config::ScanConfig;

/// Checks the heuristics cannot make, left to the reporter
pub const MANUAL_CHECKS: [&str; 4] = [
    "Do percent changes include the base numbers? (e.g., \"up 50% from 10 to 15\")",
    "Are comparisons apples-to-apples? (Same time period, same methodology?)",
    "Does \"Record High\" account for inflation or population growth?",
    "Is the \"Expert\" actually an expert in this specific field?",
];

/// Which detector raised a flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlagCategory {
    /// Numbers without context
    Statistical,
    /// Sources that are categories rather than people
    Attribution,
}

impl FlagCategory {
    /// Section heading for this category
    pub fn heading(&self) -> &'static str {
        match self {
            FlagCategory::Statistical => "Statistical Hazards",
            FlagCategory::Attribution => "Attribution & Vague Sources",
        }
    }
}

/// The problem a flag points out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlagIssue {
    /// Percentage with no comparison point
    MissingBaseline,
    /// "Average" without saying mean or median
    AmbiguousAverage,
    /// Upper-bound phrasing such as "up to"
    WeaselWords,
    /// Source label names a category
    VagueAttribution,
}

impl FlagIssue {
    /// Message shown to the reporter
    pub fn message(&self) -> &'static str {
        match self {
            FlagIssue::MissingBaseline => "Percentage without clear baseline?",
            FlagIssue::AmbiguousAverage => "Average used — check if mean vs median matters.",
            FlagIssue::WeaselWords => "Weasel words 'up to' detected.",
            FlagIssue::VagueAttribution => "Vague attribution detected ('Experts', 'Officials').",
        }
    }

    /// Detector this issue belongs to
    pub fn category(&self) -> FlagCategory {
        match self {
            FlagIssue::VagueAttribution => FlagCategory::Attribution,
            _ => FlagCategory::Statistical,
        }
    }
}

impl std::fmt::Display for FlagIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

impl Serialize for FlagIssue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.message())
    }
}

/// A claim together with one issue found in it
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RedFlag<'a> {
    /// The flagged claim
    pub claim: &'a Claim,
    /// What is wrong with it
    pub issue: FlagIssue,
}

/// Flags from both detectors, each in claim order
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ScanReport<'a> {
    /// Flags on Statistical claims
    pub statistical: Vec<RedFlag<'a>>,
    /// Flags on Attribution claims
    pub attribution: Vec<RedFlag<'a>>,
}

impl<'a> ScanReport<'a> {
    /// True if no flag was raised
    pub fn is_clean(&self) -> bool {
        self.statistical.is_empty() && self.attribution.is_empty()
    }

    /// Total number of flags
    pub fn len(&self) -> usize {
        self.statistical.len() + self.attribution.len()
    }

    /// True if no flag was raised
    pub fn is_empty(&self) -> bool {
        self.is_clean()
    }

    /// Flags of one category
    pub fn flags(&self, category: FlagCategory) -> &[RedFlag<'a>] {
        match category {
            FlagCategory::Statistical => &self.statistical,
            FlagCategory::Attribution => &self.attribution,
        }
    }

    /// All flags, statistical first
    pub fn iter(&self) -> impl Iterator<Item = &RedFlag<'a>> {
        self.statistical.iter().chain(self.attribution.iter())
    }
}

/// Lower-cased term lists, prepared once per scanner
#[derive(Debug, Clone)]
struct Terms(Vec<String>);

impl Terms {
    fn new(terms: &[String]) -> Self {
        Self(terms.iter().map(|t| t.to_lowercase()).collect())
    }

    fn any_in(&self, haystack: &str) -> bool {
        self.0.iter().any(|t| haystack.contains(t.as_str()))
    }
}

/// Scans claims for common verification pitfalls
#[derive(Debug, Clone)]
pub struct RedFlagScanner {
    config: ScanConfig,
    percent: Terms,
    baseline: Terms,
    average: Terms,
    average_qualifiers: Terms,
    weasel: Terms,
    vague_source: Terms,
}

impl Default for RedFlagScanner {
    fn default() -> Self {
        Self::new(ScanConfig::default())
    }
}

impl RedFlagScanner {
    /// Create a new scanner with the given configuration
    pub fn new(config: ScanConfig) -> Self {
        Self {
            percent: Terms::new(&config.percent_terms),
            baseline: Terms::new(&config.baseline_terms),
            average: Terms::new(&config.average_terms),
            average_qualifiers: Terms::new(&config.average_qualifiers),
            weasel: Terms::new(&config.weasel_terms),
            vague_source: Terms::new(&config.vague_source_terms),
            config,
        }
    }

    /// Active configuration
    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// Run both detectors over `claims`
    pub fn scan<'a>(&self, claims: &'a [Claim]) -> ScanReport<'a> {
        let report = ScanReport {
            statistical: self.statistical_flags(claims),
            attribution: self.attribution_flags(claims),
        };
        debug!(
            claims = claims.len(),
            statistical = report.statistical.len(),
            attribution = report.attribution.len(),
            "Red-flag scan complete"
        );
        report
    }

    /// Issues in one Statistical claim's text, in check order
    pub fn statistical_issues(&self, text: &str) -> Vec<FlagIssue> {
        let text = text.to_lowercase();
        let mut issues = Vec::new();

        if self.config.check_baseline && self.percent.any_in(&text) && !self.baseline.any_in(&text) {
            issues.push(FlagIssue::MissingBaseline);
        }
        if self.config.check_average
            && self.average.any_in(&text)
            && !self.average_qualifiers.any_in(&text)
        {
            issues.push(FlagIssue::AmbiguousAverage);
        }
        if self.config.check_weasel_words && self.weasel.any_in(&text) {
            issues.push(FlagIssue::WeaselWords);
        }
        issues
    }

    /// Whether a source label names a category rather than a person
    pub fn is_vague_source(&self, label: &str) -> bool {
        let label = label.to_lowercase();
        self.config.check_vague_attribution
            && self.vague_source.any_in(&label)
            && label.split_whitespace().count() < self.config.vague_attribution_max_tokens
    }

    fn statistical_flags<'a>(&self, claims: &'a [Claim]) -> Vec<RedFlag<'a>> {
        claims
            .iter()
            .filter(|c| c.claim_type == ClaimType::Statistical)
            .flat_map(|claim| {
                self.statistical_issues(&claim.text)
                    .into_iter()
                    .map(move |issue| RedFlag { claim, issue })
            })
            .collect()
    }

    fn attribution_flags<'a>(&self, claims: &'a [Claim]) -> Vec<RedFlag<'a>> {
        claims
            .iter()
            .filter(|c| c.claim_type == ClaimType::Attribution)
            .filter(|c| self.is_vague_source(&c.source))
            .map(|claim| RedFlag {
                claim,
                issue: FlagIssue::VagueAttribution,
            })
            .collect()
    }
}

/// Scan claims with the default configuration
///
/// # Examples
///
/// ```
/// use factdesk_domain::{Claim, ClaimId, ClaimType, Priority, StoryId};
/// use factdesk_review::{scan_red_flags, FlagIssue};
///
/// let claim = Claim::new(
///     ClaimId::new(),
///     StoryId::new(),
///     "Crime rose by up to 40% from last year.",
///     ClaimType::Statistical,
///     Priority::High,
///     "Text Analysis",
/// );
/// let claims = [claim];
/// let report = scan_red_flags(&claims);
///
/// assert_eq!(report.statistical.len(), 1);
/// assert_eq!(report.statistical[0].issue, FlagIssue::WeaselWords);
/// assert!(report.attribution.is_empty());
/// ```
pub fn scan_red_flags(claims: &[Claim]) -> ScanReport<'_> {
    RedFlagScanner::default().scan(claims)
}
