//! Red-flag scanner configuration

use serde::{Deserialize, Serialize};

use crate::error::ReviewError;

/// Configuration for the [`RedFlagScanner`](crate::RedFlagScanner)
///
/// Term lists are matched as case-insensitive substrings of the claim text
/// (statistical checks) or the claim's source label (attribution check).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Flag percentages stated without a comparison point
    pub check_baseline: bool,

    /// Flag averages that do not say which average
    pub check_average: bool,

    /// Flag "up to" style upper-bound phrasing
    pub check_weasel_words: bool,

    /// Flag sources that name a category instead of a person
    pub check_vague_attribution: bool,

    /// Words that indicate a percentage
    pub percent_terms: Vec<String>,

    /// Words that indicate a baseline is given
    pub baseline_terms: Vec<String>,

    /// Words that indicate an average
    pub average_terms: Vec<String>,

    /// Words that say which average is meant
    pub average_qualifiers: Vec<String>,

    /// Upper-bound phrases
    pub weasel_terms: Vec<String>,

    /// Category words in a source label
    pub vague_source_terms: Vec<String>,

    /// Source labels with fewer whitespace tokens than this are vague
    pub vague_attribution_max_tokens: usize,
}

fn strings(terms: &[&str]) -> Vec<String> {
    terms.iter().map(|s| s.to_string()).collect()
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            check_baseline: true,
            check_average: true,
            check_weasel_words: true,
            check_vague_attribution: true,
            percent_terms: strings(&["percent", "%"]),
            baseline_terms: strings(&["compare", "from", "base"]),
            average_terms: strings(&["average"]),
            average_qualifiers: strings(&["median", "mean"]),
            weasel_terms: strings(&["up to", "as much as"]),
            vague_source_terms: strings(&["expert", "official", "source"]),
            vague_attribution_max_tokens: 3,
        }
    }
}

impl ScanConfig {
    /// Create a permissive configuration (only the weasel-word check)
    pub fn permissive() -> Self {
        Self {
            check_baseline: false,
            check_average: false,
            check_vague_attribution: false,
            ..Self::default()
        }
    }

    /// Create a strict configuration
    ///
    /// Three-word labels such as "Senior city official" are also
    /// treated as vague.
    pub fn strict() -> Self {
        Self {
            vague_attribution_max_tokens: 4,
            ..Self::default()
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ReviewError> {
        if self.check_vague_attribution && self.vague_attribution_max_tokens == 0 {
            return Err(ReviewError::Config(
                "vague_attribution_max_tokens must be greater than 0".to_string(),
            ));
        }

        let lists = [
            ("percent_terms", &self.percent_terms),
            ("baseline_terms", &self.baseline_terms),
            ("average_terms", &self.average_terms),
            ("average_qualifiers", &self.average_qualifiers),
            ("weasel_terms", &self.weasel_terms),
            ("vague_source_terms", &self.vague_source_terms),
        ];
        for (name, terms) in lists {
            if terms.iter().any(|t| t.is_empty()) {
                return Err(ReviewError::Config(format!("{} entries cannot be empty", name)));
            }
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, ReviewError> {
        let config: Self = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, ReviewError> {
        Ok(toml::to_string_pretty(self)?)
    }
}
