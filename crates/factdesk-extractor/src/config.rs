//! Configuration for the text analyzer

use serde::{Deserialize, Serialize};

use crate::error::ExtractorError;

/// Segments shorter than this (in chars, after trimming) are too short to
/// carry an independent factual assertion.
pub const DEFAULT_MIN_SEGMENT_CHARS: usize = 20;

/// Capitalized words the attribution pattern picks up that are not names
pub const DEFAULT_NAME_STOPLIST: &[&str] = &["He", "She", "It", "They", "The", "However", "But"];

/// Configuration for the [`TextAnalyzer`](crate::TextAnalyzer)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Minimum segment length kept for classification (chars)
    pub min_segment_chars: usize,

    /// Maximum derived title length (chars)
    pub title_max_chars: usize,

    /// Number of leading non-empty lines joined into the summary
    pub summary_lines: usize,

    /// Maximum derived summary length before the ellipsis (chars)
    pub summary_max_chars: usize,

    /// How much of the triggering segment is quoted in a source's notes (chars)
    pub provenance_chars: usize,

    /// Attributed names rejected as sources (exact match)
    pub name_stoplist: Vec<String>,
}

impl AnalyzerConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ExtractorError> {
        if self.title_max_chars == 0 {
            return Err(ExtractorError::Config(
                "title_max_chars must be greater than 0".to_string(),
            ));
        }
        if self.summary_lines == 0 {
            return Err(ExtractorError::Config(
                "summary_lines must be greater than 0".to_string(),
            ));
        }
        if self.summary_max_chars == 0 {
            return Err(ExtractorError::Config(
                "summary_max_chars must be greater than 0".to_string(),
            ));
        }
        if self.name_stoplist.iter().any(|n| n.trim().is_empty()) {
            return Err(ExtractorError::Config(
                "name_stoplist entries cannot be blank".to_string(),
            ));
        }
        Ok(())
    }

    /// Whether a captured name is on the stoplist
    pub fn is_stopword(&self, name: &str) -> bool {
        self.name_stoplist.iter().any(|n| n == name)
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, ExtractorError> {
        let config: Self = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, ExtractorError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            min_segment_chars: DEFAULT_MIN_SEGMENT_CHARS,
            title_max_chars: 100,
            summary_lines: 3,
            summary_max_chars: 500,
            provenance_chars: 50,
            name_stoplist: DEFAULT_NAME_STOPLIST.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl AnalyzerConfig {
    /// Thorough preset: keep shorter segments such as terse quotes
    pub fn thorough() -> Self {
        Self {
            min_segment_chars: 10,
            ..Self::default()
        }
    }

    /// Conservative preset: only long, sentence-like segments
    pub fn conservative() -> Self {
        Self {
            min_segment_chars: 40,
            ..Self::default()
        }
    }
}
