//! Error types for the Extractor
//!
//! Analysis itself cannot fail; errors only come from loading configuration.

use thiserror::Error;

/// Errors that can occur while configuring the analyzer
#[derive(Error, Debug)]
pub enum ExtractorError {
    /// Configuration values are out of range
    #[error("Configuration error: {0}")]
    Config(String),

    /// TOML could not be parsed
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// TOML could not be produced
    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}
