//! Review error types

use thiserror::Error;

/// Errors that can occur while configuring review checks
#[derive(Error, Debug)]
pub enum ReviewError {
    /// Configuration values are out of range
    #[error("Configuration error: {0}")]
    Config(String),

    /// TOML could not be parsed
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// TOML could not be produced
    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    /// Checklist item name not recognized
    #[error("Unknown checklist item: {0}")]
    UnknownChecklistItem(String),
}
