//! Factdesk CLI library.
//!
//! Command-line front end for the factdesk workspace: open a story, pull
//! candidate claims out of a draft, scan them for red flags, record
//! verification steps, and render the pre-publication report.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod fetch;
pub mod output;

pub use cli::{Cli, Command};
pub use config::Config;
pub use error::{CliError, Result};
pub use fetch::LocalFetcher;
pub use output::Formatter;
