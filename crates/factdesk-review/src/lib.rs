//! Factdesk Review
//!
//! Pre-publication checks over a story's claims.
//!
//! The review crate provides:
//! - Red-flag scanning (statistical hazards, vague attribution)
//! - The fact-check queue of high-priority claims
//! - Verification statistics and the pre-publication checklist
//! - The Markdown verification report
//!
//! # Examples
//!
//! ```
//! use factdesk_review::{RedFlagScanner, ScanConfig};
//!
//! let scanner = RedFlagScanner::new(ScanConfig::default());
//! let report = scanner.scan(&[]);
//! assert!(report.is_clean());
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod report;
mod scanner;

pub use config::ScanConfig;
pub use error::ReviewError;
pub use report::{
    priority_claims, render_report, report_file_name, Checklist, ChecklistItem, Report,
    ReviewStats,
};
pub use scanner::{
    scan_red_flags, FlagCategory, FlagIssue, RedFlag, RedFlagScanner, ScanReport, MANUAL_CHECKS,
};
