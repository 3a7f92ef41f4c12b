//! Factdesk Extractor
//!
//! Converts raw narrative text into candidate claims and sources using
//! rule-based heuristics.
//!
//! # Overview
//!
//! The pipeline is a pure function of its input:
//!
//! ```text
//! Text → Segmenter → Classifier rules → Claims
//!                         └→ Source Attributor → Sources
//! ```
//!
//! - **Segmentation**: sentences (or lines, if the text has no terminal
//!   punctuation); short segments are dropped
//! - **Classification**: numeric, quotation and attribution-phrase rules decide
//!   whether a segment is a claim and of which type
//! - **Attribution**: named parties become candidate sources, deduplicated
//!   within the run
//! - **Hints**: a title and summary for prefilling the story form
//!
//! # Example Usage
//!
//! ```
//! use factdesk_domain::StoryId;
//! use factdesk_extractor::{AnalyzerConfig, TextAnalyzer};
//!
//! let analyzer = TextAnalyzer::new(AnalyzerConfig::default());
//! let analysis = analyzer.analyze(
//!     "Police Chief Ruiz said burglaries fell by 12 percent this spring.",
//!     StoryId::new(),
//! );
//!
//! println!("Title: {}", analysis.title);
//! println!("Claims: {}", analysis.claims.len());
//! println!("Sources: {}", analysis.sources.len());
//! ```

#![warn(missing_docs)]

mod analyzer;
mod attribution;
mod classifier;
mod config;
mod error;
mod segment;
mod types;

#[cfg(test)]
mod tests;

pub use analyzer::{analyze, TextAnalyzer, AUTO_EXTRACTED_NOTE};
pub use attribution::{NameOutcome, SourceAttributor};
pub use classifier::{classify, Classification, ClassifierRule, Signal, RULES};
pub use config::{AnalyzerConfig, DEFAULT_MIN_SEGMENT_CHARS, DEFAULT_NAME_STOPLIST};
pub use error::ExtractorError;
pub use segment::{derive_summary, derive_title, Segmenter, Segments};
pub use types::{Analysis, AnalysisStats};
