//! CLI command definitions and argument parsing.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{ArgAction, Parser, Subcommand};
use factdesk_domain::{
    ClaimId, ClaimStatus, ClaimType, Confidence, Corroboration, MergePolicy, Priority,
    Sensitivity, SourceAssessment, SourceId, SourceStake, SourceType,
};
use factdesk_review::ChecklistItem;

/// Factdesk - Find the claims in a story draft and check them before filing.
#[derive(Debug, Parser)]
#[command(name = "factdesk")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Workspace file (.json snapshot or .db SQLite database)
    #[arg(short, long, global = true, env = "FACTDESK_WORKSPACE")]
    pub workspace: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (IDs only)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Open a new story
    Intake(IntakeArgs),

    /// Extract candidate claims and sources from text
    Analyze(AnalyzeArgs),

    /// Scan claims for statistical and attribution red flags
    Scan(ScanArgs),

    /// Add or remove claims by hand
    Claim(ClaimArgs),

    /// Add or remove sources by hand
    Source(SourceArgs),

    /// Suggest a credibility assessment for a source profile
    Assess(AssessArgs),

    /// Record a verification step for a claim
    Verify(VerifyArgs),

    /// Change a claim's verification status
    Status(StatusArgs),

    /// Show the open story, its claims and sources
    Show(ShowArgs),

    /// Generate the pre-publication verification report
    Report(ReportArgs),

    /// Close the story and clear the workspace
    Reset(ResetArgs),
}

/// Arguments for the intake command.
#[derive(Debug, Parser)]
pub struct IntakeArgs {
    /// Working title
    #[arg(short, long)]
    pub title: String,

    /// What the piece is about
    #[arg(short, long, default_value = "")]
    pub summary: String,

    /// Filing deadline (YYYY-MM-DD)
    #[arg(short, long)]
    pub deadline: NaiveDate,

    /// Handling level (standard, feature, profile, investigative, breaking-news)
    #[arg(long, default_value = "standard")]
    pub sensitivity: Sensitivity,

    /// Replace an open story that still has claims or sources
    #[arg(long)]
    pub force: bool,
}

/// Arguments for the analyze command.
#[derive(Debug, Parser)]
pub struct AnalyzeArgs {
    /// Text file to analyze, or '-' for stdin
    #[arg(default_value = "-")]
    pub input: String,

    /// Merge the results into the open story
    #[arg(long)]
    pub save: bool,

    /// How saved results combine with existing claims and sources
    #[arg(long, value_enum, default_value = "append", requires = "save")]
    pub merge: MergeArg,

    /// Override the minimum segment length (chars)
    #[arg(long)]
    pub min_chars: Option<usize>,
}

/// Arguments for the scan command.
#[derive(Debug, Parser)]
pub struct ScanArgs {
    /// JSON file with a list of claims (defaults to the workspace claims)
    #[arg(short, long)]
    pub input: Option<PathBuf>,
}

/// Arguments for manual claim entry.
#[derive(Debug, Parser)]
pub struct ClaimArgs {
    #[command(subcommand)]
    pub action: ClaimAction,
}

/// Manual claim actions.
#[derive(Debug, Subcommand)]
pub enum ClaimAction {
    /// Add a claim to the open story
    Add {
        /// Exact claim as stated or paraphrased
        text: String,
        /// Kind of claim (factual, statistical, historical, attribution, identity)
        #[arg(short = 't', long = "type", default_value = "factual")]
        claim_type: ClaimType,
        /// Fact-check priority (critical, high, medium, low)
        #[arg(short, long, default_value = "medium")]
        priority: Priority,
        /// Who made the claim
        #[arg(short, long, default_value = "")]
        source: String,
        /// Reporter's notes
        #[arg(short, long, default_value = "")]
        notes: String,
    },

    /// Remove a claim and its verification history
    Remove {
        /// Claim to remove
        claim_id: ClaimId,
    },
}

/// Arguments for manual source entry.
#[derive(Debug, Parser)]
pub struct SourceArgs {
    #[command(subcommand)]
    pub action: SourceAction,
}

/// Manual source actions.
#[derive(Debug, Subcommand)]
pub enum SourceAction {
    /// Add a source; its assessment is derived from the profile
    Add {
        /// Name of the person, office or document
        name: String,
        /// Relationship to the events (primary, secondary, anonymous, documentary)
        #[arg(short = 't', long, default_value = "primary")]
        source_type: SourceType,
        /// Conflict of interest (none, low, medium, high)
        #[arg(short, long, default_value = "none")]
        stake: SourceStake,
        /// Independent confirmation (yes, no, partially)
        #[arg(long, default_value = "no")]
        corroborated: Corroboration,
        /// Identity must not be published
        #[arg(long)]
        confidential: bool,
        /// Reporter's notes
        #[arg(short, long, default_value = "")]
        notes: String,
    },

    /// Remove a source
    Remove {
        /// Source to remove
        source_id: SourceId,
    },
}

/// Arguments for the assess command.
#[derive(Debug, Parser)]
pub struct AssessArgs {
    /// Relationship to the events (primary, secondary, anonymous, documentary)
    #[arg(short = 't', long)]
    pub source_type: SourceType,

    /// Conflict of interest (none, low, medium, high)
    #[arg(short, long, default_value = "none")]
    pub stake: SourceStake,

    /// Independent confirmation (yes, no, partially)
    #[arg(long, default_value = "no")]
    pub corroborated: Corroboration,

    /// Apply the profile to this workspace source
    #[arg(long)]
    pub source: Option<SourceId>,

    /// Pin the source's assessment regardless of its profile
    #[arg(long, requires = "source", conflicts_with = "clear_override")]
    pub override_with: Option<SourceAssessment>,

    /// Drop a pinned assessment
    #[arg(long, requires = "source")]
    pub clear_override: bool,
}

/// Arguments for the verify command.
#[derive(Debug, Parser)]
pub struct VerifyArgs {
    /// Claim to verify
    pub claim_id: ClaimId,

    /// How the check was done
    #[arg(short, long)]
    pub method: String,

    /// Document or URL consulted (repeatable)
    #[arg(long = "found", required = true, num_args = 1..)]
    pub sources_found: Vec<String>,

    /// What the evidence showed
    #[arg(long)]
    pub finding: String,

    /// Outcome of this step
    #[arg(long)]
    pub verdict: ClaimStatus,

    /// Strength of the finding
    #[arg(long, default_value = "high")]
    pub confidence: Confidence,

    /// Also set the claim's status to the verdict
    #[arg(long)]
    pub apply: bool,
}

/// Arguments for the status command.
#[derive(Debug, Parser)]
pub struct StatusArgs {
    /// Claim to update
    pub claim_id: ClaimId,

    /// New status
    pub status: ClaimStatus,
}

/// Arguments for the show command.
#[derive(Debug, Parser)]
pub struct ShowArgs {
    /// Only show the fact-check queue (critical and high priority claims)
    #[arg(short, long)]
    pub queue: bool,

    /// Only show claims of this priority
    #[arg(short, long, conflicts_with = "queue")]
    pub priority: Option<Priority>,
}

/// Arguments for the report command.
#[derive(Debug, Parser)]
pub struct ReportArgs {
    /// Checklist items confirmed (critical-claims, named-roles, statistics,
    /// quotes, conflicts, anonymous, spellcheck, causality)
    #[arg(long = "check", num_args = 1..)]
    pub checked: Vec<ChecklistItem>,

    /// Confirm every checklist item
    #[arg(long, conflicts_with = "checked")]
    pub all_checked: bool,

    /// Write the report to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Write the report to verification-report-<id>.md
    #[arg(long, conflicts_with = "output")]
    pub save: bool,

    /// Refuse to write unless every checklist item is confirmed
    #[arg(long)]
    pub require_complete: bool,
}

/// Arguments for the reset command.
#[derive(Debug, Parser)]
pub struct ResetArgs {
    /// Skip confirmation
    #[arg(short = 'y', long)]
    pub yes: bool,
}

/// Merge policy argument.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum MergeArg {
    /// Keep existing claims and sources
    Append,
    /// Discard existing claims and sources first
    Replace,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}

impl From<MergeArg> for MergePolicy {
    fn from(merge: MergeArg) -> Self {
        match merge {
            MergeArg::Append => MergePolicy::Append,
            MergeArg::Replace => MergePolicy::Replace,
        }
    }
}
