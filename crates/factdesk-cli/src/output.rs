//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use factdesk_domain::{Claim, ClaimStatus, Source, SourceAssessment, Story};
use factdesk_extractor::Analysis;
use factdesk_review::{FlagCategory, ReviewStats, ScanReport, MANUAL_CHECKS};
use serde::Serialize;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Longest claim excerpt shown in a table cell
const EXCERPT_CHARS: usize = 60;

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Active output format.
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Format the result of a text analysis.
    pub fn format_analysis(&self, analysis: &Analysis) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(analysis)?),
            OutputFormat::Quiet => Ok(ids(analysis.claims.iter().map(|c| c.id.to_string()))),
            OutputFormat::Table => {
                let mut out = Vec::new();
                if !analysis.title.is_empty() {
                    out.push(format!("{} {}", self.colorize("Title:", "cyan"), analysis.title));
                }
                if !analysis.summary.is_empty() {
                    out.push(format!("{} {}", self.colorize("Summary:", "cyan"), analysis.summary));
                }
                let claims: Vec<&Claim> = analysis.claims.iter().collect();
                out.push(self.format_claims_table(&claims));
                if !analysis.sources.is_empty() {
                    out.push(self.format_sources_table(&analysis.sources));
                }
                out.push(self.info(&format!(
                    "{} segment(s) classified, {} claim(s), {} source(s); {} name(s) rejected, {} repeated",
                    analysis.stats.segments_classified,
                    analysis.claims.len(),
                    analysis.sources.len(),
                    analysis.stats.names_rejected,
                    analysis.stats.names_repeated,
                )));
                Ok(out.join("\n"))
            }
        }
    }

    /// Format claims output.
    pub fn format_claims(&self, claims: &[&Claim]) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(claims)?),
            OutputFormat::Table => Ok(self.format_claims_table(claims)),
            OutputFormat::Quiet => Ok(ids(claims.iter().map(|c| c.id.to_string()))),
        }
    }

    /// Format sources output.
    pub fn format_sources(&self, sources: &[Source]) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(sources)?),
            OutputFormat::Table => Ok(self.format_sources_table(sources)),
            OutputFormat::Quiet => Ok(ids(sources.iter().map(|s| s.id.to_string()))),
        }
    }

    /// Format a red-flag scan.
    pub fn format_scan(&self, report: &ScanReport<'_>) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
            OutputFormat::Quiet => Ok(report
                .iter()
                .map(|f| format!("{}\t{}", f.claim.id, f.issue))
                .collect::<Vec<_>>()
                .join("\n")),
            OutputFormat::Table => {
                let mut out = Vec::new();
                for category in [FlagCategory::Statistical, FlagCategory::Attribution] {
                    out.push(self.colorize(category.heading(), "magenta"));
                    let flags = report.flags(category);
                    if flags.is_empty() {
                        let clean = match category {
                            FlagCategory::Statistical => {
                                "No obvious statistical red flags detected in current claims."
                            }
                            FlagCategory::Attribution => "No obvious attribution red flags detected.",
                        };
                        out.push(self.colorize(clean, "green"));
                        continue;
                    }

                    let mut builder = Builder::default();
                    builder.push_record(["Claim", "Issue", "Text", "Source"]);
                    for flag in flags {
                        builder.push_record([
                            short_id(&flag.claim.id.to_string()),
                            flag.issue.message().to_string(),
                            excerpt(&flag.claim.text),
                            flag.claim.source.clone(),
                        ]);
                    }
                    out.push(self.finish_table(builder));
                }

                out.push(self.colorize("Manual Checklist", "magenta"));
                out.extend(MANUAL_CHECKS.iter().map(|check| format!("  - {check}")));
                Ok(out.join("\n"))
            }
        }
    }

    /// Format the open story with its statistics, claims and sources.
    pub fn format_overview(
        &self,
        story: &Story,
        stats: &ReviewStats,
        claims: &[&Claim],
        sources: &[Source],
    ) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&serde_json::json!({
                "story": story,
                "stats": stats,
                "claims": claims,
                "sources": sources,
            }))?),
            OutputFormat::Quiet => Ok(ids(claims.iter().map(|c| c.id.to_string()))),
            OutputFormat::Table => {
                let mut builder = Builder::default();
                builder.push_record(["Story", story.title.as_str()]);
                builder.push_record(["ID".to_string(), story.id.to_string()]);
                builder.push_record(["Summary", story.summary.as_str()]);
                builder.push_record(["Deadline".to_string(), story.deadline.to_string()]);
                builder.push_record(["Sensitivity", story.sensitivity.as_str()]);
                builder.push_record(["Total Claims".to_string(), stats.total.to_string()]);
                builder.push_record([
                    "Verified Rate".to_string(),
                    format!("{}%", stats.verification_rate),
                ]);
                builder.push_record([
                    "Open Critical Issues".to_string(),
                    stats.open_critical.to_string(),
                ]);
                let mut table = builder.build();
                table.with(Style::rounded());

                Ok([
                    table.to_string(),
                    self.colorize("Claims", "cyan"),
                    self.format_claims_table(claims),
                    self.colorize("Sources", "cyan"),
                    self.format_sources_table(sources),
                ]
                .join("\n"))
            }
        }
    }

    /// Format a suggested or applied assessment.
    pub fn format_assessment(&self, assessment: SourceAssessment) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&serde_json::json!({
                "assessment": assessment.as_str(),
            }))?),
            OutputFormat::Quiet => Ok(assessment.as_str().to_string()),
            OutputFormat::Table => Ok(format!(
                "Suggested assessment: {}",
                self.colorize(assessment.as_str(), assessment_color(assessment))
            )),
        }
    }

    /// Format the outcome of an edit: a message, the record, or its id.
    pub fn format_outcome<T: Serialize>(&self, message: &str, record: &T, id: &str) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(record)?),
            OutputFormat::Quiet => Ok(id.to_string()),
            OutputFormat::Table => Ok(self.success(message)),
        }
    }

    fn format_claims_table(&self, claims: &[&Claim]) -> String {
        if claims.is_empty() {
            return self.colorize("No claims found.", "yellow");
        }

        let mut builder = Builder::default();
        builder.push_record(["ID", "Status", "Priority", "Type", "Source", "Claim"]);
        for claim in claims {
            let status = claim.status();
            builder.push_record([
                short_id(&claim.id.to_string()),
                self.colorize(status.as_str(), status_color(status)),
                claim.priority.to_string(),
                claim.claim_type.to_string(),
                claim.source.clone(),
                excerpt(&claim.text),
            ]);
        }
        self.finish_table(builder)
    }

    fn format_sources_table(&self, sources: &[Source]) -> String {
        if sources.is_empty() {
            return self.colorize("No sources found.", "yellow");
        }

        let mut builder = Builder::default();
        builder.push_record(["ID", "Name", "Type", "Stake", "Corroborated", "Assessment"]);
        for source in sources {
            let mut name = source.name.clone();
            if source.is_confidential {
                name.push_str(" (confidential)");
            }
            let mut assessment = self.colorize(
                source.assessment().as_str(),
                assessment_color(source.assessment()),
            );
            if source.is_assessment_overridden() {
                assessment.push_str(" *");
            }
            builder.push_record([
                short_id(&source.id.to_string()),
                name,
                source.source_type().to_string(),
                source.stake().to_string(),
                source.corroborated().to_string(),
                assessment,
            ]);
        }
        self.finish_table(builder)
    }

    fn finish_table(&self, builder: Builder) -> String {
        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));
        table.to_string()
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            "magenta" => text.magenta().to_string(),
            _ => text.to_string(),
        }
    }
}

fn status_color(status: ClaimStatus) -> &'static str {
    match status {
        ClaimStatus::Verified => "green",
        ClaimStatus::Disputed => "yellow",
        ClaimStatus::False => "red",
        ClaimStatus::Unverifiable => "magenta",
        ClaimStatus::Unverified => "",
    }
}

fn assessment_color(assessment: SourceAssessment) -> &'static str {
    match assessment {
        SourceAssessment::Credible => "green",
        SourceAssessment::UseWithCaution | SourceAssessment::RequiresCorroboration => "yellow",
        SourceAssessment::Unreliable => "red",
    }
}

fn ids(ids: impl Iterator<Item = String>) -> String {
    ids.collect::<Vec<_>>().join("\n")
}

/// First 8 characters of an id, for table cells
fn short_id(id: &str) -> String {
    id.chars().take(8).collect()
}

fn excerpt(text: &str) -> String {
    if text.chars().count() <= EXCERPT_CHARS {
        return text.to_string();
    }
    let cut: String = text.chars().take(EXCERPT_CHARS - 3).collect();
    format!("{}...", cut)
}

#[cfg(test)]
mod tests {
    use super::*;
    use factdesk_domain::{ClaimId, ClaimType, Priority, StoryId};
    use factdesk_review::scan_red_flags;

    fn create_test_claim() -> Claim {
        Claim::new(
            ClaimId::new(),
            StoryId::new(),
            "Crime rose by up to 40% from last year.",
            ClaimType::Statistical,
            Priority::High,
            "Text Analysis",
        )
    }

    #[test]
    fn test_json_format() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let claim = create_test_claim();
        let output = formatter.format_claims(&[&claim]).unwrap();
        assert!(output.contains("\"type\": \"Statistical\""));
        assert!(output.contains("\"status\": \"Unverified\""));
    }

    #[test]
    fn test_quiet_format() {
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let claim = create_test_claim();
        let output = formatter.format_claims(&[&claim]).unwrap();
        assert_eq!(output, claim.id.to_string());
    }

    #[test]
    fn test_table_format() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let claim = create_test_claim();
        let output = formatter.format_claims(&[&claim]).unwrap();
        assert!(output.contains("Priority"));
        assert!(output.contains("Text Analysis"));
    }

    #[test]
    fn test_empty_claims() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_claims(&[]).unwrap();
        assert!(output.contains("No claims found"));
    }

    #[test]
    fn test_scan_table() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let claims = vec![create_test_claim()];
        let output = formatter.format_scan(&scan_red_flags(&claims)).unwrap();
        assert!(output.contains("Statistical Hazards"));
        assert!(output.contains("Weasel words 'up to' detected."));
        assert!(output.contains("No obvious attribution red flags detected."));
        assert!(output.contains("Manual Checklist"));
        assert!(output.contains("  - Are comparisons apples-to-apples?"));
    }

    #[test]
    fn test_scan_json_lists_are_present() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let output = formatter.format_scan(&scan_red_flags(&[])).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["statistical"], serde_json::json!([]));
        assert_eq!(value["attribution"], serde_json::json!([]));
        assert!(!output.contains("Manual Checklist"));
    }

    #[test]
    fn test_overview_table() {
        use chrono::NaiveDate;
        use factdesk_domain::Sensitivity;

        let formatter = Formatter::new(OutputFormat::Table, false);
        let story = Story::new(
            "Shelter count",
            "County shelters fill up",
            NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(),
            Sensitivity::Investigative,
        );
        let claims = vec![create_test_claim()];
        let stats = ReviewStats::from_claims(&claims);
        let refs: Vec<&Claim> = claims.iter().collect();
        let output = formatter.format_overview(&story, &stats, &refs, &[]).unwrap();
        assert!(output.contains("Shelter count"));
        assert!(output.contains("2026-03-01"));
        assert!(output.contains("0%"));
        assert!(output.contains("No sources found."));
    }

    #[test]
    fn test_excerpt_truncates_by_chars() {
        let long = "é".repeat(80);
        let short = excerpt(&long);
        assert_eq!(short.chars().count(), EXCERPT_CHARS);
        assert!(short.ends_with("..."));
        assert_eq!(excerpt("short"), "short");
    }

    #[test]
    fn test_colorize_disabled() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let msg = formatter.success("test");
        assert_eq!(msg, "✓ test");
    }
}
