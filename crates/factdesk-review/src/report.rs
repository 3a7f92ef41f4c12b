//! Pre-publication review: fact-check queue, statistics, checklist and
//! the Markdown verification report

use std::fmt::{self, Display};
use std::str::FromStr;

use chrono::NaiveDate;
use factdesk_domain::{Claim, ClaimStatus, Priority, Source, Story};
use serde::{Deserialize, Serialize};

use crate::error::ReviewError;

/// Claims that must be checked before filing (Critical or High), in order
pub fn priority_claims(claims: &[Claim]) -> impl Iterator<Item = &Claim> {
    claims
        .iter()
        .filter(|c| matches!(c.priority, Priority::Critical | Priority::High))
}

/// Verification progress over a claim list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewStats {
    /// Number of claims
    pub total: usize,
    /// Claims with status Verified
    pub verified: usize,
    /// Verified share as a rounded whole percent; 0 with no claims
    pub verification_rate: u32,
    /// Critical claims not yet Verified
    pub open_critical: usize,
}

impl ReviewStats {
    /// Compute statistics for `claims`
    pub fn from_claims(claims: &[Claim]) -> Self {
        let total = claims.len();
        let verified = claims
            .iter()
            .filter(|c| c.status() == ClaimStatus::Verified)
            .count();
        let open_critical = claims
            .iter()
            .filter(|c| c.priority == Priority::Critical && c.status() != ClaimStatus::Verified)
            .count();
        // Half rounds up
        let verification_rate = if total == 0 {
            0
        } else {
            ((verified * 200 + total) / (2 * total)) as u32
        };

        Self {
            total,
            verified,
            verification_rate,
            open_critical,
        }
    }
}

/// One item on the pre-publication checklist
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChecklistItem {
    /// Every critical claim has a status
    CriticalClaims,
    /// Titles and roles confirmed
    NamedRoles,
    /// Statistics are sourced
    Statistics,
    /// Quotes are accurate
    Quotes,
    /// Conflicting evidence addressed
    Conflicts,
    /// Anonymous sourcing is justified
    Anonymous,
    /// Names, places and dates spell-checked
    Spellcheck,
    /// No causal overreach
    Causality,
}

impl ChecklistItem {
    /// Every item in display order
    pub const ALL: [ChecklistItem; 8] = [
        ChecklistItem::CriticalClaims,
        ChecklistItem::NamedRoles,
        ChecklistItem::Statistics,
        ChecklistItem::Quotes,
        ChecklistItem::Conflicts,
        ChecklistItem::Anonymous,
        ChecklistItem::Spellcheck,
        ChecklistItem::Causality,
    ];

    /// Short key used on the command line and in saved state
    pub fn key(&self) -> &'static str {
        match self {
            ChecklistItem::CriticalClaims => "critical-claims",
            ChecklistItem::NamedRoles => "named-roles",
            ChecklistItem::Statistics => "statistics",
            ChecklistItem::Quotes => "quotes",
            ChecklistItem::Conflicts => "conflicts",
            ChecklistItem::Anonymous => "anonymous",
            ChecklistItem::Spellcheck => "spellcheck",
            ChecklistItem::Causality => "causality",
        }
    }

    /// Full checklist wording
    pub fn label(&self) -> &'static str {
        match self {
            ChecklistItem::CriticalClaims => "All critical claims have a verification status",
            ChecklistItem::NamedRoles => "Every named individual's title/role has been confirmed",
            ChecklistItem::Statistics => {
                "All statistics cite a specific source, date, and methodology"
            }
            ChecklistItem::Quotes => "All direct quotes are accurately attributed and in context",
            ChecklistItem::Conflicts => "Conflicting evidence has been acknowledged or addressed",
            ChecklistItem::Anonymous => {
                "No anonymous-source claims regarding verifiable on-record facts"
            }
            ChecklistItem::Spellcheck => "Legal names, place names, and dates spell-checked",
            ChecklistItem::Causality => "Story does not make causal claims beyond evidence",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl Display for ChecklistItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for ChecklistItem {
    type Err = ReviewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase().replace('_', "-");
        ChecklistItem::ALL
            .into_iter()
            .find(|item| item.key() == wanted)
            .ok_or_else(|| ReviewError::UnknownChecklistItem(s.to_string()))
    }
}

/// Which checklist items have been ticked
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Checklist {
    checked: [bool; 8],
}

impl Checklist {
    /// A checklist with nothing ticked
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip an item and return its new state
    pub fn toggle(&mut self, item: ChecklistItem) -> bool {
        let slot = &mut self.checked[item.index()];
        *slot = !*slot;
        *slot
    }

    /// Tick an item
    pub fn check(&mut self, item: ChecklistItem) {
        self.checked[item.index()] = true;
    }

    /// Whether an item is ticked
    pub fn is_checked(&self, item: ChecklistItem) -> bool {
        self.checked[item.index()]
    }

    /// True once every item is ticked
    pub fn is_complete(&self) -> bool {
        self.checked.iter().all(|&c| c)
    }

    /// Items not yet ticked, in display order
    pub fn remaining(&self) -> impl Iterator<Item = ChecklistItem> + '_ {
        ChecklistItem::ALL
            .into_iter()
            .filter(|item| !self.is_checked(*item))
    }
}

impl FromIterator<ChecklistItem> for Checklist {
    fn from_iter<I: IntoIterator<Item = ChecklistItem>>(iter: I) -> Self {
        let mut checklist = Checklist::new();
        for item in iter {
            checklist.check(item);
        }
        checklist
    }
}

/// Markdown verification report for one story
///
/// Rendered through [`Display`]; see [`render_report`].
#[derive(Debug, Clone, Copy)]
pub struct Report<'a> {
    /// Story being filed
    pub story: &'a Story,
    /// Its claims
    pub claims: &'a [Claim],
    /// Its sources
    pub sources: &'a [Source],
    /// Checklist state
    pub checklist: &'a Checklist,
    /// Report date
    pub date: NaiveDate,
}

impl Report<'_> {
    /// Status line value
    pub fn status(&self) -> &'static str {
        if self.checklist.is_complete() {
            "READY FOR PUBLICATION"
        } else {
            "CHECKS INCOMPLETE"
        }
    }
}

impl Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let story = self.story;
        let stats = ReviewStats::from_claims(self.claims);

        writeln!(f, "# Verification Report: {}", story.title)?;
        writeln!(f, "Date: {}", self.date.format("%Y-%m-%d"))?;
        writeln!(f, "Status: {}", self.status())?;

        writeln!(f, "\n## Story Details")?;
        writeln!(f, "Summary: {}", story.summary)?;
        writeln!(f, "Deadline: {}", story.deadline.format("%Y-%m-%d"))?;
        writeln!(f, "Sensitivity: {}", story.sensitivity)?;

        writeln!(f, "\n## Verification Statistics")?;
        writeln!(f, "- Total Claims: {}", stats.total)?;
        writeln!(f, "- Verified Rate: {}%", stats.verification_rate)?;
        writeln!(f, "- Open Critical Issues: {}", stats.open_critical)?;

        writeln!(f, "\n## Claims Analysis")?;
        for claim in self.claims {
            writeln!(
                f,
                "\n- [{}] {}",
                claim.status().as_str().to_uppercase(),
                claim.text
            )?;
            writeln!(f, "  Priority: {}", claim.priority)?;
            writeln!(f, "  Type: {}", claim.claim_type)?;
            writeln!(f, "  Source: {}", claim.source)?;
            writeln!(f, "  Notes: {}", claim.notes)?;
            if let Some(last) = claim.verification_logs().last() {
                writeln!(
                    f,
                    "  Last check: {} via {} ({} confidence)",
                    last.verdict, last.method, last.confidence
                )?;
            }
        }

        writeln!(f, "\n## Source Evaluation")?;
        for source in self.sources {
            let confidential = if source.is_confidential { ", confidential" } else { "" };
            writeln!(f, "\n- {} ({}{})", source.name, source.source_type(), confidential)?;
            writeln!(f, "  Credibility: {}", source.assessment())?;
            writeln!(f, "  Corroborated: {}", source.corroborated())?;
            writeln!(f, "  Notes: {}", source.notes)?;
        }

        writeln!(f, "\n## Pre-Publication Checklist")?;
        for item in ChecklistItem::ALL {
            let mark = if self.checklist.is_checked(item) { 'x' } else { ' ' };
            writeln!(f, "- [{}] {}", mark, item.label())?;
        }
        Ok(())
    }
}

/// Render the Markdown verification report
pub fn render_report(
    story: &Story,
    claims: &[Claim],
    sources: &[Source],
    checklist: &Checklist,
    date: NaiveDate,
) -> String {
    Report {
        story,
        claims,
        sources,
        checklist,
        date,
    }
    .to_string()
}

/// File name for a story's report: `verification-report-<first 8 of id>.md`
pub fn report_file_name(story: &Story) -> String {
    let id = story.id.to_string();
    let prefix: String = id.chars().take(8).collect();
    format!("verification-report-{}.md", prefix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use factdesk_domain::{
        ClaimId, ClaimType, Confidence, Corroboration, Sensitivity, SourceId, SourceStake,
        SourceType, StoryId, VerificationLog,
    };

    fn story() -> Story {
        let mut story = Story::new(
            "Rising Homelessness in San Diego",
            "Point-in-time count shows a sharp rise.",
            NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(),
            Sensitivity::Investigative,
        );
        story.id = StoryId::from_value(0x0123_4567_89ab_cdef_0000_0000_0000_0001);
        story
    }

    fn claim(story: &Story, priority: Priority, status: ClaimStatus) -> Claim {
        let mut claim = Claim::new(
            ClaimId::new(),
            story.id,
            "Homelessness rose 22% last year.",
            ClaimType::Statistical,
            priority,
            "Officials",
        );
        claim.set_status(status);
        claim
    }

    #[test]
    fn test_priority_claims_keeps_order() {
        let s = story();
        let claims = vec![
            claim(&s, Priority::Low, ClaimStatus::Unverified),
            claim(&s, Priority::High, ClaimStatus::Unverified),
            claim(&s, Priority::Medium, ClaimStatus::Unverified),
            claim(&s, Priority::Critical, ClaimStatus::Verified),
        ];
        let queue: Vec<_> = priority_claims(&claims).map(|c| c.id).collect();
        assert_eq!(queue, vec![claims[1].id, claims[3].id]);
    }

    #[test]
    fn test_stats_with_no_claims() {
        assert_eq!(ReviewStats::from_claims(&[]), ReviewStats::default());
    }

    #[test]
    fn test_stats() {
        let s = story();
        let claims = vec![
            claim(&s, Priority::Critical, ClaimStatus::Verified),
            claim(&s, Priority::Critical, ClaimStatus::Disputed),
            claim(&s, Priority::High, ClaimStatus::Unverified),
        ];
        let stats = ReviewStats::from_claims(&claims);
        assert_eq!(stats.total, 3);
        assert_eq!(stats.verified, 1);
        assert_eq!(stats.verification_rate, 33);
        assert_eq!(stats.open_critical, 1);
    }

    #[test]
    fn test_rate_rounds_half_up() {
        let s = story();
        let mut claims = vec![claim(&s, Priority::Low, ClaimStatus::Verified)];
        claims.extend((0..7).map(|_| claim(&s, Priority::Low, ClaimStatus::Unverified)));
        // 1/8 = 12.5%
        assert_eq!(ReviewStats::from_claims(&claims).verification_rate, 13);

        let two_thirds = vec![
            claim(&s, Priority::Low, ClaimStatus::Verified),
            claim(&s, Priority::Low, ClaimStatus::Verified),
            claim(&s, Priority::Low, ClaimStatus::False),
        ];
        assert_eq!(ReviewStats::from_claims(&two_thirds).verification_rate, 67);
    }

    #[test]
    fn test_checklist() {
        let mut checklist = Checklist::new();
        assert!(!checklist.is_complete());
        assert_eq!(checklist.remaining().count(), 8);

        assert!(checklist.toggle(ChecklistItem::Quotes));
        assert!(!checklist.toggle(ChecklistItem::Quotes));

        for item in ChecklistItem::ALL {
            checklist.check(item);
        }
        assert!(checklist.is_complete());
        assert_eq!(checklist.remaining().count(), 0);
    }

    #[test]
    fn test_checklist_item_parsing() {
        assert_eq!("critical-claims".parse::<ChecklistItem>().unwrap(), ChecklistItem::CriticalClaims);
        assert_eq!("Named_Roles".parse::<ChecklistItem>().unwrap(), ChecklistItem::NamedRoles);
        assert!("grammar".parse::<ChecklistItem>().is_err());
    }

    #[test]
    fn test_report_incomplete() {
        let s = story();
        let mut verified = claim(&s, Priority::Critical, ClaimStatus::Unverified);
        let log = VerificationLog::new(
            verified.id,
            "Public records",
            vec!["HUD PIT count".to_string()],
            "Matches the count",
            ClaimStatus::Verified,
            Confidence::High,
        )
        .unwrap();
        verified.append_log(log).unwrap();
        verified.set_status(ClaimStatus::Verified);
        let claims = vec![verified];
        let sources = vec![Source::new(
            SourceId::new(),
            s.id,
            "Officials",
            SourceType::Primary,
            SourceStake::None,
            Corroboration::No,
        )];
        let checklist: Checklist = [ChecklistItem::Quotes].into_iter().collect();

        let report = render_report(
            &s,
            &claims,
            &sources,
            &checklist,
            NaiveDate::from_ymd_opt(2026, 2, 20).unwrap(),
        );

        assert!(report.starts_with("# Verification Report: Rising Homelessness in San Diego\n"));
        assert!(report.contains("Date: 2026-02-20\n"));
        assert!(report.contains("Status: CHECKS INCOMPLETE\n"));
        assert!(report.contains("Deadline: 2026-03-01\n"));
        assert!(report.contains("Sensitivity: Investigative\n"));
        assert!(report.contains("- Verified Rate: 100%\n"));
        assert!(report.contains("- [VERIFIED] Homelessness rose 22% last year.\n"));
        assert!(report.contains("  Last check: Verified via Public records (High confidence)\n"));
        assert!(report.contains("- Officials (Primary)\n"));
        assert!(report.contains("  Credibility: Requires corroboration\n"));
        assert!(report.contains(
            "- [x] All direct quotes are accurately attributed and in context\n"
        ));
        assert!(report.contains("- [ ] Story does not make causal claims beyond evidence\n"));
    }

    #[test]
    fn test_report_ready() {
        let s = story();
        let checklist: Checklist = ChecklistItem::ALL.into_iter().collect();
        let report = render_report(&s, &[], &[], &checklist, NaiveDate::from_ymd_opt(2026, 2, 20).unwrap());
        assert!(report.contains("Status: READY FOR PUBLICATION\n"));
        assert!(report.contains("- Total Claims: 0\n"));
        assert!(report.contains("- Verified Rate: 0%\n"));
    }

    #[test]
    fn test_report_file_name() {
        assert_eq!(report_file_name(&story()), "verification-report-01234567.md");
    }
}
