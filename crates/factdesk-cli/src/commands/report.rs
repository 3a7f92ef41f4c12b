//! Report command implementation.

use super::{load, open_story};
use crate::cli::ReportArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use chrono::NaiveDate;
use factdesk_domain::StoryStore;
use factdesk_review::{report_file_name, Checklist, ChecklistItem, Report};
use std::fs;
use std::path::PathBuf;
use tracing::info;

/// Execute the report command.
///
/// The Markdown report is returned for printing, or written to a file with
/// `--output`/`--save`. The workspace is never modified.
pub fn execute_report<S>(
    args: ReportArgs,
    store: &S,
    date: NaiveDate,
    formatter: &Formatter,
) -> Result<String>
where
    S: StoryStore,
    CliError: From<S::Error>,
{
    let workspace = load(store)?;
    let story = open_story(&workspace)?;

    let checklist: Checklist = if args.all_checked {
        ChecklistItem::ALL.into_iter().collect()
    } else {
        args.checked.into_iter().collect()
    };

    if args.require_complete && !checklist.is_complete() {
        let remaining: Vec<&str> = checklist.remaining().map(|item| item.key()).collect();
        return Err(CliError::NotPermitted(format!(
            "checklist incomplete; still open: {}",
            remaining.join(", ")
        )));
    }

    let report = Report {
        story,
        claims: workspace.claims(),
        sources: workspace.sources(),
        checklist: &checklist,
        date,
    };

    let path = match (args.output, args.save) {
        (Some(path), _) => path,
        (None, true) => PathBuf::from(report_file_name(story)),
        (None, false) => return Ok(report.to_string()),
    };

    fs::write(&path, report.to_string())?;
    info!(path = %path.display(), status = report.status(), "Wrote verification report");

    let message = format!("Report written to {} ({})", path.display(), report.status());
    formatter.format_outcome(
        &message,
        &serde_json::json!({
            "path": path.display().to_string(),
            "status": report.status(),
        }),
        &path.display().to_string(),
    )
}
