//! Show and reset command implementations.

use super::{load, open_story, save};
use crate::cli::{ResetArgs, ShowArgs};
use crate::error::{CliError, Result};
use crate::output::Formatter;
use factdesk_domain::{Claim, StoryStore};
use factdesk_review::{priority_claims, ReviewStats};
use std::io::{self, BufRead, Write};
use tracing::info;

/// Execute the show command.
pub fn execute_show<S>(args: ShowArgs, store: &S, formatter: &Formatter) -> Result<String>
where
    S: StoryStore,
    CliError: From<S::Error>,
{
    let workspace = load(store)?;
    let story = open_story(&workspace)?;
    let stats = ReviewStats::from_claims(workspace.claims());

    let claims: Vec<&Claim> = if args.queue {
        priority_claims(workspace.claims()).collect()
    } else {
        workspace
            .claims()
            .iter()
            .filter(|c| args.priority.is_none_or(|p| c.priority == p))
            .collect()
    };

    formatter.format_overview(story, &stats, &claims, workspace.sources())
}

/// Execute the reset command.
///
/// Asks on stdin unless `--yes` is given.
pub fn execute_reset<S>(args: ResetArgs, store: &mut S, formatter: &Formatter) -> Result<String>
where
    S: StoryStore,
    CliError: From<S::Error>,
{
    let mut workspace = load(store)?;
    let Some(story) = workspace.story() else {
        return Ok(formatter.info("Workspace is already empty"));
    };

    if !args.yes {
        let stdin = io::stdin();
        if !confirm(&story.title, &mut stdin.lock())? {
            return Ok(formatter.info("Operation cancelled"));
        }
    }

    let title = story.title.clone();
    let dropped = (workspace.claims().len(), workspace.sources().len());
    workspace.reset();
    save(store, &workspace)?;
    info!(claims = dropped.0, sources = dropped.1, "Workspace reset");

    Ok(formatter.success(&format!(
        "Closed '{}' and removed {} claim(s) and {} source(s)",
        title, dropped.0, dropped.1
    )))
}

fn confirm(title: &str, input: &mut impl BufRead) -> Result<bool> {
    print!("Close '{}' and discard all claims and sources? [y/N] ", title);
    io::stdout().flush()?;

    let mut response = String::new();
    input.read_line(&mut response)?;
    Ok(response.trim().eq_ignore_ascii_case("y"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::testing::{formatter, json_formatter, store_with_story};
    use factdesk_domain::{ClaimId, ClaimType, Priority, Workspace};
    use factdesk_store::MemoryStore;

    fn populated_store() -> MemoryStore {
        let mut workspace = store_with_story().load().unwrap();
        let story_id = workspace.story().unwrap().id;
        for (text, priority) in [
            ("Rents rose 9% in a year.", Priority::Critical),
            ("The council met 4 times.", Priority::Low),
            ("Evictions doubled to 300.", Priority::High),
        ] {
            workspace
                .add_claim(Claim::new(
                    ClaimId::new(),
                    story_id,
                    text,
                    ClaimType::Statistical,
                    priority,
                    "Text Analysis",
                ))
                .unwrap();
        }
        MemoryStore::with_workspace(workspace)
    }

    fn show(store: &MemoryStore, args: ShowArgs) -> serde_json::Value {
        let output = execute_show(args, store, &json_formatter()).unwrap();
        serde_json::from_str(&output).unwrap()
    }

    #[test]
    fn test_show_all() {
        let value = show(
            &populated_store(),
            ShowArgs {
                queue: false,
                priority: None,
            },
        );
        assert_eq!(value["story"]["title"], "Shelter count");
        assert_eq!(value["claims"].as_array().unwrap().len(), 3);
        assert_eq!(value["stats"]["open_critical"], 1);
    }

    #[test]
    fn test_show_queue() {
        let value = show(
            &populated_store(),
            ShowArgs {
                queue: true,
                priority: None,
            },
        );
        let claims = value["claims"].as_array().unwrap();
        assert_eq!(claims.len(), 2);
        assert!(claims.iter().all(|c| c["priority"] != "Low"));
    }

    #[test]
    fn test_show_priority_filter() {
        let value = show(
            &populated_store(),
            ShowArgs {
                queue: false,
                priority: Some(Priority::Low),
            },
        );
        assert_eq!(value["claims"][0]["text"], "The council met 4 times.");
        assert_eq!(value["claims"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn test_show_without_story() {
        let err = execute_show(
            ShowArgs {
                queue: false,
                priority: None,
            },
            &MemoryStore::new(),
            &formatter(),
        )
        .unwrap_err();
        assert!(matches!(err, CliError::NoStory));
    }

    #[test]
    fn test_reset() {
        let mut store = populated_store();
        let output = execute_reset(ResetArgs { yes: true }, &mut store, &formatter()).unwrap();
        assert!(output.contains("removed 3 claim(s)"));
        assert_eq!(store.load().unwrap(), Workspace::new());
    }

    #[test]
    fn test_reset_empty_workspace() {
        let mut store = MemoryStore::new();
        let output = execute_reset(ResetArgs { yes: true }, &mut store, &formatter()).unwrap();
        assert!(output.contains("already empty"));
        assert_eq!(store.save_count(), 0);
    }

    #[test]
    fn test_confirm_answers() {
        assert!(confirm("Story", &mut "y\n".as_bytes()).unwrap());
        assert!(confirm("Story", &mut "Y\n".as_bytes()).unwrap());
        assert!(!confirm("Story", &mut "\n".as_bytes()).unwrap());
        assert!(!confirm("Story", &mut "yes please\n".as_bytes()).unwrap());
    }
}
