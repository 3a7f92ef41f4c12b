//! Intake command implementation.

use super::{load, save};
use crate::cli::IntakeArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use factdesk_domain::{Story, StoryStore};
use tracing::info;

/// Execute the intake command.
pub fn execute_intake<S>(args: IntakeArgs, store: &mut S, formatter: &Formatter) -> Result<String>
where
    S: StoryStore,
    CliError: From<S::Error>,
{
    let title = args.title.trim();
    if title.is_empty() {
        return Err(CliError::InvalidInput("Story title cannot be empty".to_string()));
    }

    let mut workspace = load(store)?;
    if let Some(open) = workspace.story() {
        let in_progress = !workspace.claims().is_empty() || !workspace.sources().is_empty();
        if in_progress && !args.force {
            return Err(CliError::NotPermitted(format!(
                "story '{}' still has {} claim(s) and {} source(s); pass --force to replace it",
                open.title,
                workspace.claims().len(),
                workspace.sources().len()
            )));
        }
    }

    let story = Story::new(title, args.summary.trim(), args.deadline, args.sensitivity);
    info!(story_id = %story.id, "Opening story '{}'", story.title);
    let message = format!("Story '{}' opened ({})", story.title, story.id);
    let id = story.id.to_string();
    workspace.set_story(story.clone());
    save(store, &workspace)?;

    formatter.format_outcome(&message, &story, &id)
}
