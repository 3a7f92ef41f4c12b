//! Assess command implementation.

use super::{load, save};
use crate::cli::AssessArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use factdesk_domain::{assess, StoryStore};
use tracing::info;

/// Execute the assess command.
///
/// Without `--source` this only prints the suggestion for the profile.
/// With it, the profile is written to that source; an override pins the
/// assessment until `--clear-override`.
pub fn execute_assess<S>(args: AssessArgs, store: &mut S, formatter: &Formatter) -> Result<String>
where
    S: StoryStore,
    CliError: From<S::Error>,
{
    let suggestion = assess(args.source_type, args.stake, args.corroborated);

    let Some(source_id) = args.source else {
        return formatter.format_assessment(suggestion);
    };

    let mut workspace = load(store)?;
    let source = workspace.source_mut(source_id)?;
    source.set_profile(args.source_type, args.stake, args.corroborated);
    if args.clear_override {
        source.clear_override();
    }
    if let Some(pinned) = args.override_with {
        source.override_assessment(pinned);
    }

    let updated = source.clone();
    info!(
        source_id = %updated.id,
        assessment = %updated.assessment(),
        overridden = updated.is_assessment_overridden(),
        "Updated source profile"
    );
    save(store, &workspace)?;

    let mut message = format!("{} is now '{}'", updated.name, updated.assessment());
    if updated.is_assessment_overridden() && updated.assessment() != suggestion {
        message.push_str(&format!(" (override; profile suggests '{}')", suggestion));
    }
    formatter.format_outcome(&message, &updated, &updated.id.to_string())
}
