//! Manual source entry.

use super::{load, open_story, save};
use crate::cli::{SourceAction, SourceArgs};
use crate::error::{CliError, Result};
use crate::output::Formatter;
use factdesk_domain::{Source, SourceId, StoryStore};
use tracing::info;

/// Execute the source command.
///
/// A new source gets the assessment its profile suggests; use `assess
/// --source` afterwards to change the profile or pin an override.
pub fn execute_source<S>(args: SourceArgs, store: &mut S, formatter: &Formatter) -> Result<String>
where
    S: StoryStore,
    CliError: From<S::Error>,
{
    let mut workspace = load(store)?;
    let story_id = open_story(&workspace)?.id;

    match args.action {
        SourceAction::Add {
            name,
            source_type,
            stake,
            corroborated,
            confidential,
            notes,
        } => {
            let name = name.trim();
            if name.is_empty() {
                return Err(CliError::InvalidInput("source name cannot be empty".to_string()));
            }

            let source = Source::new(SourceId::new(), story_id, name, source_type, stake, corroborated)
                .with_confidential(confidential)
                .with_notes(notes);
            workspace.add_source(source.clone())?;
            save(store, &workspace)?;
            info!(source_id = %source.id, assessment = %source.assessment(), "Added source");

            let message = format!("Added {} ({})", source.name, source.assessment());
            formatter.format_outcome(&message, &source, &source.id.to_string())
        }
        SourceAction::Remove { source_id } => {
            let removed = workspace.remove_source(source_id)?;
            save(store, &workspace)?;
            info!(source_id = %removed.id, "Removed source");

            let message = format!("Removed source {}", removed.name);
            formatter.format_outcome(&message, &removed, &removed.id.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::testing::{formatter, json_formatter, store_with_story};
    use factdesk_domain::{
        assess, Corroboration, DomainError, SourceAssessment, SourceStake, SourceType,
    };
    use factdesk_store::MemoryStore;

    fn add(name: &str, source_type: SourceType, stake: SourceStake) -> SourceArgs {
        SourceArgs {
            action: SourceAction::Add {
                name: name.to_string(),
                source_type,
                stake,
                corroborated: Corroboration::No,
                confidential: false,
                notes: String::new(),
            },
        }
    }

    #[test]
    fn test_add_source_is_assessed() {
        let mut store = store_with_story();
        let output = execute_source(
            add("Shelter director", SourceType::Primary, SourceStake::High),
            &mut store,
            &formatter(),
        )
        .unwrap();
        assert!(output.contains("Use with caution"));

        let workspace = store.load().unwrap();
        let source = &workspace.sources()[0];
        assert_eq!(source.name, "Shelter director");
        assert_eq!(
            source.assessment(),
            assess(SourceType::Primary, SourceStake::High, Corroboration::No)
        );
        assert!(!source.is_assessment_overridden());
    }

    #[test]
    fn test_anonymous_confidential_source() {
        let mut store = store_with_story();
        let args = SourceArgs {
            action: SourceAction::Add {
                name: "Caseworker A".to_string(),
                source_type: SourceType::Anonymous,
                stake: SourceStake::None,
                corroborated: Corroboration::Partially,
                confidential: true,
                notes: "Met twice in person".to_string(),
            },
        };
        let output = execute_source(args, &mut store, &json_formatter()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["is_confidential"], true);

        let workspace = store.load().unwrap();
        let source = &workspace.sources()[0];
        assert_eq!(source.assessment(), SourceAssessment::UseWithCaution);
        assert_eq!(source.notes, "Met twice in person");
    }

    #[test]
    fn test_blank_name_rejected() {
        let mut store = store_with_story();
        let err = execute_source(
            add(" ", SourceType::Primary, SourceStake::None),
            &mut store,
            &formatter(),
        )
        .unwrap_err();
        assert!(matches!(err, CliError::InvalidInput(_)));
        assert!(store.load().unwrap().sources().is_empty());
    }

    #[test]
    fn test_add_requires_story() {
        let err = execute_source(
            add("Shelter director", SourceType::Primary, SourceStake::None),
            &mut MemoryStore::new(),
            &formatter(),
        )
        .unwrap_err();
        assert!(matches!(err, CliError::NoStory));
    }

    #[test]
    fn test_remove_source() {
        let mut store = store_with_story();
        execute_source(
            add("Shelter director", SourceType::Primary, SourceStake::None),
            &mut store,
            &formatter(),
        )
        .unwrap();
        let id = store.load().unwrap().sources()[0].id;

        let remove = |source_id| SourceArgs {
            action: SourceAction::Remove { source_id },
        };
        let output = execute_source(remove(id), &mut store, &formatter()).unwrap();
        assert!(output.contains("Removed source Shelter director"));
        assert!(store.load().unwrap().sources().is_empty());

        let err = execute_source(remove(id), &mut store, &formatter()).unwrap_err();
        assert!(matches!(err, CliError::Domain(DomainError::NotFound { kind: "source", .. })));
    }
}
