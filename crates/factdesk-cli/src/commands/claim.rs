//! Manual claim entry.

use super::{load, open_story, save};
use crate::cli::{ClaimAction, ClaimArgs};
use crate::error::{CliError, Result};
use crate::output::Formatter;
use factdesk_domain::{Claim, ClaimId, StoryStore};
use tracing::info;

/// Execute the claim command.
pub fn execute_claim<S>(args: ClaimArgs, store: &mut S, formatter: &Formatter) -> Result<String>
where
    S: StoryStore,
    CliError: From<S::Error>,
{
    let mut workspace = load(store)?;
    let story_id = open_story(&workspace)?.id;

    match args.action {
        ClaimAction::Add {
            text,
            claim_type,
            priority,
            source,
            notes,
        } => {
            let text = text.trim();
            if text.is_empty() {
                return Err(CliError::InvalidInput("claim text cannot be empty".to_string()));
            }

            let claim = Claim::new(ClaimId::new(), story_id, text, claim_type, priority, source.trim())
                .with_notes(notes);
            workspace.add_claim(claim.clone())?;
            save(store, &workspace)?;
            info!(claim_id = %claim.id, claim_type = %claim.claim_type, "Added claim");

            let message = format!("Added {} claim {}", claim.priority, claim.id);
            formatter.format_outcome(&message, &claim, &claim.id.to_string())
        }
        ClaimAction::Remove { claim_id } => {
            let removed = workspace.remove_claim(claim_id)?;
            save(store, &workspace)?;
            info!(
                claim_id = %removed.id,
                logs = removed.verification_logs().len(),
                "Removed claim"
            );

            let message = format!("Removed claim {}", removed.id);
            formatter.format_outcome(&message, &removed, &removed.id.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::testing::{formatter, json_formatter, store_with_story};
    use factdesk_domain::{ClaimStatus, ClaimType, DomainError, Priority};
    use factdesk_store::MemoryStore;

    fn add(text: &str) -> ClaimArgs {
        ClaimArgs {
            action: ClaimAction::Add {
                text: text.to_string(),
                claim_type: ClaimType::Statistical,
                priority: Priority::Critical,
                source: " County auditor ".to_string(),
                notes: "From the March budget hearing".to_string(),
            },
        }
    }

    #[test]
    fn test_add_claim() {
        let mut store = store_with_story();
        let output = execute_claim(add("Overtime cost $4 million."), &mut store, &json_formatter())
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["type"], "Statistical");
        assert_eq!(value["status"], "Unverified");

        let workspace = store.load().unwrap();
        let claim = &workspace.claims()[0];
        assert_eq!(claim.text, "Overtime cost $4 million.");
        assert_eq!(claim.source, "County auditor");
        assert_eq!(claim.notes, "From the March budget hearing");
        assert_eq!(claim.story_id, workspace.story().unwrap().id);
        assert_eq!(claim.status(), ClaimStatus::Unverified);
    }

    #[test]
    fn test_blank_claim_rejected() {
        let mut store = store_with_story();
        let err = execute_claim(add("   "), &mut store, &formatter()).unwrap_err();
        assert!(matches!(err, CliError::InvalidInput(_)));
        assert_eq!(store.save_count(), 0);
    }

    #[test]
    fn test_add_requires_story() {
        let mut store = MemoryStore::new();
        let err = execute_claim(add("Overtime cost $4 million."), &mut store, &formatter())
            .unwrap_err();
        assert!(matches!(err, CliError::NoStory));
    }

    #[test]
    fn test_remove_claim() {
        let mut store = store_with_story();
        execute_claim(add("Overtime cost $4 million."), &mut store, &formatter()).unwrap();
        let id = store.load().unwrap().claims()[0].id;

        let output = execute_claim(
            ClaimArgs {
                action: ClaimAction::Remove { claim_id: id },
            },
            &mut store,
            &formatter(),
        )
        .unwrap();
        assert!(output.contains("Removed claim"));
        assert!(store.load().unwrap().claims().is_empty());
    }

    #[test]
    fn test_remove_unknown_claim() {
        let mut store = store_with_story();
        let err = execute_claim(
            ClaimArgs {
                action: ClaimAction::Remove {
                    claim_id: ClaimId::new(),
                },
            },
            &mut store,
            &formatter(),
        )
        .unwrap_err();
        assert!(matches!(err, CliError::Domain(DomainError::NotFound { kind: "claim", .. })));
    }
}
