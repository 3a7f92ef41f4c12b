//! Status command implementation.

use super::{load, save};
use crate::cli::StatusArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use factdesk_domain::{DomainError, StoryStore};
use tracing::info;

/// Execute the status command.
pub fn execute_status<S>(args: StatusArgs, store: &mut S, formatter: &Formatter) -> Result<String>
where
    S: StoryStore,
    CliError: From<S::Error>,
{
    let mut workspace = load(store)?;
    workspace.set_claim_status(args.claim_id, args.status)?;
    save(store, &workspace)?;
    info!(claim_id = %args.claim_id, status = %args.status, "Changed claim status");

    let claim = workspace
        .claim(args.claim_id)
        .ok_or_else(|| DomainError::NotFound {
            kind: "claim",
            id: args.claim_id.to_string(),
        })?;
    let message = format!("Claim {} is now {}", claim.id, claim.status());
    formatter.format_outcome(&message, claim, &claim.id.to_string())
}
