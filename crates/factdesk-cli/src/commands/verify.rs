//! Verify command implementation.

use super::{load, save};
use crate::cli::VerifyArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use factdesk_domain::{StoryStore, VerificationLog};
use tracing::info;

/// Execute the verify command.
///
/// The step is appended to the claim's log. The claim's status only moves
/// to the verdict when `--apply` is given.
pub fn execute_verify<S>(args: VerifyArgs, store: &mut S, formatter: &Formatter) -> Result<String>
where
    S: StoryStore,
    CliError: From<S::Error>,
{
    if args.method.trim().is_empty() {
        return Err(CliError::InvalidInput("Verification method cannot be empty".to_string()));
    }

    let mut workspace = load(store)?;
    let log = VerificationLog::new(
        args.claim_id,
        args.method.trim(),
        args.sources_found,
        args.finding.trim(),
        args.verdict,
        args.confidence,
    )?;
    let log_id = log.id.to_string();
    workspace.append_verification_log(args.claim_id, log.clone())?;
    if args.apply {
        workspace.set_claim_status(args.claim_id, args.verdict)?;
    }
    save(store, &workspace)?;

    info!(
        claim_id = %args.claim_id,
        verdict = %args.verdict,
        applied = args.apply,
        "Recorded verification step"
    );

    let mut message = format!("Logged '{}' check ({}) on claim {}", log.method, log.verdict, args.claim_id);
    if args.apply {
        message.push_str(&format!("; status set to {}", args.verdict));
    }
    formatter.format_outcome(&message, &log, &log_id)
}
