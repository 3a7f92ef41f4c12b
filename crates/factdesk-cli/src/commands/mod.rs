//! Command implementations.
//!
//! Every command loads the workspace from a [`StoryStore`], applies one
//! change (or none), saves if something changed, and returns the text to
//! print.

pub mod analyze;
pub mod assess;
pub mod claim;
pub mod intake;
pub mod report;
pub mod scan;
pub mod show;
pub mod source;
pub mod status;
pub mod verify;

pub use self::analyze::execute_analyze;
pub use self::assess::execute_assess;
pub use self::claim::execute_claim;
pub use self::intake::execute_intake;
pub use self::report::execute_report;
pub use self::scan::execute_scan;
pub use self::show::{execute_reset, execute_show};
pub use self::source::execute_source;
pub use self::status::execute_status;
pub use self::verify::execute_verify;

use crate::error::{CliError, Result};
use factdesk_domain::{Story, StoryStore, Workspace};

/// Load the workspace, mapping the store's error into [`CliError`].
pub(crate) fn load<S>(store: &S) -> Result<Workspace>
where
    S: StoryStore,
    CliError: From<S::Error>,
{
    Ok(store.load()?)
}

/// Save the workspace, mapping the store's error into [`CliError`].
pub(crate) fn save<S>(store: &mut S, workspace: &Workspace) -> Result<()>
where
    S: StoryStore,
    CliError: From<S::Error>,
{
    store.save(workspace)?;
    Ok(())
}

/// The open story, or [`CliError::NoStory`].
pub(crate) fn open_story(workspace: &Workspace) -> Result<&Story> {
    workspace.story().ok_or(CliError::NoStory)
}

#[cfg(test)]
pub(crate) mod testing {
    use chrono::NaiveDate;
    use factdesk_domain::{Sensitivity, Story, Workspace};
    use factdesk_store::MemoryStore;

    use crate::config::OutputFormat;
    use crate::output::Formatter;

    pub const DRAFT: &str = "Shelter use climbs across the county\n\
        Officials said the city saw a 22% rise in shelter use. \
        Councilmember Reyes stated that the audit was never completed. \
        The mayor will present a plan next week.";

    pub fn formatter() -> Formatter {
        Formatter::new(OutputFormat::Table, false)
    }

    pub fn json_formatter() -> Formatter {
        Formatter::new(OutputFormat::Json, false)
    }

    /// A store holding an open story with no claims yet
    pub fn store_with_story() -> MemoryStore {
        let mut workspace = Workspace::new();
        workspace.set_story(Story::new(
            "Shelter count",
            "County shelters fill up",
            NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(),
            Sensitivity::Investigative,
        ));
        MemoryStore::with_workspace(workspace)
    }
}
