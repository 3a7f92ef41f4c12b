//! Analyze command implementation.

use super::{load, save};
use crate::cli::AnalyzeArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use factdesk_domain::{DocumentFetcher, MergePolicy, StoryId, StoryStore};
use factdesk_extractor::{AnalyzerConfig, TextAnalyzer};
use tracing::{debug, info};

/// Execute the analyze command.
///
/// Without `--save` the workspace is only read, to borrow the open story's
/// id; the analysis is printed and discarded.
pub fn execute_analyze<S, F>(
    args: AnalyzeArgs,
    store: &mut S,
    fetcher: &F,
    analyzer_config: &AnalyzerConfig,
    formatter: &Formatter,
) -> Result<String>
where
    S: StoryStore,
    CliError: From<S::Error>,
    F: DocumentFetcher + ?Sized,
{
    let mut config = analyzer_config.clone();
    if let Some(min_chars) = args.min_chars {
        config.min_segment_chars = min_chars;
    }
    config.validate()?;

    let mut workspace = load(store)?;
    let story_id = match workspace.story() {
        Some(story) => story.id,
        None if args.save => return Err(CliError::NoStory),
        None => StoryId::new(),
    };

    let text = fetcher.fetch(&args.input)?;
    debug!(input = %args.input, chars = text.len(), "Fetched text");

    let analysis = TextAnalyzer::new(config).analyze(&text, story_id);
    let mut output = formatter.format_analysis(&analysis)?;

    if args.save {
        let policy = MergePolicy::from(args.merge);
        let (claims, sources) = analysis.into_parts();
        let summary = workspace.merge(claims, sources, policy)?;
        save(store, &workspace)?;
        info!(
            claims_added = summary.claims_added,
            sources_added = summary.sources_added,
            "Merged analysis into story"
        );

        if formatter.format() == crate::config::OutputFormat::Table {
            let mut message = format!(
                "Added {} claim(s) and {} source(s) to the story",
                summary.claims_added, summary.sources_added
            );
            if policy == MergePolicy::Replace {
                message.push_str(&format!(
                    " (replaced {} claim(s) and {} source(s))",
                    summary.claims_removed, summary.sources_removed
                ));
            }
            output.push('\n');
            output.push_str(&formatter.success(&message));
        }
    }

    Ok(output)
}
