//! Factdesk CLI - Claim extraction and pre-publication checks for news stories.

use clap::Parser;
use factdesk_cli::commands;
use factdesk_cli::{Cli, Command, Config, Formatter, LocalFetcher};
use factdesk_store::FileStore;
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> factdesk_cli::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);
    let color_enabled = !cli.no_color && config.settings.color;
    let formatter = Formatter::new(format, color_enabled);

    let workspace_path = config.workspace_path(cli.workspace)?;
    debug!(path = %workspace_path.display(), "Opening workspace");
    let mut store = FileStore::open(&workspace_path)?;

    let output = match cli.command {
        Command::Intake(args) => commands::execute_intake(args, &mut store, &formatter)?,
        Command::Analyze(args) => commands::execute_analyze(
            args,
            &mut store,
            &LocalFetcher,
            &config.analyzer,
            &formatter,
        )?,
        Command::Scan(args) => commands::execute_scan(args, &store, &config.scan, &formatter)?,
        Command::Claim(args) => commands::execute_claim(args, &mut store, &formatter)?,
        Command::Source(args) => commands::execute_source(args, &mut store, &formatter)?,
        Command::Assess(args) => commands::execute_assess(args, &mut store, &formatter)?,
        Command::Verify(args) => commands::execute_verify(args, &mut store, &formatter)?,
        Command::Status(args) => commands::execute_status(args, &mut store, &formatter)?,
        Command::Show(args) => commands::execute_show(args, &store, &formatter)?,
        Command::Report(args) => commands::execute_report(
            args,
            &store,
            chrono::Local::now().date_naive(),
            &formatter,
        )?,
        Command::Reset(args) => commands::execute_reset(args, &mut store, &formatter)?,
    };

    if !output.is_empty() {
        println!("{}", output);
    }
    Ok(())
}

/// Log to stderr. `FACTDESK_LOG` wins over `-v`.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_env("FACTDESK_LOG").unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
