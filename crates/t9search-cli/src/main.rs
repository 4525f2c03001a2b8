mod commands;
mod error;
mod input;

use anyhow::{Context as _, Result};
use clap::Parser;
use clap_complete::Shell;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

use crate::commands::completions;
use crate::commands::search::{self, SearchArgs};
use crate::commands::Context;
use crate::error::{exit_code_for, report_error};
use t9search_config as config;

/// Reads contacts from stdin as alternating name and number lines.
#[derive(Debug, Parser)]
#[command(
    name = "t9search",
    version,
    about = "Search contacts by phone number or by the dialpad digits of their name"
)]
pub(crate) struct Cli {
    #[command(flatten)]
    search: SearchArgs,
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long)]
    json: bool,
    #[arg(long, short)]
    verbose: bool,
    /// Generate shell completions and exit
    #[arg(long, value_enum, value_name = "SHELL")]
    completions: Option<Shell>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let verbose = cli.verbose;
    init_logging(verbose);
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_error(&err, verbose);
            exit_code_for(&err)
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let Cli {
        search: search_args,
        config: config_path,
        json,
        verbose,
        completions: shell,
    } = cli;

    if let Some(shell) = shell {
        return completions::emit(shell);
    }

    let app_config = config::load(config_path.clone()).with_context(|| "load config")?;
    if verbose {
        match config::resolve_config_path(config_path) {
            Ok(path) => {
                if path.exists() {
                    debug!(path = %path.display(), "config resolved");
                } else {
                    debug!(path = %path.display(), "config missing, using defaults");
                }
            }
            Err(err) => {
                debug!(error = %err, "config unavailable");
            }
        }
    }

    let query = search_args.to_query(app_config.default_mode)?;
    debug!(mode = ?query.mode(), number = query.raw(), "query ready");

    let ctx = Context {
        json,
        config: &app_config,
    };
    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();
    let summary = search::search_contacts(&ctx, &query, stdin, stdout)?;
    debug!(
        matched = summary.matched,
        total = summary.total,
        "search finished"
    );
    Ok(())
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::{fmt, EnvFilter};
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
