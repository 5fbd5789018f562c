use super::commands::Cli;
use crate::client::ApiClient;
use crate::config::ConfigLoader;
use crate::logging::setup_logging;
use crate::lookup::run_lookup;
use crate::report::{render_json, render_report};
use anyhow::{Context, Result};
use clap::Parser;
use std::io;
use std::process::ExitCode;

/// Process the command line and run one lookup.
///
/// Any error ends the process with status 1 after printing its message to
/// stderr; a failed contact lookup is part of the report and does not.
pub fn process_command() -> ExitCode {
    // NOTE: exits with a usage message on parsing errors
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("{error:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = ConfigLoader::load_config(cli.config.as_deref())?;
    setup_logging(&config)?;

    let client = ApiClient::new(config.api_base_url()?)?;
    let request = cli.lookup_request();

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;
    let report = runtime.block_on(run_lookup(&client, &request))?;

    let mut stdout = io::stdout().lock();
    if cli.json {
        render_json(&report, &mut stdout)
    } else {
        render_report(&report, &mut stdout)
    }
}
