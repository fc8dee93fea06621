//! `fetch-projects` - DevRev project status report.
//!
//! ```text
//! fetch-projects --ids "ENH-1,ENH-2"
//! fetch-projects --config ./my-config.json
//! fetch-projects --vista-filters '{"stage":"in_progress"}'
//! ```
//!
//! Requires `DEVREV_PAT` (or `DEVREV_API_TOKEN`). Progress is logged to stderr; the report
//! goes to stdout.

use anyhow::Result;
use clap::Parser;
use ops_devrev::{DevRevClient, DevRevConfig};
use std::process::ExitCode;

mod command;

use command::{Cli, FetchCommand, FetchOutcome};

const USAGE: &str = "\
Usage:
  fetch-projects --ids \"ENH-1,ENH-2\"
  fetch-projects --config ./my-config.json
  fetch-projects --vista-filters '{\"stage\":\"in_progress\"}'";

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stderr)
        .init();

    let cli = Cli::parse();
    match run(cli).await {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<ExitCode> {
    let config = DevRevConfig::from_env()?;
    let settings = command::settings::resolve(&cli)?;

    let Some(mode) = settings.mode() else {
        eprintln!("Error: Please provide --ids, --vista-filters, or --config");
        eprintln!();
        eprintln!("{USAGE}");
        return Ok(ExitCode::FAILURE);
    };

    log::info!("Fetching projects from DevRev...");
    let client = DevRevClient::new(&config)?;
    match FetchCommand::new(&client, &config)
        .execute(mode, &settings.dashboard_name)
        .await?
    {
        FetchOutcome::Report(text) => print!("{text}"),
        FetchOutcome::Empty => println!("No enhancements found matching criteria."),
    }
    Ok(ExitCode::SUCCESS)
}
