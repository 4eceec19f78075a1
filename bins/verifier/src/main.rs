//! Tally command-line verifier.
//!
//! Reads postings as JSON, runs verification, and writes the result as JSON
//! to stdout. Logs go to stderr.
//!
//! Usage:
//!   tally verify postings.json --balances
//!   cat postings.json | tally verify
//!   tally accounts postings.json
//!   tally compare imported.json journal.json
//!
//! Exit status is 2 when verification succeeds but the ledger does not
//! balance (or the compared ledgers differ).

mod cli;
mod report;

use std::fs::File;
use std::io::{self, BufReader, Read, Write};
use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use tally_core::accounts::expand_accounts;
use tally_core::compare::unmatched;
use tally_core::verify::{Posting, Verification, VerifyService};
use tally_shared::{AppConfig, LoggingConfig};

use cli::{Cli, Command};
use report::{CompareReport, VerifyReport};

/// Exit status when the run succeeded but the ledger is not clean.
const EXIT_UNBALANCED: u8 = 2;

fn main() -> Result<ExitCode> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::load().context("Failed to load configuration")?;

    init_tracing(&config.logging);

    let service = VerifyService::new(config.verify);
    let separator = service.config().account_separator.clone();

    let clean = match cli.command {
        Command::Verify { input, balances } => {
            let verification = run(&service, input.as_deref())?;
            let report =
                VerifyReport::new(verification, balances.then_some(separator.as_str()))?;
            write_json(&report)?;
            report.is_clean()
        }
        Command::Accounts { input } => {
            let verification = run(&service, input.as_deref())?;
            write_json(&expand_accounts(&verification.postings, &separator))?;
            true
        }
        Command::Compare { left, right } => {
            let left = run(&service, Some(left.as_path()))?;
            let right = run(&service, Some(right.as_path()))?;
            let report = CompareReport {
                only_left: unmatched(&left.postings, &right.postings),
                only_right: unmatched(&right.postings, &left.postings),
            };
            info!(
                only_left = report.only_left.len(),
                only_right = report.only_right.len(),
                "Comparison finished"
            );
            write_json(&report)?;
            report.is_clean()
        }
    };

    Ok(if clean {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(EXIT_UNBALANCED)
    })
}

fn init_tracing(logging: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            logging
                .json
                .then(|| fmt::layer().json().with_writer(io::stderr)),
        )
        .with((!logging.json).then(|| fmt::layer().with_writer(io::stderr)))
        .init();
}

fn run(service: &VerifyService, input: Option<&Path>) -> Result<Verification> {
    let postings = read_postings(input)?;
    info!(postings = postings.len(), "Loaded postings");
    Ok(service.verify(&postings)?)
}

fn read_postings(input: Option<&Path>) -> Result<Vec<Posting>> {
    match input {
        Some(path) => {
            let file =
                File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
            serde_json::from_reader(BufReader::new(file))
                .with_context(|| format!("Failed to parse postings from {}", path.display()))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            serde_json::from_str(&buf).context("Failed to parse postings from stdin")
        }
    }
}

fn write_json<T: Serialize>(value: &T) -> Result<()> {
    let mut out = io::stdout().lock();
    serde_json::to_writer_pretty(&mut out, value)?;
    writeln!(out)?;
    Ok(())
}
