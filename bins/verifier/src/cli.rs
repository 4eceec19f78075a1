//! Command-line interface definition.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Verifies double-entry postings and infers elided amounts.
#[derive(Parser, Debug)]
#[command(name = "tally", version)]
#[command(about = "Verify double-entry postings and infer elided amounts")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Verify a batch of postings and print the completed set with any errors
    Verify {
        /// JSON array of postings (stdin if omitted)
        input: Option<PathBuf>,

        /// Include rolled-up account balances in the output
        #[arg(short, long)]
        balances: bool,
    },

    /// List every account used by a batch, with all ancestors
    Accounts {
        /// JSON array of postings (stdin if omitted)
        input: Option<PathBuf>,
    },

    /// Verify two batches and list the postings each has that the other lacks
    Compare {
        /// Left-hand JSON array of postings
        left: PathBuf,

        /// Right-hand JSON array of postings
        right: PathBuf,
    },
}
