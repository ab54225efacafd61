//! CLI argument definitions using clap
//!
//! Commands:
//! - bacegen generate [--config <path>]
//! - bacegen trace [--config <path>]
//! - bacegen scenarios [--config <path>] [--json]
//! - bacegen sample [--config <path>] [--seed <n>]
//! - bacegen verify [--config <path>]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// bacegen - Deterministic treatment-design generator
#[derive(Parser, Debug)]
#[command(name = "bacegen")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the pipeline and print the SQL block
    Generate {
        /// Path to configuration file
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Print the per-pair listing and stage summary
    Trace {
        /// Path to configuration file
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Print the realizations of every canonical design
    Scenarios {
        /// Path to configuration file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Emit one JSON object per design instead of text
        #[arg(long)]
        json: bool,
    },

    /// Print one randomly chosen canonical design
    Sample {
        /// Path to configuration file
        #[arg(long)]
        config: Option<PathBuf>,

        /// RNG seed for a reproducible draw
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Render, re-parse, and check the reference counts
    Verify {
        /// Path to configuration file
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
