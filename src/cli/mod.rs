//! CLI module
//!
//! Provides the command-line interface for:
//! - generate: print the canonical SQL block
//! - trace: print the per-pair listing and stage summary
//! - scenarios: print the realizations of every canonical design
//! - sample: print one randomly chosen design
//! - verify: round-trip the output and check reference counts

mod args;
mod commands;
mod config;
mod errors;

pub use args::{Cli, Command};
pub use commands::{generate, run, run_command, sample_design, scenarios, trace, verify};
pub use config::GenConfig;
pub use errors::{CliError, CliErrorCode, CliResult};
