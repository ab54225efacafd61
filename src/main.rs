//! bacegen CLI entry point
//!
//! A minimal entrypoint: parse arguments, dispatch to the CLI module,
//! print the error to stderr and exit non-zero on failure. All logic
//! lives in the CLI module.

use bacegen::cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
