//! Subreal: cleanup and rename tooling for Unreal Engine projects.
//!
//! This is the main entry point for the `subreal` CLI. It parses arguments,
//! sets up logging, dispatches to the appropriate command handler, and
//! handles errors with proper exit codes.

mod cli;
mod commands;
pub mod cleaner;
pub mod config;
pub mod engine;
pub mod error;
pub mod exit_codes;
pub mod fs;
pub mod renamer;

#[cfg(test)]
mod test_support;

use cli::Cli;
use env_logger::Env;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse_args();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_filter)).init();

    match commands::dispatch(cli) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            // Print user-actionable error message to stderr
            eprintln!("Error: {}", err);

            ExitCode::from(err.exit_code() as u8)
        }
    }
}
