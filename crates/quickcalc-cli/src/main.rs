//! # QuickCalc CLI
//!
//! Menu-driven command-line calculator.
//!
//! ## Startup sequence
//!
//! 1. Parse CLI arguments (clap handles `--help` / `--version` early-exit).
//! 2. Initialise the tracing subscriber (logging on stderr).
//! 3. Load configuration (built-in defaults).
//! 4. Dispatch to the session (full menu, area menu, or completions).
//! 5. Translate any [`CliError`] into a user-facing message and exit code.
//!
//! ## Exit codes
//!
//! | Code | Meaning                                            |
//! |------|----------------------------------------------------|
//! |  0   | Session completed (including printed input errors) |
//! |  1   | Internal / system error                            |
//! |  2   | Argument-parse error                               |
//!
//! Invalid numbers, invalid menu choices, and domain errors (divide by
//! zero, negative factorial, non-positive logarithm) are part of the
//! session protocol: they print a message and still exit 0.

use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, instrument};

use crate::{
    cli::{Cli, Commands},
    config::AppConfig,
    error::{CliError, CliResult},
    logging::init_logging,
};

mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod output;
mod session;

fn main() -> ExitCode {
    // ── 1. Parse arguments ────────────────────────────────────────────────
    // clap handles --help / --version and exits automatically; errors here
    // are argument-parse failures (exit 2).
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Render clap's own output: --help / --version go to stdout and
            // exit 0; argument-parse errors go to stderr and exit 2.
            e.exit();
        }
    };

    // ── 2. Initialise tracing ─────────────────────────────────────────────
    if let Err(e) = init_logging(&cli.global) {
        return handle_error(CliError::Startup {
            message: format!("failed to initialise logging: {e}"),
        });
    }

    debug!(
        verbose = cli.global.verbose,
        quiet = cli.global.quiet,
        no_color = cli.global.no_color,
        "CLI started"
    );

    // ── 3. Load configuration ─────────────────────────────────────────────
    let config = match AppConfig::load() {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::error!("Failed to load configuration: {e:#}");
            return ExitCode::from(1);
        }
    };

    // ── 4. Dispatch + 5. Error handling ───────────────────────────────────
    match run(cli, config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => handle_error(e),
    }
}

/// Dispatch to the correct handler. No subcommand means the full menu.
#[instrument(skip_all)]
fn run(cli: Cli, config: AppConfig) -> CliResult<()> {
    match &cli.command {
        None => commands::menu::execute(&cli.global, &config),
        Some(Commands::Area(args)) => commands::area::execute(args, &cli.global, &config),
        Some(Commands::Completions(args)) => commands::completions::execute(args),
    }
}

/// Translate a `CliError` into a user message and an appropriate exit code.
///
/// Only process-level failures land here; session-level input errors were
/// already printed and exited 0.
fn handle_error(err: CliError) -> ExitCode {
    // 1. Emit a structured log event.
    err.log();

    // 2. Print a user-friendly message. We write directly to stderr so the
    //    message appears even when stdout is redirected.
    let msg = if std::io::IsTerminal::is_terminal(&std::io::stderr()) {
        err.format_colored()
    } else {
        err.format_plain()
    };
    eprint!("{msg}");

    ExitCode::from(err.exit_code())
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_structure_is_valid() {
        // Clap's internal consistency check — catches missing values, conflicts, etc.
        Cli::command().debug_assert();
    }

    #[test]
    fn cli_version_matches_cargo() {
        let cmd = Cli::command();
        assert_eq!(cmd.get_version(), Some(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn cli_has_author() {
        let cmd = Cli::command();
        assert!(cmd.get_author().is_some());
    }
}
