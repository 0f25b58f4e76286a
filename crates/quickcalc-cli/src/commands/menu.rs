//! The default invocation: the full eleven-entry interactive menu.

use std::io;

use tracing::instrument;

use crate::{
    cli::GlobalArgs,
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
    session::Session,
};

/// Run one full-menu session over stdin/stdout.
#[instrument(skip_all)]
pub fn execute(global: &GlobalArgs, config: &AppConfig) -> CliResult<()> {
    let out = OutputManager::stdout(global, config);
    let stdin = io::stdin();
    let mut session = Session::new(stdin.lock(), out, config.output.area_decimals);
    session.run_menu()
}
