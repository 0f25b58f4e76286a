//! `quickcalc area` — the area-only variant: the three-entry shape menu
//! without the surrounding operation menu.

use std::io;

use tracing::instrument;

use crate::{
    cli::{AreaArgs, GlobalArgs},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
    session::Session,
};

/// Run one area-only session over stdin/stdout.
#[instrument(skip_all)]
pub fn execute(args: &AreaArgs, global: &GlobalArgs, config: &AppConfig) -> CliResult<()> {
    let decimals = args.decimals.unwrap_or(config.output.area_decimals);
    let out = OutputManager::stdout(global, config);
    let stdin = io::stdin();
    let mut session = Session::new(stdin.lock(), out, decimals);
    session.run_area()
}
