use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use std::path::Path;
use tracing::info as trace_info;

/// Handle the `init` command
///
/// Writes the default configuration file (and its directory) unless running
/// in test mode.
pub fn handle(cli: &Cli, path: &Path) -> AppResult<()> {
    info("Initializing rWorkhours…");
    println!("📄 Config file : {}", path.display());

    if cli.test {
        info("Test mode: configuration file not written.");
        return Ok(());
    }

    Config::init(path)?;
    trace_info!(path = %path.display(), "default configuration written");

    success("rWorkhours initialization completed!");
    Ok(())
}
