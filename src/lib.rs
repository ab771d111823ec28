//! rWorkhours library root.
//! Exposes the range summarizer, the record sources, the CLI parser and the
//! high-level run() function.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod logging;
pub mod models;
pub mod source;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use std::path::Path;

pub use crate::core::{checked_sum_range, compute_bounds, format_hm, sum_range};
pub use models::{DayRecord, Period, PeriodBounds, RangeQuery};
pub use source::DayRecordSource;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config, cfg_path: &Path) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli, cfg_path),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg, cfg_path),
        Commands::Bounds { .. } => cli::commands::bounds::handle(&cli.command, cfg),
        Commands::Sum { .. } => cli::commands::sum::handle(&cli.command, cfg),
        Commands::List { .. } => cli::commands::list::handle(&cli.command, cfg),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg),
    }
}

/// Entry point usato da main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ load config once (an explicit --config wins over the standard file)
    let cfg_path = cli
        .config
        .as_deref()
        .map(utils::path::expand_tilde)
        .unwrap_or_else(Config::config_file);
    let cfg = Config::load_from(&cfg_path)?;

    // 3️⃣ diagnostic logging on stderr
    cfg.logging.init(cli.verbose);
    tracing::debug!(config = %cfg_path.display(), "configuration loaded");

    // 4️⃣ hand everything to the dispatcher
    dispatch(&cli, &cfg, &cfg_path)
}
