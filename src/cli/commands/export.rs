use super::{load_records, summarize};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::export::ExportLogic;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        source,
        range,
        file,
        out_format,
        force,
    } = cmd
    {
        let records = load_records(source, cfg)?;
        let summary = summarize(&records, range, cfg)?;
        ExportLogic::export(&summary, *out_format, file, *force)?;
    }
    Ok(())
}
