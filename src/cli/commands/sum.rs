use super::{lang_or, load_records, summarize};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Sum { source, range } = cmd {
        let records = load_records(source, cfg)?;
        let summary = summarize(&records, range, cfg)?;

        println!("{}", summary.headline(lang_or(range.lang, cfg)));
    }
    Ok(())
}
