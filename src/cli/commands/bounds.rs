use super::{lang_or, load_records};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::summarizer::format_hm;
use crate::core::summary::bounds_hint;
use crate::errors::AppResult;
use crate::models::Period;
use crate::ui::messages::{hint, warning};

const HINT_WIDTH: usize = 72;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Bounds { source, lang } = cmd {
        let period = Period::new(load_records(source, cfg)?);
        let bounds = period.bounds();

        if bounds.is_empty() {
            warning(format!("No attendance data found in {}.", source.input));
            return Ok(());
        }

        println!("First day : {}", bounds.min_day);
        println!("Last day  : {}", bounds.max_day);
        println!("Days      : {}", period.records.len());
        println!("Worked    : {}", format_hm(period.total_minutes()));
        println!();
        hint(bounds_hint(bounds, lang_or(*lang, cfg)), HINT_WIDTH);
    }
    Ok(())
}
