pub mod bounds;
pub mod config;
pub mod export;
pub mod init;
pub mod list;
pub mod sum;

use crate::cli::parser::{RangeArgs, SourceArgs};
use crate::config::Config;
use crate::core::query::resolve_query;
use crate::core::summarizer::compute_bounds;
use crate::core::summary::{Lang, RangeSummary, localize_error};
use crate::errors::AppResult;
use crate::models::DayRecord;
use crate::source::{DayRecordSource, open_source};

/// Fetch a fresh snapshot of the records named by `source`.
pub(crate) fn load_records(source: &SourceArgs, cfg: &Config) -> AppResult<Vec<DayRecord>> {
    let format = source.format.unwrap_or(cfg.default_format);
    open_source(&source.input, format, cfg)?.fetch_records()
}

/// Resolve the range options against the period and sum it.
///
/// A rejected range is reported in the language of the labels.
pub(crate) fn summarize(
    records: &[DayRecord],
    range: &RangeArgs,
    cfg: &Config,
) -> AppResult<RangeSummary> {
    let bounds = compute_bounds(records);
    resolve_query(
        range.start.as_deref(),
        range.end.as_deref(),
        range.range.as_deref(),
        bounds,
    )
    .and_then(|query| RangeSummary::build(records, query))
    .map_err(|e| localize_error(e, lang_or(range.lang, cfg)))
}

pub(crate) fn lang_or(lang: Option<Lang>, cfg: &Config) -> Lang {
    lang.unwrap_or(cfg.language)
}
