// src/core/query.rs

use crate::errors::{AppError, AppResult};
use crate::models::{PeriodBounds, RangeQuery};

/// Parse a single day typed by the user.
///
/// Anything that is not a plain decimal day is reported as `InvalidRange`,
/// carrying the period bounds so the message can tell the user what is valid.
pub fn parse_day(text: &str, bounds: PeriodBounds) -> AppResult<u8> {
    text.trim()
        .parse::<u8>()
        .map_err(|_| invalid(text, text, bounds))
}

/// Parse a compact `START:END` expression (e.g. `26:5`).
pub fn parse_range_expr(expr: &str, bounds: PeriodBounds) -> AppResult<RangeQuery> {
    let (start_raw, end_raw) = expr
        .split_once(':')
        .ok_or_else(|| invalid(expr, expr, bounds))?;

    let start = parse_day(start_raw, bounds).map_err(|_| invalid(start_raw, end_raw, bounds))?;
    let end = parse_day(end_raw, bounds).map_err(|_| invalid(start_raw, end_raw, bounds))?;

    Ok(RangeQuery::new(start, end))
}

/// Build the query from the CLI inputs.
///
/// - `range` (`START:END`) wins over the separate values
/// - a missing start defaults to the first day of the period
/// - a missing end defaults to the last day of the period
pub fn resolve_query(
    start: Option<&str>,
    end: Option<&str>,
    range: Option<&str>,
    bounds: PeriodBounds,
) -> AppResult<RangeQuery> {
    if let Some(expr) = range {
        return parse_range_expr(expr, bounds);
    }

    let start_day = match start {
        Some(s) => parse_day(s, bounds)?,
        None => bounds.min_day,
    };
    let end_day = match end {
        Some(e) => parse_day(e, bounds)?,
        None => bounds.max_day,
    };

    Ok(RangeQuery::new(start_day, end_day))
}

fn invalid(start: &str, end: &str, bounds: PeriodBounds) -> AppError {
    AppError::InvalidRange {
        start: start.trim().to_string(),
        end: end.trim().to_string(),
        min: bounds.min_day,
        max: bounds.max_day,
    }
}
