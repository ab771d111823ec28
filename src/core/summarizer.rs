//! Range summation over the day records of one period.
//!
//! A query whose start day is greater than its end day wraps past the end of
//! the month: with bounds `min..=max`, the days `start..=max` and `min..=end`
//! are both in range.

use crate::errors::{AppError, AppResult};
use crate::models::{DayRecord, PeriodBounds, RangeQuery};
use tracing::debug;

/// Minimum and maximum day among `records`.
///
/// Returns the inverted `{31, 1}` sentinel for an empty slice, never an error.
pub fn compute_bounds(records: &[DayRecord]) -> PeriodBounds {
    records
        .iter()
        .fold(PeriodBounds::EMPTY, |acc, r| PeriodBounds {
            min_day: acc.min_day.min(r.day),
            max_day: acc.max_day.max(r.day),
        })
}

/// In-range predicate shared by the sum, the listing and the export.
pub fn includes(bounds: PeriodBounds, query: RangeQuery, day: u8) -> bool {
    if query.wraps() {
        (day >= query.start_day && day <= bounds.max_day)
            || (day >= bounds.min_day && day <= query.end_day)
    } else {
        day >= query.start_day && day <= query.end_day
    }
}

/// Total minutes of the records whose day falls in `start_day..end_day`.
///
/// No validation happens here; see [`checked_sum_range`].
pub fn sum_range(records: &[DayRecord], start_day: u8, end_day: u8) -> u64 {
    let bounds = compute_bounds(records);
    let query = RangeQuery::new(start_day, end_day);

    records
        .iter()
        .filter(|r| includes(bounds, query, r.day))
        .map(|r| u64::from(r.minutes))
        .sum()
}

/// Validated variant of [`sum_range`].
///
/// Fails with `NoData` on an empty period and with `InvalidRange` when an
/// endpoint lies outside the period bounds. Endpoints are never clamped.
pub fn checked_sum_range(records: &[DayRecord], query: RangeQuery) -> AppResult<u64> {
    let bounds = compute_bounds(records);
    validate(bounds, query)?;

    let total = sum_range(records, query.start_day, query.end_day);
    debug!(
        start = query.start_day,
        end = query.end_day,
        wraps = query.wraps(),
        total,
        "range summed"
    );
    Ok(total)
}

/// Check that both endpoints of `query` lie within `bounds`.
pub fn validate(bounds: PeriodBounds, query: RangeQuery) -> AppResult<()> {
    if bounds.is_empty() {
        return Err(AppError::NoData);
    }

    if !bounds.contains(query.start_day) || !bounds.contains(query.end_day) {
        return Err(AppError::InvalidRange {
            start: query.start_day.to_string(),
            end: query.end_day.to_string(),
            min: bounds.min_day,
            max: bounds.max_day,
        });
    }

    Ok(())
}

/// Render a minute total as `H:MM` (hours unpadded).
pub fn format_hm(total_minutes: u64) -> String {
    format!("{}:{:02}", total_minutes / 60, total_minutes % 60)
}
