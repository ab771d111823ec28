//! Time utilities: parsing worked-time cells (H:MM) into minutes.

use crate::errors::{AppError, AppResult};

/// Cell contents that mean "nothing recorded for this day".
const EMPTY_MARKERS: [&str; 4] = ["", "-", "--:--", "0:00"];

/// Parse a worked-time cell such as `7:45` or `10:05` into minutes.
///
/// Hours are not capped at 24: the value is a duration, not a clock time.
pub fn parse_work_time(text: &str) -> AppResult<u32> {
    let t = text.trim().trim_matches('\u{a0}').trim();
    if EMPTY_MARKERS.contains(&t) {
        return Ok(0);
    }

    let (h, m) = t
        .split_once(':')
        .ok_or_else(|| AppError::InvalidTime(t.to_string()))?;

    if m.len() != 2 {
        return Err(AppError::InvalidTime(t.to_string()));
    }

    let hours: u32 = h
        .parse()
        .map_err(|_| AppError::InvalidTime(t.to_string()))?;
    let minutes: u32 = m
        .parse()
        .map_err(|_| AppError::InvalidTime(t.to_string()))?;

    if minutes >= 60 {
        return Err(AppError::InvalidTime(t.to_string()));
    }

    hours
        .checked_mul(60)
        .and_then(|v| v.checked_add(minutes))
        .ok_or_else(|| AppError::InvalidTime(t.to_string()))
}
