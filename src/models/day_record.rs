use crate::errors::{AppError, AppResult};
use serde::Serialize;

/// One calendar day's recorded work duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DayRecord {
    pub day: u8,      // 1..=31
    pub minutes: u32, // 0 when nothing was recorded
}

impl DayRecord {
    pub const FIRST_DAY: u8 = 1;
    pub const LAST_DAY: u8 = 31;

    pub fn new(day: u8, minutes: u32) -> AppResult<Self> {
        if !(Self::FIRST_DAY..=Self::LAST_DAY).contains(&day) {
            return Err(AppError::InvalidDay(day.to_string()));
        }
        Ok(Self { day, minutes })
    }

    /// Same as `new` but for days read as wider integers from a source.
    pub fn from_raw(day: i64, minutes: u32) -> AppResult<Self> {
        let d = u8::try_from(day).map_err(|_| AppError::InvalidDay(day.to_string()))?;
        Self::new(d, minutes)
    }

    pub fn is_empty(&self) -> bool {
        self.minutes == 0
    }
}
