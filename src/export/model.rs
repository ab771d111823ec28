use crate::core::summarizer::format_hm;
use crate::core::summary::RangeSummary;
use crate::models::DayRecord;
use serde::Serialize;

/// Flat row for CSV / JSON export of one day.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct RecordExport {
    pub day: u8,
    pub minutes: u32,
    pub worked: String,
}

impl From<&DayRecord> for RecordExport {
    fn from(r: &DayRecord) -> Self {
        Self {
            day: r.day,
            minutes: r.minutes,
            worked: format_hm(u64::from(r.minutes)),
        }
    }
}

/// JSON export document: the query, the period bounds and the selected days.
#[derive(Serialize, Clone, Debug)]
pub struct RangeExport {
    pub start_day: u8,
    pub end_day: u8,
    pub min_day: u8,
    pub max_day: u8,
    pub wraps: bool,
    pub total_minutes: u64,
    pub total: String,
    pub generated_at: String,
    pub records: Vec<RecordExport>,
}

impl RangeExport {
    pub fn new(summary: &RangeSummary, records: Vec<RecordExport>) -> Self {
        Self {
            start_day: summary.query.start_day,
            end_day: summary.query.end_day,
            min_day: summary.bounds.min_day,
            max_day: summary.bounds.max_day,
            wraps: summary.wraps(),
            total_minutes: summary.total_minutes,
            total: summary.total(),
            generated_at: chrono::Local::now().to_rfc3339(),
            records,
        }
    }
}
