use super::day_record::DayRecord;
use super::range_query::RangeQuery;
use crate::core::summarizer;
use crate::errors::AppResult;
use serde::Serialize;

/// Minimum and maximum day observed across a period's records.
///
/// An empty period yields the inverted sentinel `{ min_day: 31, max_day: 1 }`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PeriodBounds {
    pub min_day: u8,
    pub max_day: u8,
}

impl PeriodBounds {
    pub const EMPTY: PeriodBounds = PeriodBounds {
        min_day: DayRecord::LAST_DAY,
        max_day: DayRecord::FIRST_DAY,
    };

    /// True for the "no data" sentinel.
    pub fn is_empty(&self) -> bool {
        self.min_day > self.max_day
    }

    pub fn contains(&self, day: u8) -> bool {
        day >= self.min_day && day <= self.max_day
    }

    /// Query covering the whole period, the default the calculator starts from.
    pub fn full_range(&self) -> RangeQuery {
        RangeQuery::new(self.min_day, self.max_day)
    }
}

/// All the day records visible for one attendance cycle.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Period {
    pub records: Vec<DayRecord>,
}

impl Period {
    pub fn new(records: Vec<DayRecord>) -> Self {
        Self { records }
    }

    pub fn bounds(&self) -> PeriodBounds {
        summarizer::compute_bounds(&self.records)
    }

    pub fn total_minutes(&self) -> u64 {
        self.records.iter().map(|r| u64::from(r.minutes)).sum()
    }

    pub fn sum(&self, query: RangeQuery) -> AppResult<u64> {
        summarizer::checked_sum_range(&self.records, query)
    }
}

impl From<Vec<DayRecord>> for Period {
    fn from(records: Vec<DayRecord>) -> Self {
        Self::new(records)
    }
}
