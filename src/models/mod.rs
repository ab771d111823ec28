pub mod day_record;
pub mod period;
pub mod range_query;

pub use day_record::DayRecord;
pub use period::{Period, PeriodBounds};
pub use range_query::RangeQuery;
