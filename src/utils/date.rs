use chrono::{Datelike, Months, NaiveDate};

/// Parse `YYYY-MM` into the first day of that month.
pub fn parse_month(p: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(&(p.trim().to_string() + "-01"), "%Y-%m-%d").ok()
}

/// First day of the month following `first`.
pub fn next_month(first: NaiveDate) -> Option<NaiveDate> {
    first.checked_add_months(Months::new(1))
}

/// Calendar date of `day` inside the month starting at `first`.
pub fn day_in_month(first: NaiveDate, day: u8) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(first.year(), first.month(), u32::from(day))
}
