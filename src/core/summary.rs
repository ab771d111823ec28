use crate::core::summarizer::{checked_sum_range, compute_bounds, format_hm, includes};
use crate::errors::{AppError, AppResult};
use crate::models::{DayRecord, PeriodBounds, RangeQuery};
use crate::utils::date::{day_in_month, next_month};
use chrono::NaiveDate;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Language of the human-readable labels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    #[default]
    En,
    Ja,
}

/// Result of one range query, with everything the CLI prints or exports.
#[derive(Debug, Clone)]
pub struct RangeSummary {
    pub bounds: PeriodBounds,
    pub query: RangeQuery,
    pub included: Vec<DayRecord>,
    pub total_minutes: u64,
}

impl RangeSummary {
    pub fn build(records: &[DayRecord], query: RangeQuery) -> AppResult<Self> {
        let total_minutes = checked_sum_range(records, query)?;
        let bounds = compute_bounds(records);

        let included = records
            .iter()
            .filter(|r| includes(bounds, query, r.day))
            .copied()
            .collect();

        Ok(Self {
            bounds,
            query,
            included,
            total_minutes,
        })
    }

    pub fn wraps(&self) -> bool {
        self.query.wraps()
    }

    pub fn total(&self) -> String {
        format_hm(self.total_minutes)
    }

    /// True for a day counted in the part of a wrap range after the month end.
    pub fn is_after_wrap(&self, day: u8) -> bool {
        self.wraps() && day <= self.query.end_day
    }

    /// `days 26-31 and 1-5` / `26日から31日まで、および1日から5日まで`
    pub fn label(&self, lang: Lang) -> String {
        let (s, e) = (self.query.start_day, self.query.end_day);
        let (min, max) = (self.bounds.min_day, self.bounds.max_day);

        match (lang, self.wraps()) {
            (Lang::En, false) => format!("days {s}-{e}"),
            (Lang::En, true) => format!("days {s}-{max} and {min}-{e}"),
            (Lang::Ja, false) => format!("{s}日から{e}日まで"),
            (Lang::Ja, true) => format!("{s}日から{max}日まで、および{min}日から{e}日まで"),
        }
    }

    pub fn headline(&self, lang: Lang) -> String {
        match lang {
            Lang::En => format!("Total worked for {}: {}", self.label(lang), self.total()),
            Lang::Ja => format!("{}の総労働時間: {}", self.label(lang), self.total()),
        }
    }
}

/// Calendar dates of `records`, given the month the period starts in.
///
/// Records are taken in the order the period lists them: the first day lower
/// than the one before it opens the following month, and every later record
/// stays there whatever range is being queried.
pub fn calendar_dates(
    records: &[DayRecord],
    first_of_month: NaiveDate,
) -> AppResult<Vec<NaiveDate>> {
    let mut month = first_of_month;
    let mut previous: Option<u8> = None;
    let mut crossed = false;
    let mut dates = Vec::with_capacity(records.len());

    for r in records {
        if !crossed && previous.is_some_and(|p| r.day < p) {
            month = next_month(first_of_month)
                .ok_or_else(|| AppError::InvalidDate(first_of_month.to_string()))?;
            crossed = true;
        }
        previous = Some(r.day);

        let date = day_in_month(month, r.day).ok_or_else(|| {
            AppError::InvalidDate(format!("{} day {}", month.format("%Y-%m"), r.day))
        })?;
        dates.push(date);
    }

    Ok(dates)
}

/// Word a range error the way the calculator shows it in `lang`.
///
/// Other errors, and every error in English, pass through unchanged.
pub fn localize_error(err: AppError, lang: Lang) -> AppError {
    match (lang, err) {
        (Lang::Ja, AppError::InvalidRange { min, max, .. }) => AppError::Message(format!(
            "エラー: 有効な日にちを入力してください ({min}〜{max})"
        )),
        (_, err) => err,
    }
}

/// Explanation of the period shown next to the inputs.
pub fn bounds_hint(bounds: PeriodBounds, lang: Lang) -> String {
    let (min, max) = (bounds.min_day, bounds.max_day);
    match lang {
        Lang::En => format!(
            "This period runs from day {min} to day {max}. Ranges crossing the month end \
             (e.g. a start day greater than the end day) are supported as well."
        ),
        Lang::Ja => format!(
            "※ この月は{min}日から{max}日までの期間です。月をまたぐ場合（例：{min}日から{max}日まで）も計算できます。"
        ),
    }
}
