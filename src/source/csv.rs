use super::{DayRecordSource, RawRecord};
use crate::errors::AppResult;
use crate::models::DayRecord;
use tracing::debug;

/// Records from CSV text with a `day` column and a `minutes` and/or
/// `worked` (`H:MM`) column.
pub struct CsvSource {
    content: String,
}

impl CsvSource {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }
}

impl DayRecordSource for CsvSource {
    fn fetch_records(&self) -> AppResult<Vec<DayRecord>> {
        let mut rdr = ::csv::ReaderBuilder::new()
            .trim(::csv::Trim::All)
            .from_reader(self.content.as_bytes());

        let mut records = Vec::new();
        for row in rdr.deserialize::<RawRecord>() {
            records.push(row?.into_record()?);
        }

        debug!(count = records.len(), "csv records read");
        Ok(records)
    }
}
