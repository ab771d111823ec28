use super::{DayRecordSource, RawRecord};
use crate::errors::AppResult;
use crate::models::DayRecord;
use serde::Deserialize;
use tracing::debug;

/// Either a bare array of rows or `{ "records": [...] }` (the shape written
/// by the JSON export).
#[derive(Deserialize)]
#[serde(untagged)]
enum JsonDocument {
    Rows(Vec<RawRecord>),
    Wrapped { records: Vec<RawRecord> },
}

pub struct JsonSource {
    content: String,
}

impl JsonSource {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }
}

impl DayRecordSource for JsonSource {
    fn fetch_records(&self) -> AppResult<Vec<DayRecord>> {
        let rows = match serde_json::from_str::<JsonDocument>(&self.content)? {
            JsonDocument::Rows(rows) => rows,
            JsonDocument::Wrapped { records } => records,
        };

        let records = rows
            .into_iter()
            .map(RawRecord::into_record)
            .collect::<AppResult<Vec<_>>>()?;

        debug!(count = records.len(), "json records read");
        Ok(records)
    }
}
