// src/source/mod.rs

//! Suppliers of day records.
//!
//! Every command fetches a fresh snapshot from a [`DayRecordSource`]; the
//! summarizer never reads from the environment itself.

mod csv;
mod html;
mod json;

pub use self::csv::CsvSource;
pub use self::html::HtmlTableSource;
pub use self::json::JsonSource;

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::DayRecord;
use crate::utils::parse_work_time;
use crate::utils::path::{expand_tilde, extension, is_stdin};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{self, Read};
use tracing::debug;

/// Capability: produce the day records of one period.
pub trait DayRecordSource {
    fn fetch_records(&self) -> AppResult<Vec<DayRecord>>;
}

impl DayRecordSource for Vec<DayRecord> {
    fn fetch_records(&self) -> AppResult<Vec<DayRecord>> {
        Ok(self.clone())
    }
}

impl DayRecordSource for [DayRecord] {
    fn fetch_records(&self) -> AppResult<Vec<DayRecord>> {
        Ok(self.to_vec())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceFormat {
    /// Pick the format from the file extension
    #[default]
    Auto,
    Csv,
    Json,
    Html,
}

/// A format an input can actually be read as.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputFormat {
    Csv,
    Json,
    Html,
}

impl InputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            InputFormat::Csv => "csv",
            InputFormat::Json => "json",
            InputFormat::Html => "html",
        }
    }
}

impl SourceFormat {
    /// Resolve `Auto` against the input name.
    pub fn resolve(self, input: &str) -> AppResult<InputFormat> {
        match self {
            SourceFormat::Csv => return Ok(InputFormat::Csv),
            SourceFormat::Json => return Ok(InputFormat::Json),
            SourceFormat::Html => return Ok(InputFormat::Html),
            SourceFormat::Auto => {}
        }

        if is_stdin(input) {
            return Err(AppError::Source(
                "reading from stdin requires an explicit --format".to_string(),
            ));
        }

        match extension(&expand_tilde(input)).as_deref() {
            Some("csv") => Ok(InputFormat::Csv),
            Some("json") => Ok(InputFormat::Json),
            Some("html") | Some("htm") => Ok(InputFormat::Html),
            _ => Err(AppError::Source(format!(
                "cannot detect the format of '{input}', use --format csv|json|html"
            ))),
        }
    }
}

/// One row as written in CSV / JSON inputs.
///
/// `minutes` wins over `worked` (`H:MM`) when both are present; a row with
/// neither counts as zero.
#[derive(Debug, Deserialize)]
pub(crate) struct RawRecord {
    pub day: i64,
    #[serde(default)]
    pub minutes: Option<u32>,
    #[serde(default)]
    pub worked: Option<String>,
}

impl RawRecord {
    pub(crate) fn into_record(self) -> AppResult<DayRecord> {
        let minutes = match (self.minutes, self.worked.as_deref()) {
            (Some(m), _) => m,
            (None, Some(w)) => parse_work_time(w)?,
            (None, None) => 0,
        };
        DayRecord::from_raw(self.day, minutes)
    }
}

fn read_input(input: &str) -> AppResult<String> {
    if is_stdin(input) {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        return Ok(buf);
    }

    let path = expand_tilde(input);
    if !path.exists() {
        return Err(AppError::Source(format!(
            "input file not found: {}",
            path.display()
        )));
    }
    Ok(fs::read_to_string(path)?)
}

/// Open `input` (a path or `-` for stdin) as a record source.
pub fn open_source(
    input: &str,
    format: SourceFormat,
    cfg: &Config,
) -> AppResult<Box<dyn DayRecordSource>> {
    let format = format.resolve(input)?;
    let content = read_input(input)?;
    debug!(input, format = format.as_str(), bytes = content.len(), "source opened");

    Ok(match format {
        InputFormat::Csv => Box::new(CsvSource::new(content)),
        InputFormat::Json => Box::new(JsonSource::new(content)),
        InputFormat::Html => Box::new(HtmlTableSource::new(content, cfg.html.clone())),
    })
}
