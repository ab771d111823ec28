//! Records scraped from a saved attendance page.
//!
//! Each `<tr>` of the configured table (its `<tbody>` when present) is one
//! day. The day number is the text of the element whose class list contains
//! `date_class`; the worked time is the text of the element whose class list
//! contains `work_class`.

use super::DayRecordSource;
use crate::config::HtmlConfig;
use crate::errors::{AppError, AppResult};
use crate::models::DayRecord;
use crate::utils::parse_work_time;
use regex::Regex;
use std::sync::OnceLock;
use tracing::{debug, warn};

pub struct HtmlTableSource {
    content: String,
    html: HtmlConfig,
}

fn tbody_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?is)<tbody\b[^>]*>(.*?)</tbody>").expect("static tbody regex"))
}

fn row_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?is)<tr\b[^>]*>(.*?)</tr>").expect("static row regex"))
}

/// Opening tag carrying a class attribute: (tag name, class list).
/// `data-class` and similar attributes are not a class list.
fn classed_tag_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"(?is)<([a-z][a-z0-9]*)\b[^>]*?\sclass\s*=\s*["']([^"']*)["'][^>]*>"#)
            .expect("static class regex")
    })
}

fn tag_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?s)<[^>]*>").expect("static tag regex"))
}

impl HtmlTableSource {
    pub fn new(content: impl Into<String>, html: HtmlConfig) -> Self {
        Self {
            content: content.into(),
            html,
        }
    }

    fn table_body<'a>(&self, doc: &'a str) -> AppResult<&'a str> {
        let pattern = format!(
            r#"(?is)<table\b[^>]*?\sid\s*=\s*["']{}["'][^>]*>(.*?)</table>"#,
            regex::escape(&self.html.table_id)
        );
        let table_re = Regex::new(&pattern).map_err(|e| AppError::Source(e.to_string()))?;

        let table = table_re
            .captures(doc)
            .and_then(|c| c.get(1))
            .ok_or_else(|| {
                AppError::Source(format!(
                    "attendance table #{} not found",
                    self.html.table_id
                ))
            })?
            .as_str();

        Ok(tbody_re()
            .captures(table)
            .and_then(|c| c.get(1))
            .map(|m| m.as_str())
            .unwrap_or(table))
    }
}

/// Visible text of the first element in `row` whose class list has `class`.
fn text_of_class(row: &str, class: &str) -> Option<String> {
    for caps in classed_tag_re().captures_iter(row) {
        let classes = caps.get(2)?.as_str();
        if !classes.split_whitespace().any(|c| c == class) {
            continue;
        }

        let tag = caps.get(1)?.as_str().to_ascii_lowercase();
        let rest = &row[caps.get(0)?.end()..];
        let close = format!("</{tag}");
        let end = rest.to_ascii_lowercase().find(&close).unwrap_or(rest.len());

        let text = tag_re().replace_all(&rest[..end], "");
        return Some(decode_entities(&text).trim().to_string());
    }
    None
}

fn decode_entities(s: &str) -> String {
    s.replace("&nbsp;", " ")
        .replace("&#160;", " ")
        .replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
}

/// Leading decimal digits of `text` (`"5(土)"` -> 5), like a lenient integer read.
fn leading_int(text: &str) -> Option<i64> {
    let digits: String = text
        .trim()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().ok()
}

impl DayRecordSource for HtmlTableSource {
    fn fetch_records(&self) -> AppResult<Vec<DayRecord>> {
        let body = self.table_body(&self.content)?;
        let mut records = Vec::new();

        for caps in row_re().captures_iter(body) {
            let Some(row) = caps.get(1).map(|m| m.as_str()) else {
                continue;
            };

            let Some(day_text) = text_of_class(row, &self.html.date_class) else {
                continue;
            };
            let Some(day) = leading_int(&day_text) else {
                continue;
            };

            let record = match DayRecord::from_raw(day, 0) {
                Ok(r) => r,
                Err(e) => {
                    warn!(day, "skipping row: {e}");
                    continue;
                }
            };

            let minutes = match text_of_class(row, &self.html.work_class) {
                Some(t) => parse_work_time(&t)
                    .map_err(|_| AppError::InvalidTime(format!("'{t}' on day {day}")))?,
                None => 0,
            };

            records.push(DayRecord { minutes, ..record });
        }

        debug!(count = records.len(), "html rows read");
        Ok(records)
    }
}
