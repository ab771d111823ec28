//! Unified application error type.
//! All modules (core, source, cli, utils) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Source / decoding errors
    // ---------------------------
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid record source: {0}")]
    Source(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid day of month: {0} (expected 1..31)")]
    InvalidDay(String),

    #[error("Invalid work time: {0}")]
    InvalidTime(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    // ---------------------------
    // Range errors
    // ---------------------------
    #[error("Invalid range {start}..{end}: enter valid days ({min}..{max})")]
    InvalidRange {
        start: String,
        end: String,
        min: u8,
        max: u8,
    },

    #[error("No attendance data found in the period")]
    NoData,

    /// Already worded for the user's language; printed as is.
    #[error("{0}")]
    Message(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Configuration format error: {0}")]
    ConfigFormat(#[from] serde_yaml::Error),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),
}

impl AppError {
    /// Line shown to the user when a command fails.
    pub fn report(&self) -> String {
        match self {
            AppError::Message(msg) => msg.clone(),
            other => format!("Error: {}", other),
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
