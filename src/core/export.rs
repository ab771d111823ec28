use crate::core::summary::RangeSummary;
use crate::errors::{AppError, AppResult};
use crate::export::{ExportFormat, RangeExport, RecordExport, export_csv, export_json};
use crate::export::fs_utils::ensure_writable;
use crate::ui::messages::warning;
use crate::utils::path::expand_tilde;
use tracing::info;

pub struct ExportLogic;

impl ExportLogic {
    /// Export the records selected by `summary`.
    ///
    /// - `format`: csv | json
    /// - `file`: absolute path of the output file (`~/` is expanded)
    /// - `force`: overwrite without asking
    pub fn export(
        summary: &RangeSummary,
        format: ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<()> {
        let path = expand_tilde(file);
        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "Output file path must be absolute: {file}"
            )));
        }

        if summary.included.is_empty() {
            warning("No records found for the selected range. Nothing to export.");
            return Ok(());
        }

        ensure_writable(&path, force)?;

        let records: Vec<RecordExport> = summary
            .included
            .iter()
            .map(RecordExport::from)
            .collect();

        info!(
            format = format.as_str(),
            count = records.len(),
            path = %path.display(),
            "exporting"
        );

        match format {
            ExportFormat::Csv => export_csv(&records, &path),
            ExportFormat::Json => export_json(&RangeExport::new(summary, records), &path),
        }
    }
}
