use std::path::Path;

use serde::Serialize;

use crate::error::ReportError;
use crate::models::{AggregateTable, InterventionRow, ReportMetadata};

/// Column headers of the CSV report
pub const CSV_HEADERS: [&str; 3] = ["Date", "Speaker", "Intervention Count"];

/// File name of the default report inside the input folder
pub const DEFAULT_REPORT_NAME: &str = "engagement_summary.csv";

/// JSON report: rows plus run metadata
#[derive(Debug, Clone, Serialize)]
pub struct JsonReport<'a> {
    pub rows: &'a [InterventionRow],
    pub metadata: ReportMetadata,
}

/// Write the table as CSV. The header row is always present.
pub fn write_csv(table: &AggregateTable, path: &Path) -> Result<(), ReportError> {
    ensure_parent_dir(path)?;

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)?;
    writer.write_record(CSV_HEADERS)?;
    for row in &table.rows {
        writer.serialize(row)?;
    }
    writer.flush().map_err(|source| ReportError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(())
}

/// Write the table and metadata as pretty-printed JSON
pub fn write_json(
    table: &AggregateTable,
    metadata: ReportMetadata,
    path: &Path,
) -> Result<(), ReportError> {
    ensure_parent_dir(path)?;

    let file = std::fs::File::create(path).map_err(|source| ReportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let report = JsonReport {
        rows: &table.rows,
        metadata,
    };
    serde_json::to_writer_pretty(file, &report)?;

    Ok(())
}

fn ensure_parent_dir(path: &Path) -> Result<(), ReportError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|source| ReportError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    Ok(())
}
