use std::path::PathBuf;

use tracing::info;

use crate::config::InstructorConfig;
use crate::error::ReportError;
use crate::io::{write_csv, write_json};
use crate::models::{AggregateTable, Catalog, ReportMetadata};

/// Where the report is written
#[derive(Debug, Clone)]
pub struct ReportConfig {
    pub csv_path: PathBuf,
    /// Optional JSON copy with run metadata
    pub json_path: Option<PathBuf>,
}

/// Paths actually written
#[derive(Debug)]
pub struct ReportResult {
    pub csv_path: PathBuf,
    pub json_path: Option<PathBuf>,
}

/// Persist the aggregate table.
///
/// Only called with a table built from a complete catalog.
pub fn execute_report(
    table: &AggregateTable,
    catalog: &Catalog,
    instructor: &InstructorConfig,
    config: &ReportConfig,
) -> Result<ReportResult, ReportError> {
    write_csv(table, &config.csv_path)?;
    info!("Engagement summary saved to {:?}", config.csv_path);

    if let Some(path) = &config.json_path {
        let metadata = ReportMetadata {
            files_cataloged: catalog.len(),
            files_processed: table.files_processed,
            files_skipped: table.files_skipped,
            rows_excluded: table.rows_excluded,
            instructor_excluded: instructor.name.clone(),
        };
        write_json(table, metadata, path)?;
        info!("JSON summary saved to {:?}", path);
    }

    Ok(ReportResult {
        csv_path: config.csv_path.clone(),
        json_path: config.json_path.clone(),
    })
}
