pub mod config;
pub mod error;
pub mod heuristics;
pub mod io;
pub mod models;
pub mod stages;

pub use config::{InstructorConfig, default_report_path};
pub use error::{CatalogError, ConfigError, DateNotFound, DocumentReadError, ReportError};
pub use heuristics::{DateResolver, ExtractSpeakerCounts, SpeakerExtractor, TryExtractDate};
pub use io::{DocumentReader, DocxReader, PlainTextReader};
pub use models::{AggregateTable, Catalog, CatalogEntry, InterventionRow, SpeakerCounts};
pub use stages::{Aggregator, CatalogConfig, ReportConfig, execute_catalog, execute_report};
