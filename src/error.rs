use std::path::PathBuf;

use thiserror::Error;

/// A document could not be opened or parsed
#[derive(Debug, Error)]
pub enum DocumentReadError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}: {message}", .path.display())]
    Parse { path: PathBuf, message: String },
}

/// No date strategy produced a value for a document
#[derive(Debug, Error)]
#[error("could not resolve a date for {identifier}: {reason}")]
pub struct DateNotFound {
    pub identifier: String,
    pub reason: String,
}

/// Catalog construction failures. All of these abort the run.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("cannot list folder {}: {source}", .folder.display())]
    Enumeration {
        folder: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    DateNotFound(#[from] DateNotFound),
}

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("instructor name file not found: {}", .0.display())]
    Missing(PathBuf),

    #[error("failed to read instructor name from {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
