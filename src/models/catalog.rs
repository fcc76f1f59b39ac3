use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// A transcript file paired with the date it is attributed to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// File name relative to the catalog folder (the document identifier)
    pub file_name: String,
    /// Full path used to open the document
    pub path: PathBuf,
    /// Resolved date as `YYYY-MM-DD`
    pub date: String,
}

/// The file → date mapping built before aggregation begins.
///
/// Entries keep filesystem enumeration order. Nothing downstream relies on
/// that order except progress logging.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    /// Folder the entries were enumerated from
    pub folder: PathBuf,
    /// One entry per resolved document
    pub entries: Vec<CatalogEntry>,
}

impl Catalog {
    pub fn new(folder: impl Into<PathBuf>) -> Self {
        Self {
            folder: folder.into(),
            entries: Vec::new(),
        }
    }

    /// Add a resolved document to the catalog
    pub fn insert(&mut self, file_name: impl Into<String>, date: impl Into<String>) {
        let file_name = file_name.into();
        let path = self.folder.join(&file_name);
        self.entries.push(CatalogEntry {
            file_name,
            path,
            date: date.into(),
        });
    }

    /// Date resolved for a file name, if cataloged
    pub fn date_of(&self, file_name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.file_name == file_name)
            .map(|e| e.date.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
