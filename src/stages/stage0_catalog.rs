use std::path::Path;

use tracing::{info, warn};

use crate::error::CatalogError;
use crate::heuristics::DateResolver;
use crate::io::DocumentReader;
use crate::models::Catalog;

/// Configuration for catalog construction
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Only files whose name starts with this prefix are considered
    pub prefix: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            prefix: "Week ".to_string(),
        }
    }
}

/// List document file names directly under `folder`.
///
/// Names keep filesystem enumeration order.
pub fn list_documents(
    folder: &Path,
    prefix: &str,
    extension: &str,
) -> Result<Vec<String>, CatalogError> {
    let enumeration_error = |source: std::io::Error| CatalogError::Enumeration {
        folder: folder.to_path_buf(),
        source,
    };

    let suffix = format!(".{}", extension);
    let mut names = Vec::new();

    for entry in std::fs::read_dir(folder).map_err(enumeration_error)? {
        let entry = entry.map_err(enumeration_error)?;
        if !entry.file_type().map_err(enumeration_error)?.is_file() {
            continue;
        }

        let Some(name) = entry.file_name().to_str().map(str::to_string) else {
            warn!("Skipping non UTF-8 file name {:?}", entry.file_name());
            continue;
        };

        if name.starts_with(prefix) && name.ends_with(&suffix) {
            names.push(name);
        }
    }

    Ok(names)
}

/// Build the file → date catalog.
///
/// Any file without a resolvable date aborts the whole catalog. An empty
/// folder yields an empty catalog.
pub fn execute_catalog(
    folder: &Path,
    config: &CatalogConfig,
    reader: &dyn DocumentReader,
    resolver: &DateResolver,
) -> Result<Catalog, CatalogError> {
    let names = list_documents(folder, &config.prefix, reader.extension())?;
    let mut catalog = Catalog::new(folder);

    for name in names {
        let path = folder.join(&name);
        let date = resolver.resolve_with(&name, || reader.read_paragraphs(&path))?;
        info!("Extracted date {} from {}", date, name);
        catalog.insert(name, date);
    }

    if catalog.is_empty() {
        warn!(
            "No files matching {:?}*.{} found in {:?}",
            config.prefix,
            reader.extension(),
            folder
        );
    }

    Ok(catalog)
}
