use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::error::ConfigError;

/// Environment variable that overrides the instructor name file
pub const INSTRUCTOR_ENV_VAR: &str = "ENGAGEMENT_INSTRUCTOR";

/// Default instructor name file, relative to the working directory
pub const DEFAULT_INSTRUCTOR_FILE: &str = "instructor_name.txt";

/// Instructor whose turns are left out of the report.
///
/// Loaded once before processing and handed to the aggregator. `None`
/// disables the exclusion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstructorConfig {
    pub name: Option<String>,
}

impl InstructorConfig {
    pub fn new(name: impl Into<String>) -> Self {
        Self::from_value(&name.into())
    }

    /// No exclusion
    pub fn none() -> Self {
        Self { name: None }
    }

    fn from_value(value: &str) -> Self {
        let trimmed = value.trim();
        Self {
            name: (!trimmed.is_empty()).then(|| trimmed.to_string()),
        }
    }

    /// Read the name from a text file. An empty file means no exclusion.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => Ok(Self::from_value(&content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(ConfigError::Missing(path.to_path_buf()))
            }
            Err(source) => Err(ConfigError::Io {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    /// Load from the environment, falling back to the file.
    ///
    /// Never fails: a missing or unreadable source is logged and treated as
    /// "no exclusion".
    pub fn load(file: &Path) -> Self {
        Self::load_from(std::env::var(INSTRUCTOR_ENV_VAR).ok(), file)
    }

    fn load_from(env_value: Option<String>, file: &Path) -> Self {
        if let Some(config) = env_value
            .map(|v| Self::from_value(&v))
            .filter(|c| c.name.is_some())
        {
            info!("Instructor name taken from {}", INSTRUCTOR_ENV_VAR);
            return config;
        }

        match Self::from_file(file) {
            Ok(config) => {
                if config.name.is_none() {
                    warn!("Instructor name file {:?} is empty; no exclusion applied", file);
                }
                config
            }
            Err(e) => {
                warn!("{}; no exclusion applied", e);
                Self::none()
            }
        }
    }

    /// Whether a speaker is the configured instructor
    pub fn is_instructor(&self, speaker: &str) -> bool {
        self.name.as_deref() == Some(speaker.trim())
    }
}

/// Default report location for an input folder
pub fn default_report_path(folder: &Path) -> PathBuf {
    folder.join(crate::io::DEFAULT_REPORT_NAME)
}
