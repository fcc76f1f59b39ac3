use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Speaker display name → number of turns, scoped to one document
pub type SpeakerCounts = BTreeMap<String, u32>;

/// One output row of the aggregate table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterventionRow {
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Speaker")]
    pub speaker: String,
    #[serde(rename = "Intervention Count")]
    pub count: u32,
}

impl InterventionRow {
    pub fn new(date: impl Into<String>, speaker: impl Into<String>, count: u32) -> Self {
        Self {
            date: date.into(),
            speaker: speaker.into(),
            count,
        }
    }
}

/// Date × speaker intervention totals, sorted by date then speaker
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AggregateTable {
    pub rows: Vec<InterventionRow>,
    /// Files whose counts were merged
    pub files_processed: usize,
    /// Files skipped because they were missing or unreadable
    pub files_skipped: usize,
    /// Rows dropped by the instructor filter
    pub rows_excluded: usize,
}

impl AggregateTable {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Total interventions across all rows
    pub fn total_interventions(&self) -> u64 {
        self.rows.iter().map(|r| r.count as u64).sum()
    }

    /// Distinct dates in output order
    pub fn dates(&self) -> Vec<&str> {
        let mut dates: Vec<&str> = self.rows.iter().map(|r| r.date.as_str()).collect();
        dates.dedup();
        dates
    }
}

/// Run-level figures written alongside the JSON report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMetadata {
    pub files_cataloged: usize,
    pub files_processed: usize,
    pub files_skipped: usize,
    pub rows_excluded: usize,
    pub instructor_excluded: Option<String>,
}
