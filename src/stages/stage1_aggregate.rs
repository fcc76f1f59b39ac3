use std::collections::BTreeMap;

use tracing::{debug, info, warn};

use crate::config::InstructorConfig;
use crate::heuristics::{ExtractSpeakerCounts, SpeakerExtractor};
use crate::io::DocumentReader;
use crate::models::{AggregateTable, Catalog, InterventionRow, SpeakerCounts};

/// Running totals: date → speaker → interventions
pub type DailySummary = BTreeMap<String, SpeakerCounts>;

/// Merges per-file speaker counts into the date × speaker table
pub struct Aggregator<E = SpeakerExtractor> {
    instructor: InstructorConfig,
    extractor: E,
}

impl Aggregator<SpeakerExtractor> {
    pub fn new(instructor: InstructorConfig) -> Self {
        Self::with_extractor(instructor, SpeakerExtractor::default())
    }
}

impl<E: ExtractSpeakerCounts> Aggregator<E> {
    pub fn with_extractor(instructor: InstructorConfig, extractor: E) -> Self {
        Self {
            instructor,
            extractor,
        }
    }

    pub fn instructor(&self) -> &InstructorConfig {
        &self.instructor
    }

    /// Count interventions for every cataloged file.
    ///
    /// A file that is missing or unreadable contributes nothing; the rest of
    /// the catalog is still aggregated.
    pub fn aggregate(&self, catalog: &Catalog, reader: &dyn DocumentReader) -> AggregateTable {
        let mut summary = DailySummary::new();
        let mut files_processed = 0;
        let mut files_skipped = 0;

        for (i, entry) in catalog.entries.iter().enumerate() {
            debug!(
                "[{}/{}] Counting interventions in {}",
                i + 1,
                catalog.len(),
                entry.file_name
            );

            if !entry.path.exists() {
                warn!("File not found: {:?}", entry.path);
                files_skipped += 1;
                continue;
            }

            let text = match reader.read_text(&entry.path) {
                Ok(text) => text,
                Err(e) => {
                    warn!("Error processing file {}: {}", entry.file_name, e);
                    files_skipped += 1;
                    continue;
                }
            };

            let counts = self.extractor.extract(&text);
            debug!("{}: {} speakers", entry.file_name, counts.len());
            merge_counts(&mut summary, &entry.date, &counts);
            files_processed += 1;
        }

        let mut table = self.flatten(&summary);
        table.files_processed = files_processed;
        table.files_skipped = files_skipped;
        table
    }

    /// Turn running totals into sorted rows, dropping the instructor
    pub fn flatten(&self, summary: &DailySummary) -> AggregateTable {
        let mut rows = Vec::new();
        let mut rows_excluded = 0;

        for (date, speakers) in summary {
            for (speaker, &count) in speakers {
                if self.instructor.is_instructor(speaker) {
                    info!("Skipping instructor {} for date {}", speaker, date);
                    rows_excluded += 1;
                    continue;
                }
                rows.push(InterventionRow::new(date.as_str(), speaker.as_str(), count));
            }
        }

        rows.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.speaker.cmp(&b.speaker)));

        AggregateTable {
            rows,
            rows_excluded,
            ..Default::default()
        }
    }
}

/// Add one document's counts to the totals for its date
pub fn merge_counts(summary: &mut DailySummary, date: &str, counts: &SpeakerCounts) {
    let day = summary.entry(date.to_string()).or_default();
    for (speaker, &count) in counts {
        *day.entry(speaker.clone()).or_insert(0) += count;
    }
}
