use regex::Regex;

use crate::models::SpeakerCounts;

/// Default speaker prefix: capitalized name tokens at line start, then
/// whitespace or the end of the line
pub const DEFAULT_SPEAKER_PATTERN: &str =
    r"^([A-Z][a-z]+(?:-[A-Z]?[a-z]+)*(?: [A-Z][a-z]+(?:-[A-Z]?[a-z]+)*)*)(?:\s+|$)";

/// Anything that can count speaking turns in a document's text
pub trait ExtractSpeakerCounts {
    fn extract(&self, text: &str) -> SpeakerCounts;
}

/// Counts lines that open with a speaker's name.
///
/// Transcript exports put the speaker before each utterance, so every line
/// whose prefix matches the pattern is one intervention. Names are compared
/// exactly, with no alias or fuzzy matching.
#[derive(Debug, Clone)]
pub struct SpeakerExtractor {
    pattern: Regex,
}

impl Default for SpeakerExtractor {
    fn default() -> Self {
        Self {
            pattern: Regex::new(DEFAULT_SPEAKER_PATTERN).unwrap(),
        }
    }
}

impl SpeakerExtractor {
    /// Use a custom pattern. Capture group 1 must hold the speaker name.
    pub fn with_pattern(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            pattern: Regex::new(pattern)?,
        })
    }
}

impl ExtractSpeakerCounts for SpeakerExtractor {
    fn extract(&self, text: &str) -> SpeakerCounts {
        let mut counts = SpeakerCounts::new();

        for line in text.lines() {
            let Some(caps) = self.pattern.captures(line) else {
                continue;
            };
            let Some(name) = caps.get(1) else {
                continue;
            };
            let name = name.as_str().trim();
            if name.is_empty() {
                continue;
            }
            *counts.entry(name.to_string()).or_insert(0) += 1;
        }

        counts
    }
}
