use std::str::FromStr;
use std::sync::LazyLock;

use chrono::{Month, NaiveDate};
use regex::Regex;
use tracing::debug;

use crate::error::{DateNotFound, DocumentReadError};

static ISO_DATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d{4}-\d{2}-\d{2})").unwrap());
static COMPACT_DATE_STAMP: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(\d{8})_").unwrap());
static COMPACT_DATE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(\d{8})").unwrap());
static LONG_FORM_DATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([A-Za-z]+) (\d{1,2}), (\d{4})").unwrap());

/// A single date heuristic: returns an ISO date when the input matches
pub type TryExtractDate = fn(&str) -> Option<String>;

/// A named step of the date cascade
#[derive(Debug, Clone, Copy)]
pub struct DateStrategy {
    pub name: &'static str,
    pub extract: TryExtractDate,
}

impl DateStrategy {
    pub const fn new(name: &'static str, extract: TryExtractDate) -> Self {
        Self { name, extract }
    }
}

/// Literal `YYYY-MM-DD`, returned verbatim
pub fn iso_date(input: &str) -> Option<String> {
    ISO_DATE.captures(input).map(|caps| caps[1].to_string())
}

/// `YYYYMMDD_` as written by meeting capture tools (`-20250708_093029-`)
pub fn compact_date_stamp(input: &str) -> Option<String> {
    let caps = COMPACT_DATE_STAMP.captures(input)?;
    parse_compact(&caps[1])
}

/// Any `YYYYMMDD` run of digits
pub fn compact_date(input: &str) -> Option<String> {
    let caps = COMPACT_DATE.captures(input)?;
    parse_compact(&caps[1])
}

/// "Month Day, Year", e.g. "July 8, 2025"
pub fn long_form_date(input: &str) -> Option<String> {
    let caps = LONG_FORM_DATE.captures(input)?;
    let month = Month::from_str(&caps[1]).ok()?;
    let day: u32 = caps[2].parse().ok()?;
    let year: i32 = caps[3].parse().ok()?;
    NaiveDate::from_ymd_opt(year, month.number_from_month(), day).map(render)
}

fn parse_compact(digits: &str) -> Option<String> {
    let year: i32 = digits.get(0..4)?.parse().ok()?;
    let month: u32 = digits.get(4..6)?.parse().ok()?;
    let day: u32 = digits.get(6..8)?.parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day).map(render)
}

fn render(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Ordered date cascade: identifier strategies first, then the leading
/// lines of the document. First match wins.
#[derive(Debug, Clone)]
pub struct DateResolver {
    identifier_strategies: Vec<DateStrategy>,
    content_strategies: Vec<DateStrategy>,
    header_lines: usize,
}

impl Default for DateResolver {
    fn default() -> Self {
        Self {
            identifier_strategies: vec![
                DateStrategy::new("identifier_iso", iso_date),
                DateStrategy::new("identifier_stamp", compact_date_stamp),
            ],
            content_strategies: vec![
                DateStrategy::new("content_long_form", long_form_date),
                DateStrategy::new("content_iso", iso_date),
                DateStrategy::new("content_compact", compact_date),
            ],
            header_lines: 3,
        }
    }
}

impl DateResolver {
    pub fn new(
        identifier_strategies: Vec<DateStrategy>,
        content_strategies: Vec<DateStrategy>,
        header_lines: usize,
    ) -> Self {
        Self {
            identifier_strategies,
            content_strategies,
            header_lines,
        }
    }

    /// Try the identifier strategies only
    pub fn from_identifier(&self, identifier: &str) -> Option<String> {
        first_match(&self.identifier_strategies, identifier)
    }

    /// Try the content strategies on the first `header_lines` lines.
    ///
    /// Every strategy is applied to a line before moving on to the next one,
    /// so an earlier line always beats a later one.
    pub fn from_content(&self, lines: &[String]) -> Option<String> {
        lines
            .iter()
            .take(self.header_lines)
            .find_map(|line| first_match(&self.content_strategies, line.trim()))
    }

    /// Resolve a date from an identifier and already-loaded content
    pub fn resolve(&self, identifier: &str, lines: &[String]) -> Result<String, DateNotFound> {
        self.resolve_with(identifier, || Ok(lines.to_vec()))
    }

    /// Resolve a date, loading the content only if the identifier has none
    pub fn resolve_with<F>(&self, identifier: &str, load: F) -> Result<String, DateNotFound>
    where
        F: FnOnce() -> Result<Vec<String>, DocumentReadError>,
    {
        if let Some(date) = self.from_identifier(identifier) {
            return Ok(date);
        }

        let lines = load().map_err(|e| DateNotFound {
            identifier: identifier.to_string(),
            reason: e.to_string(),
        })?;

        self.from_content(&lines).ok_or_else(|| DateNotFound {
            identifier: identifier.to_string(),
            reason: format!(
                "no date in file name or first {} lines",
                self.header_lines
            ),
        })
    }
}

fn first_match(strategies: &[DateStrategy], input: &str) -> Option<String> {
    strategies.iter().find_map(|s| {
        let date = (s.extract)(input)?;
        debug!("Date {} matched by {} in {:?}", date, s.name, input);
        Some(date)
    })
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    fn lines(text: &[&str]) -> Vec<String> {
        text.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_iso_identifier_wins_over_content() {
        let resolver = DateResolver::default();
        let content = lines(&["July 9, 2025, 8:30AM", "20250710"]);

        let date = resolver
            .resolve("Week 1 - 2025-07-08 notes.docx", &content)
            .unwrap();

        assert_eq!(date, "2025-07-08");
    }

    #[test]
    fn test_iso_identifier_is_verbatim() {
        let resolver = DateResolver::default();
        assert_eq!(
            resolver.from_identifier("Week 9 2025-13-45.docx"),
            Some("2025-13-45".to_string())
        );
    }

    #[test]
    fn test_capture_tool_stamp() {
        let resolver = DateResolver::default();
        let date = resolver
            .resolve(
                "Week 4 - Day 2 - AM Session-20250708_093029-Meeting Recording.docx",
                &[],
            )
            .unwrap();

        assert_eq!(date, "2025-07-08");
    }

    #[test]
    fn test_invalid_stamp_falls_through_to_content() {
        let resolver = DateResolver::default();
        let content = lines(&["2025-07-09 standup"]);

        let date = resolver.resolve("Week 4-20251399_093029.docx", &content).unwrap();

        assert_eq!(date, "2025-07-09");
    }

    #[test]
    fn test_long_form_header() {
        let resolver = DateResolver::default();
        let content = lines(&["Team sync", "July 8, 2025, 8:30AM", "Jane Doe 0:03"]);

        assert_eq!(resolver.resolve("Week 1.docx", &content).unwrap(), "2025-07-08");
    }

    #[test]
    fn test_long_form_abbreviated_month() {
        assert_eq!(long_form_date("Sep 3, 2024"), Some("2024-09-03".to_string()));
        assert_eq!(long_form_date("Smarch 3, 2024"), None);
        assert_eq!(long_form_date("February 30, 2024"), None);
    }

    #[test]
    fn test_earlier_line_beats_later_strategy() {
        let resolver = DateResolver::default();
        let content = lines(&["recorded 20250701", "July 8, 2025"]);

        assert_eq!(resolver.resolve("Week 1.docx", &content).unwrap(), "2025-07-01");
    }

    #[test]
    fn test_only_first_three_lines_are_inspected() {
        let resolver = DateResolver::default();
        let content = lines(&["", "Agenda", "Attendees", "July 8, 2025"]);

        let err = resolver.resolve("Week 1.docx", &content).unwrap_err();
        assert_eq!(err.identifier, "Week 1.docx");
    }

    #[test]
    fn test_no_date_anywhere() {
        let resolver = DateResolver::default();
        let content = lines(&["Hello", "John Smith said hello"]);

        assert!(resolver.resolve("Week 1 notes.docx", &content).is_err());
    }

    #[test]
    fn test_content_not_loaded_when_identifier_matches() {
        let resolver = DateResolver::default();
        let date = resolver
            .resolve_with("Week 1 2025-07-08.docx", || {
                panic!("content should not be read")
            })
            .unwrap();

        assert_eq!(date, "2025-07-08");
    }

    #[test]
    fn test_read_failure_is_date_not_found() {
        let resolver = DateResolver::default();
        let err = resolver
            .resolve_with("Week 1.docx", || {
                Err(DocumentReadError::Parse {
                    path: PathBuf::from("Week 1.docx"),
                    message: "not a zip archive".to_string(),
                })
            })
            .unwrap_err();

        assert_eq!(err.identifier, "Week 1.docx");
        assert!(err.reason.contains("not a zip archive"));
    }

    #[test]
    fn test_custom_cascade() {
        let resolver = DateResolver::new(vec![], vec![DateStrategy::new("iso", iso_date)], 1);
        let content = lines(&["2025-07-08"]);

        assert_eq!(
            resolver.resolve("2025-01-01.docx", &content).unwrap(),
            "2025-07-08"
        );
    }
}
