//! The generated Hello World document.
//!
//! A [`GeneratedDocument`] is built from exactly one [`DocumentTimestamp`];
//! its filename and its `Generated at:` line are both derived from that value.

use super::error::{GenerateError, GenerateResult};
use super::naming;
use crate::util::clock::Clock;
use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};
use std::fmt;

pub const HEADING: &str = "# Hello World";
pub const MESSAGE: &str = "Hello World!";

const GENERATED_AT_PREFIX: &str = "Generated at: ";
const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
const COMPACT_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Local wall-clock instant at whole-second resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DocumentTimestamp(NaiveDateTime);

impl DocumentTimestamp {
    /// Truncates `instant` to whole seconds.
    ///
    /// Years outside 0..=9999 are rejected since the filename reserves
    /// exactly four digits for the year.
    pub fn new(instant: NaiveDateTime) -> GenerateResult<Self> {
        let year = instant.year();
        if !(0..=9999).contains(&year) {
            return Err(GenerateError::TimestampOutOfRange { year });
        }
        let truncated = instant.with_nanosecond(0).unwrap_or(instant);
        Ok(Self(truncated))
    }

    /// Reads the clock once.
    pub fn capture(clock: &dyn Clock) -> GenerateResult<Self> {
        Self::new(clock.now())
    }

    pub fn from_fields(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
    ) -> Option<Self> {
        let instant = NaiveDate::from_ymd_opt(year, month, day)?.and_hms_opt(hour, minute, second)?;
        Self::new(instant).ok()
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    pub fn minute(&self) -> u32 {
        self.0.minute()
    }

    pub fn second(&self) -> u32 {
        self.0.second()
    }

    pub fn as_naive(&self) -> NaiveDateTime {
        self.0
    }

    /// `YYYYMMDD_HHMMSS`, as embedded in the filename.
    pub fn compact(&self) -> String {
        self.0.format(COMPACT_FORMAT).to_string()
    }

    /// Parses the `YYYYMMDD_HHMMSS` filename form.
    pub fn parse_compact(s: &str) -> Option<Self> {
        let instant = NaiveDateTime::parse_from_str(s, COMPACT_FORMAT).ok()?;
        Self::new(instant).ok()
    }

    /// Parses the `YYYY-MM-DD HH:MM:SS` content form.
    pub fn parse_display(s: &str) -> Option<Self> {
        let instant = NaiveDateTime::parse_from_str(s, DISPLAY_FORMAT).ok()?;
        Self::new(instant).ok()
    }
}

impl fmt::Display for DocumentTimestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DISPLAY_FORMAT))
    }
}

/// A document ready to be written: filename and content from one timestamp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedDocument {
    pub timestamp: DocumentTimestamp,
    pub filename: String,
    pub content: String,
}

impl GeneratedDocument {
    pub fn new(timestamp: DocumentTimestamp) -> Self {
        Self {
            timestamp,
            filename: naming::document_filename(&timestamp),
            content: render_content(&timestamp),
        }
    }

    pub fn capture(clock: &dyn Clock) -> GenerateResult<Self> {
        Ok(Self::new(DocumentTimestamp::capture(clock)?))
    }
}

/// Renders the Markdown body for `timestamp`.
pub fn render_content(timestamp: &DocumentTimestamp) -> String {
    format!("{HEADING}\n\n{GENERATED_AT_PREFIX}{timestamp}\n\n**Message:** {MESSAGE}\n")
}

/// Finds the `Generated at:` line and parses its timestamp.
pub fn parse_generated_at(content: &str) -> Option<DocumentTimestamp> {
    content
        .lines()
        .find_map(|line| line.strip_prefix(GENERATED_AT_PREFIX))
        .and_then(|value| DocumentTimestamp::parse_display(value.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::clock::FixedClock;
    use pretty_assertions::assert_eq;

    fn example_timestamp() -> DocumentTimestamp {
        DocumentTimestamp::from_fields(2024, 3, 15, 9, 5, 7).unwrap()
    }

    #[test]
    fn test_render_example_document() {
        let doc = GeneratedDocument::new(example_timestamp());

        assert_eq!(doc.filename, "hello_world_20240315_090507.md");
        assert_eq!(
            doc.content,
            "# Hello World\n\nGenerated at: 2024-03-15 09:05:07\n\n**Message:** Hello World!\n"
        );
    }

    #[test]
    fn test_timestamp_fields() {
        let ts = example_timestamp();
        assert_eq!(
            (ts.year(), ts.month(), ts.day(), ts.hour(), ts.minute(), ts.second()),
            (2024, 3, 15, 9, 5, 7)
        );
        assert_eq!(ts.compact(), "20240315_090507");
        assert_eq!(ts.to_string(), "2024-03-15 09:05:07");
    }

    #[test]
    fn test_capture_drops_subseconds() {
        let instant = NaiveDate::from_ymd_opt(2024, 12, 31)
            .unwrap()
            .and_hms_milli_opt(23, 59, 59, 999)
            .unwrap();
        let doc = GeneratedDocument::capture(&FixedClock(instant)).unwrap();

        assert_eq!(doc.filename, "hello_world_20241231_235959.md");
        assert_eq!(doc.timestamp.as_naive().nanosecond(), 0);
    }

    #[test]
    fn test_year_out_of_range_rejected() {
        let instant = NaiveDate::from_ymd_opt(10000, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        let result = DocumentTimestamp::new(instant);
        assert!(matches!(
            result,
            Err(GenerateError::TimestampOutOfRange { year: 10000 })
        ));
    }

    #[test]
    fn test_early_year_is_zero_padded() {
        let ts = DocumentTimestamp::from_fields(987, 1, 2, 3, 4, 5).unwrap();
        assert_eq!(ts.compact(), "09870102_030405");
        assert_eq!(ts.to_string(), "0987-01-02 03:04:05");
    }

    #[test]
    fn test_parse_generated_at_matches_render() {
        let ts = example_timestamp();
        let content = render_content(&ts);
        assert_eq!(parse_generated_at(&content), Some(ts));
    }

    #[test]
    fn test_parse_generated_at_missing_or_malformed() {
        assert_eq!(parse_generated_at("# Hello World\n"), None);
        assert_eq!(parse_generated_at("Generated at: yesterday\n"), None);
    }

    #[test]
    fn test_parse_compact() {
        assert_eq!(
            DocumentTimestamp::parse_compact("20240315_090507"),
            Some(example_timestamp())
        );
        assert_eq!(DocumentTimestamp::parse_compact("20241315_090507"), None);
    }
}
