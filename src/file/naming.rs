use super::document::DocumentTimestamp;
use regex::Regex;
use std::sync::LazyLock;

pub const FILENAME_PREFIX: &str = "hello_world_";
pub const FILENAME_EXTENSION: &str = "md";

/// Length of an unsuffixed document filename.
pub const FILENAME_LEN: usize = 30;

static FILENAME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^hello_world_(\d{8}_\d{6})(?:-(\d+))?\.md$").expect("Invalid regex pattern")
});

/// Builds `hello_world_YYYYMMDD_HHMMSS.md` for the given timestamp.
pub fn document_filename(timestamp: &DocumentTimestamp) -> String {
    format!("{}{}.{}", FILENAME_PREFIX, timestamp.compact(), FILENAME_EXTENSION)
}

/// Parses a document filename back into its timestamp and optional collision suffix.
///
/// Accepts only a bare filename, not a path.
///
/// # Examples
///
/// ```
/// use hellomd::file::naming::parse_document_filename;
///
/// let (ts, suffix) = parse_document_filename("hello_world_20240315_090507-2.md").unwrap();
/// assert_eq!(ts.to_string(), "2024-03-15 09:05:07");
/// assert_eq!(suffix, Some(2));
/// ```
pub fn parse_document_filename(filename: &str) -> Option<(DocumentTimestamp, Option<u32>)> {
    let captures = FILENAME_PATTERN.captures(filename)?;
    let timestamp = DocumentTimestamp::parse_compact(captures.get(1)?.as_str())?;
    let suffix = match captures.get(2) {
        Some(m) => Some(m.as_str().parse().ok()?),
        None => None,
    };
    Some((timestamp, suffix))
}

/// Inserts a `-n` collision suffix before the `.md` extension.
///
/// ```ignore
/// let result = with_collision_suffix("hello_world_20240315_090507.md", 2);
/// assert_eq!(result, "hello_world_20240315_090507-2.md");
/// ```
pub fn with_collision_suffix(filename: &str, n: u32) -> String {
    let stem = filename
        .strip_suffix(FILENAME_EXTENSION)
        .and_then(|s| s.strip_suffix('.'))
        .unwrap_or(filename);
    format!("{}-{}.{}", stem, n, FILENAME_EXTENSION)
}
