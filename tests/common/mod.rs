use chrono::NaiveDate;
use hellomd::FixedClock;
use std::path::{Path, PathBuf};

/// Clock pinned to the given local wall-clock time
pub fn fixed_clock(
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: u32,
) -> FixedClock {
    let instant = NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(hour, minute, second))
        .expect("valid test timestamp");
    FixedClock(instant)
}

/// Sorted filenames in `dir`
pub fn list_files(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

/// Switches the process working directory until dropped
///
/// Tests using this must be `#[serial]`.
#[allow(dead_code)]
pub struct CwdGuard {
    original: PathBuf,
}

impl CwdGuard {
    #[allow(dead_code)]
    pub fn enter(dir: &Path) -> Self {
        let original = std::env::current_dir().unwrap();
        std::env::set_current_dir(dir).unwrap();
        Self { original }
    }
}

impl Drop for CwdGuard {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.original);
    }
}
