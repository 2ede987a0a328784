mod common;

use chrono::Local;
use common::*;
use hellomd::file::document::parse_generated_at;
use hellomd::file::naming::{parse_document_filename, FILENAME_LEN};
use hellomd::{create_hello_world_document, verify_document, DocumentTimestamp, FileGenerator, GenerateError};
use pretty_assertions::assert_eq;
use regex::Regex;
use serial_test::serial;
use tempfile::TempDir;

#[test]
#[serial]
fn test_default_operation_writes_into_cwd() {
    let temp_dir = TempDir::new().unwrap();
    let _cwd = CwdGuard::enter(temp_dir.path());

    let before = DocumentTimestamp::new(Local::now().naive_local()).unwrap();
    let filename = create_hello_world_document().unwrap();
    let after = DocumentTimestamp::new(Local::now().naive_local()).unwrap();

    let pattern = Regex::new(r"^hello_world_\d{8}_\d{6}\.md$").unwrap();
    assert!(pattern.is_match(&filename), "{filename}");
    assert_eq!(filename.len(), FILENAME_LEN);

    // Filename fields come from the clock reading taken during the call
    let (timestamp, suffix) = parse_document_filename(&filename).unwrap();
    assert_eq!(suffix, None);
    assert!(before <= timestamp && timestamp <= after);

    assert_eq!(list_files(temp_dir.path()), vec![filename.clone()]);
}

#[test]
#[serial]
fn test_content_timestamp_matches_filename() {
    let temp_dir = TempDir::new().unwrap();
    let _cwd = CwdGuard::enter(temp_dir.path());

    let filename = create_hello_world_document().unwrap();
    let content = std::fs::read_to_string(temp_dir.path().join(&filename)).unwrap();

    let (from_name, _) = parse_document_filename(&filename).unwrap();
    assert_eq!(parse_generated_at(&content), Some(from_name));
    assert!(verify_document(&temp_dir.path().join(&filename)).unwrap().is_valid());
}

#[test]
fn test_example_document_exact() {
    let temp_dir = TempDir::new().unwrap();
    let generator = FileGenerator::new()
        .with_clock(fixed_clock(2024, 3, 15, 9, 5, 7))
        .with_output_dir(temp_dir.path());

    let filename = generator.create_hello_world_document().unwrap();

    assert_eq!(filename, "hello_world_20240315_090507.md");
    let content = std::fs::read_to_string(temp_dir.path().join(&filename)).unwrap();
    assert_eq!(
        content,
        "# Hello World\n\nGenerated at: 2024-03-15 09:05:07\n\n**Message:** Hello World!\n"
    );
}

#[test]
fn test_same_second_calls_collide_and_overwrite() {
    let temp_dir = TempDir::new().unwrap();
    let target = temp_dir.path().join("hello_world_20240315_090507.md");
    let generator = FileGenerator::new()
        .with_clock(fixed_clock(2024, 3, 15, 9, 5, 7))
        .with_output_dir(temp_dir.path());

    let first = generator.create_hello_world_document().unwrap();
    std::fs::write(&target, "edited by hand").unwrap();
    let second = generator.create_hello_world_document().unwrap();

    assert_eq!(first, second);
    assert_eq!(list_files(temp_dir.path()), vec![first]);
    assert!(verify_document(&target).unwrap().is_valid());
}

#[test]
fn test_unwritable_directory_returns_error_and_creates_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("gone");
    let generator = FileGenerator::new()
        .with_clock(fixed_clock(2024, 3, 15, 9, 5, 7))
        .with_output_dir(&missing);

    let err = generator.create_hello_world_document().unwrap_err();

    assert!(matches!(err, GenerateError::Open { .. }));
    assert!(err.to_string().starts_with("Could not create file"));
    assert!(list_files(temp_dir.path()).is_empty());
}

#[test]
fn test_each_call_returns_its_own_filename() {
    let temp_dir = TempDir::new().unwrap();
    let earlier = FileGenerator::new()
        .with_clock(fixed_clock(2024, 3, 15, 9, 5, 7))
        .with_output_dir(temp_dir.path())
        .create_hello_world_document()
        .unwrap();
    let later = FileGenerator::new()
        .with_clock(fixed_clock(2024, 3, 15, 9, 5, 8))
        .with_output_dir(temp_dir.path())
        .create_hello_world_document()
        .unwrap();

    // The first result is unaffected by the second call
    assert_eq!(earlier, "hello_world_20240315_090507.md");
    assert_eq!(later, "hello_world_20240315_090508.md");
    assert_eq!(list_files(temp_dir.path()), vec![earlier, later]);
}
