//! Writes Hello World documents to disk.

use super::document::{parse_generated_at, render_content, DocumentTimestamp, GeneratedDocument};
use super::error::{GenerateError, GenerateResult};
use super::naming;
use crate::util::clock::{Clock, SystemClock};
use serde::{Deserialize, Serialize};
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

/// Default highest `-N` suffix tried under [`CollisionPolicy::Unique`].
const MAX_COLLISION_SUFFIX: u32 = 999;

/// What to do when the target filename already exists.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum CollisionPolicy {
    /// Truncate and rewrite the existing file
    #[default]
    Overwrite,
    /// Pick the next free `-N` suffix
    Unique,
}

/// Outcome of a successful generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    /// Bare filename, as returned to the host
    pub filename: String,
    /// Location the document was written to
    pub path: PathBuf,
    pub timestamp: DocumentTimestamp,
}

/// Creates timestamped Hello World documents.
pub struct FileGenerator {
    clock: Box<dyn Clock>,
    output_dir: Option<PathBuf>,
    on_collision: CollisionPolicy,
    max_collision_suffix: u32,
    sync_to_disk: bool,
}

impl FileGenerator {
    /// System clock, current working directory, overwrite on collision.
    pub fn new() -> Self {
        Self {
            clock: Box::new(SystemClock::new()),
            output_dir: None,
            on_collision: CollisionPolicy::default(),
            max_collision_suffix: MAX_COLLISION_SUFFIX,
            sync_to_disk: true,
        }
    }

    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = Some(dir.into());
        self
    }

    pub fn with_collision_policy(mut self, policy: CollisionPolicy) -> Self {
        self.on_collision = policy;
        self
    }

    pub fn with_sync(mut self, sync_to_disk: bool) -> Self {
        self.sync_to_disk = sync_to_disk;
        self
    }

    /// Generates a document and returns its filename.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::Open`] if the file cannot be created, in which
    /// case nothing is written. Write and sync failures remove the partial file
    /// and return [`GenerateError::Write`] / [`GenerateError::Sync`].
    pub fn create_hello_world_document(&self) -> GenerateResult<String> {
        self.generate().map(|generated| generated.filename)
    }

    /// Generates a document and returns where it went.
    pub fn generate(&self) -> GenerateResult<GeneratedFile> {
        let document = GeneratedDocument::capture(self.clock.as_ref())?;
        tracing::trace!("Captured timestamp {}", document.timestamp);

        let (filename, file) = self.open(&document.filename)?;
        let path = self.path_for(&filename);
        tracing::debug!("Opened {} for writing", path.display());

        if let Err(e) = self.write_document(file, &document.content, &path) {
            remove_partial(&path);
            return Err(e);
        }

        tracing::info!("Created document {}", path.display());
        Ok(GeneratedFile {
            filename,
            path,
            timestamp: document.timestamp,
        })
    }

    fn path_for(&self, filename: &str) -> PathBuf {
        match &self.output_dir {
            Some(dir) => dir.join(filename),
            None => PathBuf::from(filename),
        }
    }

    fn open(&self, filename: &str) -> GenerateResult<(String, File)> {
        match self.on_collision {
            CollisionPolicy::Overwrite => {
                let path = self.path_for(filename);
                if path.exists() {
                    tracing::debug!("Overwriting existing {}", path.display());
                }
                let file = OpenOptions::new()
                    .write(true)
                    .create(true)
                    .truncate(true)
                    .open(&path)
                    .map_err(|source| GenerateError::Open { path, source })?;
                Ok((filename.to_string(), file))
            }
            CollisionPolicy::Unique => {
                for n in 1..=self.max_collision_suffix {
                    let candidate = if n == 1 {
                        filename.to_string()
                    } else {
                        naming::with_collision_suffix(filename, n)
                    };
                    let path = self.path_for(&candidate);
                    match OpenOptions::new().write(true).create_new(true).open(&path) {
                        Ok(file) => return Ok((candidate, file)),
                        Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                            tracing::debug!("{} exists, trying next suffix", path.display());
                        }
                        Err(source) => return Err(GenerateError::Open { path, source }),
                    }
                }
                Err(GenerateError::NoUniqueName {
                    base: filename.to_string(),
                    attempts: self.max_collision_suffix,
                })
            }
        }
    }

    fn write_document(&self, file: File, content: &str, path: &Path) -> GenerateResult<()> {
        let file = write_content(file, content).map_err(|source| GenerateError::Write {
            path: path.to_path_buf(),
            source,
        })?;

        if self.sync_to_disk {
            file.sync_all().map_err(|source| GenerateError::Sync {
                path: path.to_path_buf(),
                source,
            })?;
        }

        Ok(())
    }
}

impl Default for FileGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Writes `content` through a buffer and hands back the flushed inner writer.
fn write_content<W: Write>(inner: W, content: &str) -> std::io::Result<W> {
    let mut writer = BufWriter::new(inner);
    writer.write_all(content.as_bytes())?;
    writer.into_inner().map_err(|e| e.into_error())
}

fn remove_partial(path: &Path) {
    if let Err(e) = std::fs::remove_file(path) {
        tracing::warn!("Failed to remove partial document {}: {}", path.display(), e);
    }
}

/// Generates a document in the current working directory using the system clock.
pub fn create_hello_world_document() -> GenerateResult<String> {
    FileGenerator::new().create_hello_world_document()
}

/// Result of checking a generated document against its own filename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verification {
    pub path: PathBuf,
    pub filename_timestamp: DocumentTimestamp,
    pub content_timestamp: DocumentTimestamp,
    /// Content is byte-for-byte what generation would have written
    pub canonical: bool,
}

impl Verification {
    pub fn timestamps_match(&self) -> bool {
        self.filename_timestamp == self.content_timestamp
    }

    pub fn is_valid(&self) -> bool {
        self.timestamps_match() && self.canonical
    }
}

/// Reads a generated document and checks that its filename and its
/// `Generated at:` line carry the same timestamp.
pub fn verify_document(path: &Path) -> GenerateResult<Verification> {
    let filename = path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| GenerateError::InvalidFilename(path.display().to_string()))?;
    let (filename_timestamp, _) = naming::parse_document_filename(filename)
        .ok_or_else(|| GenerateError::InvalidFilename(filename.to_string()))?;

    let content = std::fs::read_to_string(path).map_err(|source| GenerateError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let content_timestamp = parse_generated_at(&content)
        .ok_or_else(|| GenerateError::MissingTimestamp(path.to_path_buf()))?;

    let canonical = content == render_content(&filename_timestamp);
    tracing::debug!(
        "Verified {}: filename={}, content={}, canonical={}",
        path.display(),
        filename_timestamp,
        content_timestamp,
        canonical
    );

    Ok(Verification {
        path: path.to_path_buf(),
        filename_timestamp,
        content_timestamp,
        canonical,
    })
}
