//! Where build artifacts go.
//!
//! The orchestrator never touches the filesystem directly; it hands every
//! artifact to an [`ArtifactSink`] under a `/`-separated path relative to the
//! output root (`markdown/resume-01-minimal.md`). [`FsSink`] writes to disk,
//! [`MemorySink`] keeps everything in a map for tests and dry runs.

use crate::error::ResumeError;
use std::collections::BTreeMap;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

pub trait ArtifactSink: Send + Sync {
    /// Store `content` at `rel_path`, replacing any previous artifact.
    fn write(&self, rel_path: &str, content: &[u8]) -> Result<(), ResumeError>;

    /// Filesystem location of `rel_path`, when the sink has one. The PDF
    /// renderer needs this to open the HTML file.
    fn local_path(&self, rel_path: &str) -> Option<PathBuf> {
        let _ = rel_path;
        None
    }
}

// ── Filesystem ───────────────────────────────────────────────────────────

/// Writes under a root directory, creating parents as needed.
///
/// Each write goes to a temp file in the target directory which is then
/// renamed over the destination, so readers never see a partial artifact.
#[derive(Debug, Clone)]
pub struct FsSink {
    root: PathBuf,
}

impl FsSink {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn resolve(&self, rel_path: &str) -> PathBuf {
        rel_path
            .split('/')
            .filter(|segment| !segment.is_empty())
            .fold(self.root.clone(), |path, segment| path.join(segment))
    }
}

impl ArtifactSink for FsSink {
    fn write(&self, rel_path: &str, content: &[u8]) -> Result<(), ResumeError> {
        let path = self.resolve(rel_path);
        let write_failed = |source| ResumeError::ArtifactWriteFailed {
            path: path.clone(),
            source,
        };

        let parent = path.parent().unwrap_or(&self.root);
        std::fs::create_dir_all(parent).map_err(write_failed)?;

        let mut tmp = tempfile::NamedTempFile::new_in(parent).map_err(write_failed)?;
        tmp.write_all(content).map_err(write_failed)?;
        tmp.persist(&path).map_err(|e| write_failed(e.error))?;
        Ok(())
    }

    fn local_path(&self, rel_path: &str) -> Option<PathBuf> {
        Some(self.resolve(rel_path))
    }
}

// ── In-memory ────────────────────────────────────────────────────────────

/// Collects artifacts in memory, keyed by relative path.
#[derive(Debug, Default)]
pub struct MemorySink {
    files: Mutex<BTreeMap<String, Vec<u8>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Content of `rel_path` as UTF-8 text.
    pub fn get(&self, rel_path: &str) -> Option<String> {
        let files = self.files.lock().ok()?;
        files
            .get(rel_path)
            .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
    }

    /// Every stored path, sorted.
    pub fn paths(&self) -> Vec<String> {
        match self.files.lock() {
            Ok(files) => files.keys().cloned().collect(),
            Err(_) => Vec::new(),
        }
    }
}

impl ArtifactSink for MemorySink {
    fn write(&self, rel_path: &str, content: &[u8]) -> Result<(), ResumeError> {
        let mut files = self
            .files
            .lock()
            .map_err(|_| ResumeError::Internal("memory sink lock poisoned".into()))?;
        files.insert(rel_path.to_string(), content.to_vec());
        Ok(())
    }
}
