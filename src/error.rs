//! Error types for the resume-variants library.
//!
//! Two distinct error types reflect two distinct failure modes:
//!
//! * [`ResumeError`] — **Fatal**: the build cannot proceed at all (missing
//!   source file, a mandatory résumé section parsed to nothing, an artifact
//!   could not be written). Returned as `Err(ResumeError)` from the
//!   top-level `build*` functions.
//!
//! * [`PdfError`] — **Non-fatal**: the external PDF renderer failed or timed
//!   out for one variant. Stored inside [`crate::output::PdfOutcome`] so the
//!   sibling variants and the batch as a whole still succeed.
//!
//! Content-quality problems (length out of range, missing keyword) are not
//! errors at all; they are recorded as data in
//! [`crate::validate::ValidationReport`].

use std::path::PathBuf;
use thiserror::Error;

/// All fatal errors returned by the resume-variants library.
#[derive(Debug, Error)]
pub enum ResumeError {
    // ── Input errors ──────────────────────────────────────────────────────
    /// Source document was not found at the given path.
    #[error("Résumé source not found: '{path}'\nCheck the path exists and is readable.")]
    SourceNotFound { path: PathBuf },

    /// Source document exists but could not be read as UTF-8 text.
    #[error("Failed to read résumé source '{path}': {source}")]
    SourceReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // ── Structure errors ──────────────────────────────────────────────────
    /// One or more mandatory sections parsed to zero entries.
    ///
    /// `sections` holds the check keys (`skill`, `experience`, `projects`,
    /// `education`) in check order.
    #[error("Mandatory section parse failed: {}", sections.join(", "))]
    MissingSections { sections: Vec<String> },

    // ── I/O errors ────────────────────────────────────────────────────────
    /// Could not create or write an output artifact.
    #[error("Failed to write artifact '{path}': {source}")]
    ArtifactWriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON serialisation of the model or a report failed.
    #[error("Failed to serialise {what}: {source}")]
    Serialization {
        what: &'static str,
        #[source]
        source: serde_json::Error,
    },

    // ── Config errors ─────────────────────────────────────────────────────
    /// Builder validation failed, or a variant file could not be loaded.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    // ── Catch-all ─────────────────────────────────────────────────────────
    /// Unexpected internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// A non-fatal error for a single variant's PDF.
///
/// The build continues for every other variant and still exits successfully.
#[derive(Debug, Clone, PartialEq, Eq, Error, serde::Serialize, serde::Deserialize)]
pub enum PdfError {
    /// The renderer process could not be started (command missing, etc.).
    #[error("failed to start '{command}': {detail}")]
    SpawnFailed { command: String, detail: String },

    /// The renderer exited with a non-zero status.
    #[error("renderer exited with {status}: {stderr}")]
    ExitFailure { status: String, stderr: String },

    /// The renderer did not finish within the configured timeout.
    #[error("renderer timed out after {secs}s")]
    Timeout { secs: u64 },

    /// The artifact sink has no on-disk location for the HTML input.
    #[error("no local file for '{path}'")]
    NoLocalPath { path: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_sections_names_every_key() {
        let e = ResumeError::MissingSections {
            sections: vec!["skill".into(), "education".into()],
        };
        let msg = e.to_string();
        assert!(msg.contains("skill"), "got: {msg}");
        assert!(msg.contains("education"), "got: {msg}");
        assert_eq!(msg, "Mandatory section parse failed: skill, education");
    }

    #[test]
    fn pdf_timeout_display() {
        let e = PdfError::Timeout { secs: 60 };
        assert!(e.to_string().contains("60s"));
    }

    #[test]
    fn pdf_exit_failure_display() {
        let e = PdfError::ExitFailure {
            status: "exit status: 1".into(),
            stderr: "browser not installed".into(),
        };
        let msg = e.to_string();
        assert!(msg.contains("exit status: 1"));
        assert!(msg.contains("browser not installed"));
    }

    #[test]
    fn source_not_found_display() {
        let e = ResumeError::SourceNotFound {
            path: PathBuf::from("docs/resume/index.md"),
        };
        assert!(e.to_string().contains("docs/resume/index.md"));
    }
}
