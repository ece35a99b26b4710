//! # resume-variants
//!
//! Turn one authoritative résumé written in a constrained markdown dialect
//! into several stylistically distinct derivative documents (markdown,
//! self-contained HTML and, optionally, PDF), with machine-checkable
//! evidence that each one meets its content thresholds.
//!
//! ## Pipeline Overview
//!
//! ```text
//! index.md
//!  │
//!  ├─ 1. Parse     line classifier → section splitter → per-section extractors
//!  ├─ 2. Model     immutable NormalizedModel (+ flattened project view)
//!  ├─ 3. Render    five pure renderers: minimal / impact / tech / portfolio / traditional
//!  ├─ 4. HTML      restricted markdown compiler + themed A4 stylesheet
//!  ├─ 5. Validate  compact length range, keywords, metric-bullet ratio
//!  ├─ 6. PDF       optional external renderer, concurrent, per-variant timeout
//!  └─ 7. Report    extraction / validation / PDF logs, metric report, manifest
//! ```
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use resume_variants::{build, BuildConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = BuildConfig::builder()
//!         .source("docs/resume/index.md")
//!         .output_dir("docs/resume/variants")
//!         .build()?;
//!     let output = build(&config).await?;
//!     for variant in &output.variants {
//!         eprintln!("{}: {} chars, passed={}",
//!             variant.id,
//!             variant.validation.compact_length,
//!             variant.validation.passed);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Testing without a filesystem
//!
//! [`build_from_source`] takes the markdown text, an [`ArtifactSink`] and a
//! [`PdfRenderer`], so a whole run can be driven with [`MemorySink`] and a
//! scripted renderer.
//!
//! ## Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `cli`   | on      | Enables the `resume-variants` binary (clap + anyhow + tracing-subscriber + indicatif) |
//!
//! Disable `cli` when using only the library:
//! ```toml
//! resume-variants = { version = "0.3", default-features = false }
//! ```

// ── Modules ──────────────────────────────────────────────────────────────

pub mod build;
pub mod config;
pub mod error;
pub mod html;
pub mod model;
pub mod outcomes;
pub mod output;
pub mod parse;
pub mod pdf;
pub mod progress;
pub mod render;
pub mod report;
pub mod sink;
pub mod text;
pub mod validate;

// ── Re-exports ───────────────────────────────────────────────────────────

pub use build::{build, build_from_source, build_sync, timestamp};
pub use config::{
    default_variants, load_variants, BuildConfig, BuildConfigBuilder, PdfConfig, Theme,
    VariantConfig, VariantStyle,
};
pub use error::{PdfError, ResumeError};
pub use model::NormalizedModel;
pub use output::{BuildOutput, BuildStats, PdfOutcome, VariantOutput};
pub use parse::build_model;
pub use pdf::{PdfRenderer, PlaywrightRenderer};
pub use progress::{BuildProgressCallback, NoopProgressCallback, ProgressCallback};
pub use render::render_variant;
pub use sink::{ArtifactSink, FsSink, MemorySink};
pub use validate::{ValidationReport, METRIC_RATIO_THRESHOLD};
