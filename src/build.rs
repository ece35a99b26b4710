//! Build entry points.
//!
//! ```text
//! source.md
//!  │
//!  ├─ 1. Parse     sections → extractors → NormalizedModel
//!  ├─ 2. Diagnose  model JSON, extraction log, template spec
//!  │               (abort here if a mandatory section is empty)
//!  ├─ 3. Render    per variant: markdown → HTML, validation, metric ratio
//!  ├─ 4. Print     optional PDFs through the external renderer (concurrent)
//!  └─ 5. Report    validation / PDF logs, metric reports, manifest
//! ```
//!
//! [`build`] wires the real filesystem and the Playwright renderer to
//! [`build_from_source`], which does the work against any
//! [`ArtifactSink`] and [`PdfRenderer`].

use crate::config::BuildConfig;
use crate::error::ResumeError;
use crate::html::render_html_document;
use crate::output::{BuildOutput, BuildStats, VariantOutput};
use crate::parse::build_model;
use crate::pdf::{render_all, PdfJob, PdfRenderer, PlaywrightRenderer};
use crate::render::render_variant;
use crate::report;
use crate::sink::{ArtifactSink, FsSink};
use crate::validate::{check_mandatory_sections, metric_ratio, missing_sections, validate_variant};
use chrono::{SecondsFormat, Utc};
use std::time::Instant;
use tracing::{debug, error, info};

/// Read `config.source`, build every variant into `config.output_dir`.
///
/// # Errors
/// Returns `Err(ResumeError)` only for fatal conditions:
/// - source missing or unreadable
/// - a mandatory section (skill, experience, projects, education) is empty;
///   the model JSON, extraction log and template spec are still written
/// - an artifact could not be written
///
/// Validation verdicts and PDF failures never make this fail.
pub async fn build(config: &BuildConfig) -> Result<BuildOutput, ResumeError> {
    let path = &config.source;
    info!("Reading résumé source: {}", path.display());
    let text = tokio::fs::read_to_string(path).await.map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ResumeError::SourceNotFound { path: path.clone() }
        } else {
            ResumeError::SourceReadFailed {
                path: path.clone(),
                source: e,
            }
        }
    })?;

    let generated_at = timestamp();
    let sink = FsSink::new(&config.output_dir);
    let renderer = PlaywrightRenderer::new(config.pdf.clone());
    build_from_source(
        &text,
        &path.to_string_lossy(),
        config,
        &sink,
        &renderer,
        &generated_at,
    )
    .await
}

/// Synchronous wrapper around [`build`].
///
/// Creates a temporary tokio runtime internally.
pub fn build_sync(config: &BuildConfig) -> Result<BuildOutput, ResumeError> {
    tokio::runtime::Runtime::new()
        .map_err(|e| ResumeError::Internal(format!("Failed to create tokio runtime: {}", e)))?
        .block_on(build(config))
}

/// Current UTC time as RFC 3339 with milliseconds (`2026-01-01T09:30:00.123Z`).
pub fn timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Run the whole pipeline on in-memory `markdown`.
///
/// `source_label` is recorded in the model metadata and the manifest;
/// `generated_at` stamps every log, report and HTML document, so two runs
/// with the same inputs produce identical artifacts.
pub async fn build_from_source(
    markdown: &str,
    source_label: &str,
    config: &BuildConfig,
    sink: &dyn ArtifactSink,
    renderer: &dyn PdfRenderer,
    generated_at: &str,
) -> Result<BuildOutput, ResumeError> {
    let start = Instant::now();
    let progress = config.progress_callback.as_ref();
    let mut out = Artifacts::new(sink);

    // ── Step 1: Parse ────────────────────────────────────────────────────
    let model = build_model(markdown, source_label, generated_at);
    let checks = check_mandatory_sections(&model);

    // ── Step 2: Diagnostics ──────────────────────────────────────────────
    out.put(
        "data/normalized-resume.json",
        report::to_json(&model, "normalized model")?,
    )?;
    out.put(
        "logs/section-extraction.log",
        report::extraction_log(&model, &checks, generated_at),
    )?;
    out.put(
        "templates/template-spec.json",
        report::template_spec(&config.variants)?,
    )?;

    let missing = missing_sections(&checks);
    if !missing.is_empty() {
        error!("Mandatory sections are empty: {}", missing.join(", "));
        return Err(ResumeError::MissingSections { sections: missing });
    }

    // ── Step 3: Render variants ──────────────────────────────────────────
    let total = config.variants.len();
    if let Some(cb) = progress {
        cb.on_build_start(total);
    }

    let mut variants = Vec::with_capacity(total);
    for variant in &config.variants {
        let markdown = render_variant(&model, variant);
        let html = render_html_document(variant, &markdown, generated_at);
        let validation = validate_variant(&markdown, variant);
        let metric = metric_ratio(&markdown);

        out.put(&markdown_path(&variant.id), &markdown)?;
        out.put(&html_path(&variant.id), &html)?;

        info!(
            "{}: compactLength={} range={}~{} validation={} metricRatio={:.2}",
            variant.id,
            validation.compact_length,
            variant.length_range.0,
            variant.length_range.1,
            if validation.passed { "PASS" } else { "FAIL" },
            metric.ratio
        );
        if let Some(cb) = progress {
            cb.on_variant_rendered(&variant.id, validation.compact_length, validation.passed);
        }

        variants.push(VariantOutput {
            id: variant.id.clone(),
            name: variant.name.clone(),
            markdown,
            html,
            validation,
            metric,
        });
    }

    // ── Step 4: PDFs ─────────────────────────────────────────────────────
    let pdf = if config.with_pdf {
        let jobs = config
            .variants
            .iter()
            .map(|variant| {
                let rel_path = pdf_path(&variant.id);
                PdfJob {
                    variant_id: variant.id.clone(),
                    html: sink.local_path(&html_path(&variant.id)),
                    pdf: sink.local_path(&rel_path),
                    rel_path,
                }
            })
            .collect();
        render_all(renderer, jobs, config.pdf.concurrency, progress).await
    } else {
        debug!("PDF output not requested");
        Vec::new()
    };
    for outcome in pdf.iter().filter(|o| o.succeeded()) {
        out.record(&outcome.path);
    }

    // ── Step 5: Reports ──────────────────────────────────────────────────
    out.put(
        "logs/template-validation.log",
        report::validation_log(&config.variants, &variants, generated_at),
    )?;
    out.put("logs/pdf-build.log", report::pdf_log(&pdf, generated_at))?;
    out.put(
        "reports/metrics-ratio.md",
        report::metrics_markdown(&variants, generated_at),
    )?;
    out.put(
        "reports/metrics-ratio.json",
        report::metrics_json(&variants, generated_at)?,
    )?;

    let manifest = report::manifest(source_label, generated_at, config.with_pdf, &out.written);
    out.put("README.md", manifest)?;

    let stats = BuildStats {
        total_variants: total,
        passed_variants: variants.iter().filter(|v| v.validation.passed).count(),
        metric_passed_variants: variants.iter().filter(|v| v.metric.passed).count(),
        pdf_succeeded: pdf.iter().filter(|o| o.succeeded()).count(),
        pdf_failed: pdf.iter().filter(|o| !o.succeeded()).count(),
        total_duration_ms: start.elapsed().as_millis() as u64,
    };

    info!(
        "Generated {} résumé variants ({} passed validation){}",
        total,
        stats.passed_variants,
        if config.with_pdf {
            format!(", {}/{} PDFs", stats.pdf_succeeded, pdf.len())
        } else {
            String::new()
        }
    );
    if let Some(cb) = progress {
        cb.on_build_complete(total, stats.passed_variants);
    }

    Ok(BuildOutput {
        model,
        variants,
        pdf,
        artifacts: out.written,
        stats,
    })
}

// ── Internal helpers ─────────────────────────────────────────────────────

pub(crate) fn markdown_path(id: &str) -> String {
    format!("markdown/resume-{id}.md")
}

pub(crate) fn html_path(id: &str) -> String {
    format!("html/resume-{id}.html")
}

pub(crate) fn pdf_path(id: &str) -> String {
    format!("pdf/resume-{id}.pdf")
}

/// Sink writer that remembers what it wrote, in order.
struct Artifacts<'a> {
    sink: &'a dyn ArtifactSink,
    written: Vec<String>,
}

impl<'a> Artifacts<'a> {
    fn new(sink: &'a dyn ArtifactSink) -> Self {
        Self {
            sink,
            written: Vec::new(),
        }
    }

    fn put(&mut self, rel_path: &str, content: impl AsRef<[u8]>) -> Result<(), ResumeError> {
        self.sink.write(rel_path, content.as_ref())?;
        debug!("Wrote {}", rel_path);
        self.record(rel_path);
        Ok(())
    }

    /// Note an artifact produced outside the sink.
    fn record(&mut self, rel_path: &str) {
        self.written.push(rel_path.to_string());
    }
}
