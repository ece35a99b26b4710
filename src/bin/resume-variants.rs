//! CLI binary for resume-variants.
//!
//! A thin shim over the library crate that maps CLI flags
//! to `BuildConfig` and prints a summary.

use anyhow::{Context, Result};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use resume_variants::{
    build, load_variants, BuildConfig, BuildOutput, BuildProgressCallback, ProgressCallback,
};
use std::io;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

// ── ANSI colour helpers (no extra deps) ──────────────────────────────────────

fn green(s: &str) -> String {
    format!("\x1b[32m{s}\x1b[0m")
}
fn red(s: &str) -> String {
    format!("\x1b[31m{s}\x1b[0m")
}
fn dim(s: &str) -> String {
    format!("\x1b[2m{s}\x1b[0m")
}
fn bold(s: &str) -> String {
    format!("\x1b[1m{s}\x1b[0m")
}
fn cyan(s: &str) -> String {
    format!("\x1b[36m{s}\x1b[0m")
}

const TICKS: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏", "⠿"];

// ── CLI progress callback using indicatif ────────────────────────────────────

/// Terminal progress callback: one bar over variants (and PDFs when
/// requested), with a log line per event printed above it.
struct CliProgressCallback {
    bar: ProgressBar,
    with_pdf: bool,
    pdf_errors: AtomicUsize,
}

impl CliProgressCallback {
    fn new(with_pdf: bool) -> Arc<Self> {
        let bar = ProgressBar::new(0);
        let spinner_style = ProgressStyle::with_template("{spinner:.cyan} {prefix:.bold}  {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_strings(TICKS);
        bar.set_style(spinner_style);
        bar.set_prefix("Parsing");
        bar.set_message("Reading résumé…");
        bar.enable_steady_tick(Duration::from_millis(80));

        Arc::new(Self {
            bar,
            with_pdf,
            pdf_errors: AtomicUsize::new(0),
        })
    }

    /// Remove the bar from the terminal if the build never completed.
    fn clear(&self) {
        if !self.bar.is_finished() {
            self.bar.finish_and_clear();
        }
    }

    fn activate_bar(&self, steps: usize) {
        let progress_style = ProgressStyle::with_template(
            "{spinner:.cyan} {prefix:.bold}  \
             [{bar:42.green/238}] {pos:>2}/{len} steps  \
             ⏱ {elapsed_precise}",
        )
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏  ")
        .tick_strings(TICKS);

        self.bar.set_length(steps as u64);
        self.bar.set_style(progress_style);
        self.bar.set_prefix("Building");
    }
}

impl Drop for CliProgressCallback {
    fn drop(&mut self) {
        self.clear();
    }
}

impl BuildProgressCallback for CliProgressCallback {
    fn on_build_start(&self, total_variants: usize) {
        let steps = if self.with_pdf {
            total_variants * 2
        } else {
            total_variants
        };
        self.activate_bar(steps);
        self.bar.println(format!(
            "{} {}",
            cyan("◆"),
            bold(&format!("Rendering {total_variants} variants…"))
        ));
    }

    fn on_variant_rendered(&self, variant_id: &str, compact_length: usize, passed: bool) {
        self.bar.println(format!(
            "  {} {:<18}  {}",
            if passed { green("✓") } else { red("✗") },
            variant_id,
            dim(&format!("{compact_length:>6} chars")),
        ));
        self.bar.inc(1);
    }

    fn on_pdf_start(&self, variant_id: &str) {
        self.bar.set_message(format!("pdf {variant_id}"));
    }

    fn on_pdf_complete(&self, variant_id: &str) {
        self.bar
            .println(format!("  {} {:<18}  {}", green("✓"), variant_id, dim("pdf")));
        self.bar.inc(1);
    }

    fn on_pdf_error(&self, variant_id: &str, error: &str) {
        self.pdf_errors.fetch_add(1, Ordering::SeqCst);
        // Keep long renderer stderr on one line.
        let msg: String = match error.char_indices().nth(79) {
            Some((cut, _)) => format!("{}\u{2026}", &error[..cut]),
            None => error.to_string(),
        };
        self.bar
            .println(format!("  {} {:<18}  {}", red("✗"), variant_id, red(&msg)));
        self.bar.inc(1);
    }

    fn on_build_complete(&self, total_variants: usize, passed_variants: usize) {
        self.bar.finish_and_clear();
        let failed = total_variants.saturating_sub(passed_variants);
        if failed == 0 {
            eprintln!(
                "{} {} variants passed validation",
                green("✔"),
                bold(&passed_variants.to_string())
            );
        } else {
            eprintln!(
                "{} {}/{} variants passed validation  ({} advisory failures)",
                cyan("⚠"),
                bold(&passed_variants.to_string()),
                total_variants,
                red(&failed.to_string()),
            );
        }
        let pdf_errors = self.pdf_errors.load(Ordering::SeqCst);
        if pdf_errors > 0 {
            eprintln!("{} {} PDFs failed (see logs/pdf-build.log)", red("✘"), pdf_errors);
        }
    }
}

const AFTER_HELP: &str = r#"EXAMPLES:
  # Markdown + HTML for the five built-in variants
  resume-variants

  # Also print PDFs through playwright
  resume-variants --pdf

  # Different source and output root
  resume-variants --source cv/index.md --out-dir build/cv

  # Custom variant set
  resume-variants --variants variants.json

OUTPUT LAYOUT (under --out-dir):
  data/normalized-resume.json     parsed model
  markdown/resume-<id>.md         one per variant
  html/resume-<id>.html           one per variant, self-contained
  pdf/resume-<id>.pdf             with --pdf, when the renderer succeeds
  logs/section-extraction.log     section counts, mandatory-section check
  logs/template-validation.log    length range and keyword verdicts
  logs/pdf-build.log              one line per attempted PDF
  reports/metrics-ratio.{md,json} quantified-bullet ratio per variant
  templates/template-spec.json    variant definitions
  README.md                       manifest of every file written

EXIT STATUS:
  0  all variants written (validation and PDF failures are advisory)
  1  source unreadable, a mandatory section is empty, or a write failed
"#;

/// Build résumé variants (Markdown, HTML, PDF) from one Markdown source.
#[derive(Parser, Debug)]
#[command(
    name = "resume-variants",
    version,
    about = "Build résumé variants (Markdown, HTML, PDF) from one Markdown source",
    color = clap::ColorChoice::Auto,
    after_long_help = AFTER_HELP
)]
struct Cli {
    /// Also render a PDF per variant through the external renderer.
    #[arg(long, env = "RESUME_VARIANTS_PDF")]
    pdf: bool,

    /// Authoritative résumé source.
    #[arg(long, env = "RESUME_VARIANTS_SOURCE", default_value = "docs/resume/index.md")]
    source: PathBuf,

    /// Root directory for every artifact.
    #[arg(long, env = "RESUME_VARIANTS_OUT_DIR", default_value = "docs/resume/variants")]
    out_dir: PathBuf,

    /// JSON file with a custom variant set (defaults to the five built-ins).
    #[arg(long, env = "RESUME_VARIANTS_VARIANTS")]
    variants: Option<PathBuf>,

    /// PDF renderer executable (invoked as `<cmd> pdf --paper-format A4 …`).
    #[arg(long, env = "RESUME_VARIANTS_PDF_COMMAND", default_value = "playwright")]
    pdf_command: String,

    /// Per-variant PDF timeout in seconds.
    #[arg(long, env = "RESUME_VARIANTS_PDF_TIMEOUT", default_value_t = 60)]
    pdf_timeout: u64,

    /// PDF renderer processes allowed at once.
    #[arg(long, env = "RESUME_VARIANTS_PDF_CONCURRENCY", default_value_t = 3)]
    pdf_concurrency: usize,

    /// Print a JSON summary on stdout.
    #[arg(long, env = "RESUME_VARIANTS_JSON")]
    json: bool,

    /// Disable progress bar.
    #[arg(long, env = "RESUME_VARIANTS_NO_PROGRESS")]
    no_progress: bool,

    /// Enable DEBUG-level tracing logs.
    #[arg(short, long, env = "RESUME_VARIANTS_VERBOSE")]
    verbose: bool,

    /// Suppress all output except errors.
    #[arg(short, long, env = "RESUME_VARIANTS_QUIET")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // ── Logging setup ────────────────────────────────────────────────────
    // Suppress INFO-level library logs while the progress bar is active.
    let show_progress = !cli.quiet && !cli.no_progress && !cli.json;
    let filter = if cli.verbose {
        "debug"
    } else if cli.quiet || show_progress {
        "error"
    } else {
        "info"
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(io::stderr)
        .init();

    // ── Build config ─────────────────────────────────────────────────────
    let cli_progress = show_progress.then(|| CliProgressCallback::new(cli.pdf));
    let progress_cb: Option<ProgressCallback> = cli_progress
        .clone()
        .map(|cb| cb as Arc<dyn BuildProgressCallback>);
    // The spinner must be gone before anyhow prints the error.
    let clear_progress = || {
        if let Some(cb) = &cli_progress {
            cb.clear();
        }
    };

    let config = build_config(&cli, progress_cb).inspect_err(|_| clear_progress())?;

    // ── Run build ────────────────────────────────────────────────────────
    let output = build(&config)
        .await
        .inspect_err(|_| clear_progress())
        .context("Build failed")?;

    if cli.json {
        let summary = Summary::from(&output);
        let json = serde_json::to_string_pretty(&summary).context("Failed to serialise summary")?;
        println!("{json}");
    } else if !cli.quiet && !show_progress {
        let stats = &output.stats;
        eprintln!(
            "Generated {} résumé variants{} in {}ms ({} passed validation)",
            stats.total_variants,
            if cli.pdf { " with PDF outputs" } else { "" },
            stats.total_duration_ms,
            stats.passed_variants
        );
        if stats.pdf_failed > 0 {
            eprintln!("  {} PDFs failed", stats.pdf_failed);
        }
    } else if !cli.quiet {
        eprintln!(
            "   {} files  →  {}",
            dim(&output.artifacts.len().to_string()),
            bold(&config.output_dir.display().to_string()),
        );
    }

    Ok(())
}

/// Map CLI args to `BuildConfig`.
fn build_config(cli: &Cli, progress: Option<ProgressCallback>) -> Result<BuildConfig> {
    let mut builder = BuildConfig::builder()
        .source(&cli.source)
        .output_dir(&cli.out_dir)
        .with_pdf(cli.pdf)
        .pdf_command(&cli.pdf_command)
        .pdf_timeout_secs(cli.pdf_timeout)
        .pdf_concurrency(cli.pdf_concurrency);

    if let Some(ref path) = cli.variants {
        let variants = load_variants(path)
            .with_context(|| format!("Failed to load variants from {:?}", path))?;
        builder = builder.variants(variants);
    }

    if let Some(cb) = progress {
        builder = builder.progress_callback(cb);
    }

    builder.build().context("Invalid configuration")
}

/// Compact `--json` output: verdicts and paths, not document bodies.
#[derive(serde::Serialize)]
#[serde(rename_all = "camelCase")]
struct Summary<'a> {
    generated_at: &'a str,
    variants: Vec<VariantSummary<'a>>,
    pdf: &'a [resume_variants::PdfOutcome],
    artifacts: &'a [String],
    stats: &'a resume_variants::BuildStats,
}

#[derive(serde::Serialize)]
#[serde(rename_all = "camelCase")]
struct VariantSummary<'a> {
    id: &'a str,
    name: &'a str,
    validation: &'a resume_variants::ValidationReport,
    metric_ratio: f64,
    metric_passed: bool,
}

impl<'a> From<&'a BuildOutput> for Summary<'a> {
    fn from(output: &'a BuildOutput) -> Self {
        Self {
            generated_at: &output.model.metadata.generated_at,
            variants: output
                .variants
                .iter()
                .map(|v| VariantSummary {
                    id: &v.id,
                    name: &v.name,
                    validation: &v.validation,
                    metric_ratio: v.metric.ratio,
                    metric_passed: v.metric.passed,
                })
                .collect(),
            pdf: &output.pdf,
            artifacts: &output.artifacts,
            stats: &output.stats,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clear_finishes_an_unfinished_spinner() {
        let cb = CliProgressCallback::new(false);
        assert!(!cb.bar.is_finished());
        cb.clear();
        assert!(cb.bar.is_finished());
        cb.clear();
    }

    #[test]
    fn failed_build_leaves_no_spinner() {
        let cb = CliProgressCallback::new(false);
        let cli = Cli::parse_from(["resume-variants", "--source", "/definitely/not/here/index.md"]);
        let config = build_config(&cli, Some(cb.clone() as ProgressCallback)).unwrap();
        let err = resume_variants::build_sync(&config);
        assert!(err.is_err());
        assert!(!cb.bar.is_finished(), "no completion event on failure");
        cb.clear();
        assert!(cb.bar.is_finished());
    }
}
