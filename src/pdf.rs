//! External HTML → PDF rendering.
//!
//! The renderer is an opaque process. [`PlaywrightRenderer`] invokes
//!
//! ```text
//! <command> pdf --paper-format A4 --wait-for-timeout 200 file:///…/resume-<id>.html …/resume-<id>.pdf
//! ```
//!
//! under a hard timeout; the child is killed if the timeout fires. Any
//! failure becomes a [`PdfError`] for that variant alone.
//!
//! [`render_all`] runs the jobs with bounded concurrency and returns the
//! outcomes in job order regardless of completion order.

use crate::config::PdfConfig;
use crate::error::PdfError;
use crate::output::PdfOutcome;
use crate::progress::ProgressCallback;
use async_trait::async_trait;
use futures::stream::{self, StreamExt};
use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;
use tracing::{debug, info, warn};
use url::Url;

/// Produces a PDF file at `pdf` from the HTML file at `html`.
#[async_trait]
pub trait PdfRenderer: Send + Sync {
    async fn render(&self, html: &Path, pdf: &Path) -> Result<(), PdfError>;
}

/// Drives the `playwright pdf` command line (or anything with the same
/// arguments).
#[derive(Debug, Clone)]
pub struct PlaywrightRenderer {
    config: PdfConfig,
}

impl PlaywrightRenderer {
    pub fn new(config: PdfConfig) -> Self {
        Self { config }
    }

    fn command(&self, html: &Path, pdf: &Path) -> Result<Command, PdfError> {
        let url = self.file_url(html)?;
        let mut cmd = Command::new(&self.config.command);
        cmd.arg("pdf")
            .arg("--paper-format")
            .arg(&self.config.paper_format)
            .arg("--wait-for-timeout")
            .arg(self.config.wait_for_timeout_ms.to_string())
            .arg(url.as_str())
            .arg(pdf)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .kill_on_drop(true);
        Ok(cmd)
    }

    /// Percent-encoded `file://` URL for the HTML input.
    fn file_url(&self, html: &Path) -> Result<Url, PdfError> {
        let abs = std::path::absolute(html).map_err(|e| PdfError::SpawnFailed {
            command: self.config.command.clone(),
            detail: format!("cannot resolve {}: {e}", html.display()),
        })?;
        Url::from_file_path(&abs).map_err(|()| PdfError::SpawnFailed {
            command: self.config.command.clone(),
            detail: format!("cannot express {} as a file URL", abs.display()),
        })
    }
}

#[async_trait]
impl PdfRenderer for PlaywrightRenderer {
    async fn render(&self, html: &Path, pdf: &Path) -> Result<(), PdfError> {
        let spawn_failed = |detail: String| PdfError::SpawnFailed {
            command: self.config.command.clone(),
            detail,
        };

        if let Some(parent) = pdf.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| spawn_failed(format!("cannot create {}: {e}", parent.display())))?;
        }

        let child = self
            .command(html, pdf)?
            .spawn()
            .map_err(|e| spawn_failed(e.to_string()))?;

        let secs = self.config.timeout_secs;
        let output = tokio::time::timeout(Duration::from_secs(secs), child.wait_with_output())
            .await
            .map_err(|_| PdfError::Timeout { secs })?
            .map_err(|e| spawn_failed(e.to_string()))?;

        if !output.status.success() {
            return Err(PdfError::ExitFailure {
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        Ok(())
    }
}

/// One variant's PDF request.
#[derive(Debug, Clone)]
pub struct PdfJob {
    pub variant_id: String,
    /// Output-root-relative PDF path, reported in logs and the manifest.
    pub rel_path: String,
    /// Local HTML input; `None` when the sink has no filesystem location.
    pub html: Option<PathBuf>,
    /// Local PDF output.
    pub pdf: Option<PathBuf>,
}

/// Render every job, at most `concurrency` at a time.
pub async fn render_all(
    renderer: &dyn PdfRenderer,
    jobs: Vec<PdfJob>,
    concurrency: usize,
    progress: Option<&ProgressCallback>,
) -> Vec<PdfOutcome> {
    info!("Rendering {} PDFs ({} at a time)", jobs.len(), concurrency);

    let mut outcomes: Vec<(usize, PdfOutcome)> =
        stream::iter(jobs.into_iter().enumerate().map(|(index, job)| async move {
            if let Some(cb) = progress {
                cb.on_pdf_start(&job.variant_id);
            }
            let result = match (&job.html, &job.pdf) {
                (Some(html), Some(pdf)) => renderer.render(html, pdf).await,
                _ => Err(PdfError::NoLocalPath {
                    path: job.rel_path.clone(),
                }),
            };
            match &result {
                Ok(()) => {
                    debug!("PDF ready: {}", job.rel_path);
                    if let Some(cb) = progress {
                        cb.on_pdf_complete(&job.variant_id);
                    }
                }
                Err(e) => {
                    warn!("PDF failed for {}: {}", job.variant_id, e);
                    if let Some(cb) = progress {
                        cb.on_pdf_error(&job.variant_id, &e.to_string());
                    }
                }
            }
            (
                index,
                PdfOutcome {
                    variant_id: job.variant_id,
                    path: job.rel_path,
                    error: result.err(),
                },
            )
        }))
        .buffer_unordered(concurrency.max(1))
        .collect()
        .await;

    outcomes.sort_by_key(|(index, _)| *index);
    outcomes.into_iter().map(|(_, outcome)| outcome).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progress::BuildProgressCallback;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    /// Fails for ids containing "bad"; finishes later jobs sooner.
    struct ScriptedRenderer;

    #[async_trait]
    impl PdfRenderer for ScriptedRenderer {
        async fn render(&self, html: &Path, _pdf: &Path) -> Result<(), PdfError> {
            let name = html.to_string_lossy().to_string();
            let delay = if name.contains("01") { 30 } else { 1 };
            tokio::time::sleep(Duration::from_millis(delay)).await;
            if name.contains("bad") {
                Err(PdfError::ExitFailure {
                    status: "exit status: 1".into(),
                    stderr: "boom".into(),
                })
            } else {
                Ok(())
            }
        }
    }

    fn job(id: &str) -> PdfJob {
        PdfJob {
            variant_id: id.into(),
            rel_path: format!("pdf/resume-{id}.pdf"),
            html: Some(PathBuf::from(format!("/tmp/html/resume-{id}.html"))),
            pdf: Some(PathBuf::from(format!("/tmp/pdf/resume-{id}.pdf"))),
        }
    }

    #[derive(Default)]
    struct Counter {
        ok: AtomicUsize,
        err: AtomicUsize,
    }

    impl BuildProgressCallback for Counter {
        fn on_pdf_complete(&self, _id: &str) {
            self.ok.fetch_add(1, Ordering::SeqCst);
        }
        fn on_pdf_error(&self, _id: &str, _e: &str) {
            self.err.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[tokio::test]
    async fn failure_is_isolated_and_order_is_kept() {
        let counter = Arc::new(Counter::default());
        let cb: ProgressCallback = counter.clone();
        let jobs = vec![job("01-minimal"), job("02-bad"), job("03-tech")];
        let outcomes = render_all(&ScriptedRenderer, jobs, 3, Some(&cb)).await;

        let ids: Vec<_> = outcomes.iter().map(|o| o.variant_id.as_str()).collect();
        assert_eq!(ids, vec!["01-minimal", "02-bad", "03-tech"]);
        assert!(outcomes[0].succeeded());
        assert!(!outcomes[1].succeeded());
        assert!(outcomes[2].succeeded());
        assert_eq!(counter.ok.load(Ordering::SeqCst), 2);
        assert_eq!(counter.err.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn missing_local_path_fails_without_calling_renderer() {
        let mut j = job("04-portfolio");
        j.html = None;
        let outcomes = render_all(&ScriptedRenderer, vec![j], 1, None).await;
        assert_eq!(
            outcomes[0].error,
            Some(PdfError::NoLocalPath {
                path: "pdf/resume-04-portfolio.pdf".into()
            })
        );
    }

    #[tokio::test]
    async fn missing_command_is_a_spawn_failure() {
        let renderer = PlaywrightRenderer::new(PdfConfig {
            command: "definitely-not-a-real-pdf-renderer".into(),
            ..PdfConfig::default()
        });
        let dir = tempfile::tempdir().unwrap();
        let html = dir.path().join("in.html");
        std::fs::write(&html, "<p>x</p>").unwrap();
        let err = renderer
            .render(&html, &dir.path().join("out").join("x.pdf"))
            .await
            .unwrap_err();
        assert!(matches!(err, PdfError::SpawnFailed { .. }));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn slow_renderer_times_out() {
        let dir = tempfile::tempdir().unwrap();
        let script = dir.path().join("slow.sh");
        std::fs::write(&script, "#!/bin/sh\nsleep 5\n").unwrap();
        {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755)).unwrap();
        }
        let renderer = PlaywrightRenderer::new(PdfConfig {
            command: script.to_string_lossy().into_owned(),
            timeout_secs: 1,
            ..PdfConfig::default()
        });
        let err = renderer
            .render(&dir.path().join("in.html"), &dir.path().join("x.pdf"))
            .await
            .unwrap_err();
        assert_eq!(err, PdfError::Timeout { secs: 1 });
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn nonzero_exit_captures_stderr() {
        let dir = tempfile::tempdir().unwrap();
        let script = dir.path().join("fail.sh");
        std::fs::write(&script, "#!/bin/sh\necho 'no browser' >&2\nexit 3\n").unwrap();
        {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755)).unwrap();
        }
        let renderer = PlaywrightRenderer::new(PdfConfig {
            command: script.to_string_lossy().into_owned(),
            ..PdfConfig::default()
        });
        let err = renderer
            .render(&dir.path().join("in.html"), &dir.path().join("x.pdf"))
            .await
            .unwrap_err();
        match err {
            PdfError::ExitFailure { stderr, .. } => assert_eq!(stderr, "no browser"),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn html_url_is_percent_encoded() {
        let dir = tempfile::tempdir().unwrap();
        let script = dir.path().join("echo-url.sh");
        std::fs::write(&script, "#!/bin/sh\necho \"$6\" >&2\nexit 1\n").unwrap();
        {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755)).unwrap();
        }
        let odd = dir.path().join("cv #2 100%");
        std::fs::create_dir_all(&odd).unwrap();
        let html = odd.join("resume.html");
        std::fs::write(&html, "<p>x</p>").unwrap();

        let renderer = PlaywrightRenderer::new(PdfConfig {
            command: script.to_string_lossy().into_owned(),
            ..PdfConfig::default()
        });
        let err = renderer.render(&html, &odd.join("resume.pdf")).await.unwrap_err();
        let url = match err {
            PdfError::ExitFailure { stderr, .. } => stderr,
            other => panic!("unexpected {other:?}"),
        };
        assert!(url.starts_with("file:///"), "{url}");
        assert!(!url.contains('#'), "{url}");
        assert!(!url.contains(' '), "{url}");
        assert!(url.ends_with("/cv%20%232%20100%25/resume.html"), "{url}");
        assert_eq!(Url::parse(&url).unwrap().to_file_path().unwrap(), html);
    }
}
