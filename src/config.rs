//! Configuration types for a résumé variant build.
//!
//! All build behaviour is controlled through [`BuildConfig`], built via its
//! [`BuildConfigBuilder`]. Each derivative document is described by one
//! [`VariantConfig`]: a literal record of style, keywords and acceptable
//! compact-length range. The five built-in variants come from
//! [`default_variants`]; alternative sets can be loaded from JSON with
//! [`load_variants`].

use crate::error::ResumeError;
use crate::progress::ProgressCallback;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::path::{Path, PathBuf};

/// Configuration for one build run.
///
/// # Example
/// ```rust
/// use resume_variants::BuildConfig;
///
/// let config = BuildConfig::builder()
///     .source("docs/resume/index.md")
///     .output_dir("docs/resume/variants")
///     .with_pdf(true)
///     .pdf_timeout_secs(30)
///     .build()
///     .unwrap();
/// assert_eq!(config.variants.len(), 5);
/// ```
#[derive(Clone)]
pub struct BuildConfig {
    /// Authoritative résumé source. Default: `docs/resume/index.md`.
    pub source: PathBuf,

    /// Root directory every artifact is written under. Default:
    /// `docs/resume/variants`.
    pub output_dir: PathBuf,

    /// Render a PDF per variant through the external renderer. Default: false.
    pub with_pdf: bool,

    /// External renderer settings; only read when `with_pdf` is set.
    pub pdf: PdfConfig,

    /// Variants to render, in output order.
    pub variants: Vec<VariantConfig>,

    /// Optional build event sink (progress bars, logging bridges).
    pub progress_callback: Option<ProgressCallback>,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            source: PathBuf::from("docs/resume/index.md"),
            output_dir: PathBuf::from("docs/resume/variants"),
            with_pdf: false,
            pdf: PdfConfig::default(),
            variants: default_variants(),
            progress_callback: None,
        }
    }
}

impl fmt::Debug for BuildConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BuildConfig")
            .field("source", &self.source)
            .field("output_dir", &self.output_dir)
            .field("with_pdf", &self.with_pdf)
            .field("pdf", &self.pdf)
            .field(
                "variants",
                &self.variants.iter().map(|v| v.id.as_str()).collect::<Vec<_>>(),
            )
            .field(
                "progress_callback",
                &self.progress_callback.as_ref().map(|_| "<dyn BuildProgressCallback>"),
            )
            .finish()
    }
}

impl BuildConfig {
    /// Create a new builder for `BuildConfig`.
    pub fn builder() -> BuildConfigBuilder {
        BuildConfigBuilder {
            config: Self::default(),
        }
    }
}

/// Builder for [`BuildConfig`].
#[derive(Debug)]
pub struct BuildConfigBuilder {
    config: BuildConfig,
}

impl BuildConfigBuilder {
    pub fn source(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.source = path.into();
        self
    }

    pub fn output_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.output_dir = path.into();
        self
    }

    pub fn with_pdf(mut self, v: bool) -> Self {
        self.config.with_pdf = v;
        self
    }

    pub fn pdf_command(mut self, command: impl Into<String>) -> Self {
        self.config.pdf.command = command.into();
        self
    }

    pub fn pdf_timeout_secs(mut self, secs: u64) -> Self {
        self.config.pdf.timeout_secs = secs;
        self
    }

    pub fn pdf_concurrency(mut self, n: usize) -> Self {
        self.config.pdf.concurrency = n;
        self
    }

    pub fn variants(mut self, variants: Vec<VariantConfig>) -> Self {
        self.config.variants = variants;
        self
    }

    pub fn progress_callback(mut self, cb: ProgressCallback) -> Self {
        self.config.progress_callback = Some(cb);
        self
    }

    /// Build the configuration, validating constraints.
    pub fn build(self) -> Result<BuildConfig, ResumeError> {
        let c = &self.config;
        validate_variants(&c.variants)?;
        if c.pdf.concurrency == 0 {
            return Err(ResumeError::InvalidConfig(
                "PDF concurrency must be ≥ 1".into(),
            ));
        }
        if c.pdf.timeout_secs == 0 {
            return Err(ResumeError::InvalidConfig(
                "PDF timeout must be ≥ 1 second".into(),
            ));
        }
        if c.pdf.command.trim().is_empty() {
            return Err(ResumeError::InvalidConfig("PDF command is empty".into()));
        }
        Ok(self.config)
    }
}

/// Settings for the external HTML→PDF renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PdfConfig {
    /// Executable invoked as `<command> pdf --paper-format … <url> <out>`.
    /// Default: `playwright`.
    pub command: String,

    /// Fixed page size. Default: `A4`.
    pub paper_format: String,

    /// Time the renderer waits after load before printing. Default: 200 ms.
    pub wait_for_timeout_ms: u64,

    /// Hard limit per variant; the child is killed when it elapses.
    /// Default: 60 s.
    pub timeout_secs: u64,

    /// Renderer processes allowed to run at once. Default: 3.
    pub concurrency: usize,
}

impl Default for PdfConfig {
    fn default() -> Self {
        Self {
            command: "playwright".to_string(),
            paper_format: "A4".to_string(),
            wait_for_timeout_ms: 200,
            timeout_secs: 60,
            concurrency: 3,
        }
    }
}

// ── Variants ─────────────────────────────────────────────────────────────

/// Which renderer produces a variant's markdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VariantStyle {
    /// One-glance summary: top outcomes, company summaries, top-5 projects.
    Minimal,
    /// Problem → action → result per project, grouped by company.
    Impact,
    /// Architecture principles and a top-8 technical project track.
    Tech,
    /// Top-10 project case studies.
    Portfolio,
    /// Conventional chronological career description.
    Traditional,
}

impl VariantStyle {
    pub fn default_theme(self) -> Theme {
        match self {
            VariantStyle::Minimal => Theme::Minimal,
            VariantStyle::Impact => Theme::Impact,
            VariantStyle::Tech => Theme::Tech,
            VariantStyle::Portfolio => Theme::Portfolio,
            VariantStyle::Traditional => Theme::Traditional,
        }
    }
}

/// Stylesheet identifier for the HTML document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Minimal,
    Impact,
    Tech,
    Portfolio,
    Traditional,
}

impl Theme {
    /// Class put on the `<html>` element.
    pub fn css_class(self) -> &'static str {
        match self {
            Theme::Minimal => "theme-minimal",
            Theme::Impact => "theme-impact",
            Theme::Tech => "theme-tech",
            Theme::Portfolio => "theme-portfolio",
            Theme::Traditional => "theme-traditional",
        }
    }
}

/// One named rendering configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariantConfig {
    /// Stable identifier, used in artifact file names (`resume-<id>.md`).
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub style: VariantStyle,
    /// Overrides the style's default theme.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<Theme>,
    /// Literals that must appear in the rendered markdown.
    pub keywords: Vec<String>,
    /// Inclusive `[min, max]` bounds on the compact length.
    pub length_range: (usize, usize),
}

impl VariantConfig {
    pub fn theme(&self) -> Theme {
        self.theme.unwrap_or_else(|| self.style.default_theme())
    }

    fn literal(
        id: &str,
        name: &str,
        description: &str,
        style: VariantStyle,
        keywords: [&str; 3],
        length_range: (usize, usize),
    ) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            style,
            theme: None,
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
            length_range,
        }
    }
}

/// The five built-in variants, in output order.
pub fn default_variants() -> Vec<VariantConfig> {
    vec![
        VariantConfig::literal(
            "01-minimal",
            "미니멀형",
            "간결한 한눈형 이력서",
            VariantStyle::Minimal,
            ["핵심성과", "운영안정성", "자동화"],
            (1800, 9000),
        ),
        VariantConfig::literal(
            "02-impact",
            "성과중심형",
            "문제-해결-성과 서술 중심",
            VariantStyle::Impact,
            ["문제해결", "정량성과", "재현가능성"],
            (2500, 14000),
        ),
        VariantConfig::literal(
            "03-tech",
            "기술특화형",
            "아키텍처/신뢰성 전략 중심",
            VariantStyle::Tech,
            ["아키텍처", "신뢰성", "확장성"],
            (1800, 13000),
        ),
        VariantConfig::literal(
            "04-portfolio",
            "프로젝트포트폴리오형",
            "프로젝트 사례 중심",
            VariantStyle::Portfolio,
            ["도메인경험", "프로젝트", "임팩트"],
            (2400, 15000),
        ),
        VariantConfig::literal(
            "05-traditional",
            "전통형",
            "국내 기업 제출용 전통 서식",
            VariantStyle::Traditional,
            ["경력기술서", "책임범위", "성과"],
            (3000, 16000),
        ),
    ]
}

/// Load a variant set from a JSON array of [`VariantConfig`].
pub fn load_variants(path: &Path) -> Result<Vec<VariantConfig>, ResumeError> {
    let text = std::fs::read_to_string(path).map_err(|e| {
        ResumeError::InvalidConfig(format!("cannot read variants file {}: {e}", path.display()))
    })?;
    let variants: Vec<VariantConfig> = serde_json::from_str(&text).map_err(|e| {
        ResumeError::InvalidConfig(format!("invalid variants file {}: {e}", path.display()))
    })?;
    validate_variants(&variants)?;
    Ok(variants)
}

fn validate_variants(variants: &[VariantConfig]) -> Result<(), ResumeError> {
    if variants.is_empty() {
        return Err(ResumeError::InvalidConfig("no variants configured".into()));
    }
    let mut seen = HashSet::new();
    for v in variants {
        if v.id.trim().is_empty() {
            return Err(ResumeError::InvalidConfig("variant id is empty".into()));
        }
        // Ids become file names under the output root.
        if v.id.contains(['/', '\\']) || v.id.contains("..") {
            return Err(ResumeError::InvalidConfig(format!(
                "variant id '{}' must not contain '/', '\\' or '..'",
                v.id
            )));
        }
        if !seen.insert(v.id.as_str()) {
            return Err(ResumeError::InvalidConfig(format!(
                "duplicate variant id '{}'",
                v.id
            )));
        }
        let (min, max) = v.length_range;
        if min > max {
            return Err(ResumeError::InvalidConfig(format!(
                "variant '{}' has inverted length range {}~{}",
                v.id, min, max
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let c = BuildConfig::default();
        assert_eq!(c.source, PathBuf::from("docs/resume/index.md"));
        assert!(!c.with_pdf);
        assert_eq!(c.pdf.paper_format, "A4");
        assert_eq!(c.pdf.wait_for_timeout_ms, 200);
        let ids: Vec<_> = c.variants.iter().map(|v| v.id.as_str()).collect();
        assert_eq!(
            ids,
            vec!["01-minimal", "02-impact", "03-tech", "04-portfolio", "05-traditional"]
        );
    }

    #[test]
    fn theme_follows_style_unless_overridden() {
        let mut v = default_variants().remove(2);
        assert_eq!(v.theme(), Theme::Tech);
        v.theme = Some(Theme::Minimal);
        assert_eq!(v.theme().css_class(), "theme-minimal");
    }

    #[test]
    fn builder_rejects_zero_concurrency() {
        let err = BuildConfig::builder().pdf_concurrency(0).build().unwrap_err();
        assert!(err.to_string().contains("concurrency"));
    }

    #[test]
    fn builder_rejects_duplicate_ids() {
        let mut variants = default_variants();
        variants[1].id = variants[0].id.clone();
        let err = BuildConfig::builder().variants(variants).build().unwrap_err();
        assert!(err.to_string().contains("duplicate variant id"));
    }

    #[test]
    fn builder_rejects_inverted_range() {
        let mut variants = default_variants();
        variants[0].length_range = (10, 5);
        assert!(BuildConfig::builder().variants(variants).build().is_err());
    }

    #[test]
    fn builder_rejects_empty_variant_set() {
        assert!(BuildConfig::builder().variants(vec![]).build().is_err());
    }

    #[test]
    fn variant_json_shape() {
        let v = serde_json::to_value(&default_variants()[0]).unwrap();
        assert_eq!(v["id"], "01-minimal");
        assert_eq!(v["style"], "minimal");
        assert_eq!(v["lengthRange"][0], 1800);
        assert_eq!(v["lengthRange"][1], 9000);
        assert!(v.get("theme").is_none());
    }

    #[test]
    fn load_variants_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("variants.json");
        std::fs::write(
            &path,
            r#"[{"id":"x","name":"X","style":"tech","theme":"minimal","keywords":["k"],"lengthRange":[1,2]}]"#,
        )
        .unwrap();
        let variants = load_variants(&path).unwrap();
        assert_eq!(variants.len(), 1);
        assert_eq!(variants[0].style, VariantStyle::Tech);
        assert_eq!(variants[0].theme(), Theme::Minimal);
        assert_eq!(variants[0].description, "");
    }

    #[test]
    fn load_variants_reports_bad_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("variants.json");
        std::fs::write(&path, "{not json").unwrap();
        let err = load_variants(&path).unwrap_err();
        assert!(matches!(err, ResumeError::InvalidConfig(_)));
    }

    #[test]
    fn variant_ids_cannot_leave_the_output_root() {
        for id in ["../../x", "a/b", "a\\b", ".."] {
            let mut variants = default_variants();
            variants[0].id = id.to_string();
            let err = BuildConfig::builder().variants(variants).build().unwrap_err();
            assert!(err.to_string().contains("must not contain"), "{id}: {err}");
        }
    }

    #[test]
    fn load_variants_rejects_traversing_id() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("variants.json");
        std::fs::write(
            &path,
            r#"[{"id":"../../x","name":"X","style":"tech","keywords":[],"lengthRange":[1,2]}]"#,
        )
        .unwrap();
        assert!(matches!(load_variants(&path), Err(ResumeError::InvalidConfig(_))));
    }
}
