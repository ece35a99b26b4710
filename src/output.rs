//! Result types returned by the `build*` entry points.

use crate::error::PdfError;
use crate::model::NormalizedModel;
use crate::validate::{MetricRatio, ValidationReport};
use serde::Serialize;

/// Everything one build produced.
#[derive(Debug, Clone, Serialize)]
pub struct BuildOutput {
    /// The parsed source, exactly as serialised to `data/normalized-resume.json`.
    pub model: NormalizedModel,

    /// One entry per configured variant, in configuration order.
    pub variants: Vec<VariantOutput>,

    /// One entry per attempted PDF, in variant order. Empty when PDF output
    /// was not requested.
    pub pdf: Vec<PdfOutcome>,

    /// Every artifact path written, relative to the output root, in write
    /// order.
    pub artifacts: Vec<String>,

    pub stats: BuildStats,
}

/// Rendered content and verdicts for one variant.
#[derive(Debug, Clone, Serialize)]
pub struct VariantOutput {
    pub id: String,
    pub name: String,
    pub markdown: String,
    pub html: String,
    pub validation: ValidationReport,
    pub metric: MetricRatio,
}

/// Outcome of one external PDF render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PdfOutcome {
    pub variant_id: String,
    /// Target path relative to the output root.
    pub path: String,
    /// `None` when the PDF was produced.
    pub error: Option<PdfError>,
}

impl PdfOutcome {
    pub fn succeeded(&self) -> bool {
        self.error.is_none()
    }
}

/// Aggregate counters for a build.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BuildStats {
    pub total_variants: usize,
    /// Variants whose length-range and keyword checks all passed.
    pub passed_variants: usize,
    /// Variants whose metric ratio met the threshold.
    pub metric_passed_variants: usize,
    pub pdf_succeeded: usize,
    pub pdf_failed: usize,
    pub total_duration_ms: u64,
}

impl BuildStats {
    /// True when every variant passed validation and no PDF failed.
    pub fn all_passed(&self) -> bool {
        self.passed_variants == self.total_variants && self.pdf_failed == 0
    }
}
