//! Text and JSON reports written next to the variants.
//!
//! Every builder takes the run's `generated_at` stamp explicitly and returns
//! the full file content, ending in a newline. Nothing here writes files.

use crate::config::{VariantConfig, VariantStyle};
use crate::error::ResumeError;
use crate::model::NormalizedModel;
use crate::output::{PdfOutcome, VariantOutput};
use crate::validate::{SectionCheck, METRIC_RATIO_THRESHOLD};
use serde::Serialize;

fn verdict(passed: bool) -> &'static str {
    if passed {
        "PASS"
    } else {
        "FAIL"
    }
}

fn finish(lines: Vec<String>) -> String {
    format!("{}\n", lines.join("\n"))
}

/// Pretty JSON with a trailing newline.
pub fn to_json<T: Serialize>(value: &T, what: &'static str) -> Result<String, ResumeError> {
    serde_json::to_string_pretty(value)
        .map(|json| format!("{json}\n"))
        .map_err(|source| ResumeError::Serialization { what, source })
}

// ── Logs ─────────────────────────────────────────────────────────────────

/// `logs/section-extraction.log`.
pub fn extraction_log(
    model: &NormalizedModel,
    checks: &[SectionCheck],
    generated_at: &str,
) -> String {
    let counts = &model.metadata.section_counts;
    let mut lines = vec![
        format!("[{}] source={}", generated_at, model.metadata.source),
        String::new(),
        "[Section Counts]".to_string(),
    ];
    lines.extend(counts.iter().map(|(title, n)| format!("- {title}: {n}")));

    lines.push(String::new());
    lines.push("[Mandatory Section Check]".to_string());
    lines.extend(checks.iter().map(|c| {
        format!("- {}: {} ({}={})", c.key, verdict(c.passed), c.unit, c.count)
    }));

    lines.push(String::new());
    lines.push("[Duplicate Heading Check]".to_string());
    let duplicates: Vec<(&str, usize)> = counts.duplicates().collect();
    if duplicates.is_empty() {
        lines.push("- No duplicates".to_string());
    } else {
        lines.extend(duplicates.iter().map(|(title, n)| format!("- {title}: {n}")));
    }

    lines.push(String::new());
    lines.push("[Extracted Summary]".to_string());
    lines.push(format!("- Name: {}", model.person.name));
    lines.push(format!("- Role: {}", model.person.role));
    lines.push(format!("- Contacts: {}", model.person.contacts.len()));
    lines.push(format!("- OpenSource Entries: {}", model.open_source.len()));
    finish(lines)
}

/// `logs/template-validation.log`. `variants` and `outputs` are parallel.
pub fn validation_log(
    variants: &[VariantConfig],
    outputs: &[VariantOutput],
    generated_at: &str,
) -> String {
    let mut lines = vec![format!("[{generated_at}] template validation")];
    for (variant, output) in variants.iter().zip(outputs) {
        let report = &output.validation;
        let (min, max) = variant.length_range;
        lines.push(String::new());
        lines.push(format!("- {} ({})", variant.id, variant.name));
        lines.push(format!(
            "  - compactLength: {} ({} range={}~{})",
            report.compact_length,
            verdict(report.in_range),
            min,
            max
        ));
        lines.extend(
            report
                .keywords
                .iter()
                .map(|k| format!("  - keyword \"{}\": {}", k.keyword, verdict(k.passed))),
        );
        lines.push(format!("  - overall: {}", verdict(report.passed)));
    }
    finish(lines)
}

/// `logs/pdf-build.log`: the header, then one line per attempted PDF.
pub fn pdf_log(outcomes: &[PdfOutcome], generated_at: &str) -> String {
    let mut lines = vec![format!("[{generated_at}] pdf generation")];
    lines.extend(outcomes.iter().map(|o| match &o.error {
        None => format!("- {}: PASS ({})", o.variant_id, o.path),
        Some(e) => format!("- {}: FAIL ({})", o.variant_id, e),
    }));
    finish(lines)
}

// ── Manifest ─────────────────────────────────────────────────────────────

/// `README.md` listing every artifact written, relative to the output root.
pub fn manifest(source: &str, generated_at: &str, with_pdf: bool, files: &[String]) -> String {
    let mut lines = vec![
        "# Resume Variant Outputs".to_string(),
        String::new(),
        format!("- Source: `{source}`"),
        format!("- Generated at: `{generated_at}`"),
        format!("- PDF included: `{}`", if with_pdf { "yes" } else { "no" }),
        String::new(),
        "## Generated Files".to_string(),
    ];
    lines.extend(files.iter().map(|f| format!("- `{f}`")));
    lines.push(String::new());
    lines.push("## Build Commands".to_string());
    lines.push("- Markdown/HTML only: `resume-variants`".to_string());
    lines.push("- Markdown/HTML/PDF: `resume-variants --pdf`".to_string());
    finish(lines)
}

// ── Template spec ────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct TemplateSpecEntry<'a> {
    id: &'a str,
    name: &'a str,
    description: &'a str,
    style: VariantStyle,
    keywords: &'a [String],
    length_range: (usize, usize),
}

/// `templates/template-spec.json`.
pub fn template_spec(variants: &[VariantConfig]) -> Result<String, ResumeError> {
    let entries: Vec<TemplateSpecEntry<'_>> = variants
        .iter()
        .map(|v| TemplateSpecEntry {
            id: &v.id,
            name: &v.name,
            description: &v.description,
            style: v.style,
            keywords: &v.keywords,
            length_range: v.length_range,
        })
        .collect();
    to_json(&entries, "template spec")
}

// ── Metric ratio ─────────────────────────────────────────────────────────

/// `reports/metrics-ratio.md`.
pub fn metrics_markdown(outputs: &[VariantOutput], generated_at: &str) -> String {
    let threshold_pct = (METRIC_RATIO_THRESHOLD * 100.0).round();
    let mut lines = vec![
        "# 성과지표 문장 비율 리포트".to_string(),
        String::new(),
        format!("- Generated at: `{generated_at}`"),
        format!("- Threshold: `{threshold_pct}%`"),
        String::new(),
        "| Variant | 전체 bullet 수 | 성과/수치 bullet 수 | 비율 | 상태 |".to_string(),
        "| --- | ---: | ---: | ---: | --- |".to_string(),
    ];
    lines.extend(outputs.iter().map(|o| {
        format!(
            "| {} ({}) | {} | {} | {:.1}% | {} |",
            o.id,
            o.name,
            o.metric.bullets,
            o.metric.metric_bullets,
            o.metric.ratio * 100.0,
            verdict(o.metric.passed)
        )
    }));
    lines.push(String::new());
    lines.push("## 판정 기준".to_string());
    lines.push(String::new());
    lines.push(format!(
        "- 전체 bullet 대비 수치/성과 문장 비율이 {threshold_pct}% 이상이면 PASS"
    ));
    lines.push("- 수치가 없는 일반 설명 문장도 필요하므로 100%를 목표로 하지 않음".to_string());
    finish(lines)
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct MetricsReport<'a> {
    generated_at: &'a str,
    threshold: f64,
    variants: Vec<MetricsRow<'a>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct MetricsRow<'a> {
    id: &'a str,
    name: &'a str,
    bullets: usize,
    metric_bullets: usize,
    ratio: f64,
    pass: bool,
}

/// `reports/metrics-ratio.json`. Ratios are rounded to four decimals.
pub fn metrics_json(outputs: &[VariantOutput], generated_at: &str) -> Result<String, ResumeError> {
    let report = MetricsReport {
        generated_at,
        threshold: METRIC_RATIO_THRESHOLD,
        variants: outputs
            .iter()
            .map(|o| MetricsRow {
                id: &o.id,
                name: &o.name,
                bullets: o.metric.bullets,
                metric_bullets: o.metric.metric_bullets,
                ratio: (o.metric.ratio * 10_000.0).round() / 10_000.0,
                pass: o.metric.passed,
            })
            .collect(),
    };
    to_json(&report, "metric ratio report")
}
