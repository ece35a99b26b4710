//! Acceptance checks.
//!
//! None of these block generation: a failed [`ValidationReport`] or
//! [`MetricRatio`] is recorded in the logs and reports while the artifacts
//! are still written. The only fatal check is [`check_mandatory_sections`],
//! whose failures the build turns into
//! [`crate::ResumeError::MissingSections`].

use crate::config::VariantConfig;
use crate::model::NormalizedModel;
use crate::text::compact_length;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

/// Minimum share of bullets that must carry a quantitative marker.
pub const METRIC_RATIO_THRESHOLD: f64 = 0.35;

static RE_BULLET: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*-\s+").unwrap());
static RE_METRIC: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d|%|→|건|회|원|만|억|개국|대|분|시간|초)").unwrap());

// ── Variant validation ───────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeywordCheck {
    pub keyword: String,
    pub passed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    pub compact_length: usize,
    pub in_range: bool,
    pub keywords: Vec<KeywordCheck>,
    pub passed: bool,
}

/// Length-range and keyword gate for one rendered variant.
pub fn validate_variant(markdown: &str, variant: &VariantConfig) -> ValidationReport {
    let compact_length = compact_length(markdown);
    let (min, max) = variant.length_range;
    let in_range = (min..=max).contains(&compact_length);
    let keywords: Vec<KeywordCheck> = variant
        .keywords
        .iter()
        .map(|keyword| KeywordCheck {
            keyword: keyword.clone(),
            passed: markdown.contains(keyword.as_str()),
        })
        .collect();
    let passed = in_range && keywords.iter().all(|k| k.passed);
    ValidationReport {
        compact_length,
        in_range,
        keywords,
        passed,
    }
}

// ── Mandatory sections ───────────────────────────────────────────────────

/// One row of the mandatory-section check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionCheck {
    /// `skill`, `experience`, `projects` or `education`.
    pub key: &'static str,
    /// Noun printed next to the count in the extraction log.
    pub unit: &'static str,
    pub count: usize,
    pub passed: bool,
}

pub fn check_mandatory_sections(model: &NormalizedModel) -> Vec<SectionCheck> {
    [
        ("skill", "category", model.skills.len()),
        ("experience", "company", model.experiences.len()),
        ("projects", "project", model.projects.len()),
        ("education", "entry", model.education.len()),
    ]
    .into_iter()
    .map(|(key, unit, count)| SectionCheck {
        key,
        unit,
        count,
        passed: count > 0,
    })
    .collect()
}

/// Keys of every failed check, in check order.
pub fn missing_sections(checks: &[SectionCheck]) -> Vec<String> {
    checks
        .iter()
        .filter(|c| !c.passed)
        .map(|c| c.key.to_string())
        .collect()
}

// ── Metric ratio ─────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricRatio {
    pub bullets: usize,
    pub metric_bullets: usize,
    pub ratio: f64,
    pub passed: bool,
}

/// Share of bullet lines that carry a number, `%`, `→` or a Korean
/// counter/unit. No bullets means a ratio of 0.
pub fn metric_ratio(markdown: &str) -> MetricRatio {
    let bullets: Vec<&str> = markdown
        .split('\n')
        .filter(|line| RE_BULLET.is_match(line))
        .collect();
    let metric_bullets = bullets.iter().filter(|line| RE_METRIC.is_match(line)).count();
    let ratio = if bullets.is_empty() {
        0.0
    } else {
        metric_bullets as f64 / bullets.len() as f64
    };
    MetricRatio {
        bullets: bullets.len(),
        metric_bullets,
        ratio,
        passed: ratio >= METRIC_RATIO_THRESHOLD,
    }
}
