//! The Normalized Model: one immutable in-memory representation of the
//! parsed résumé.
//!
//! The model is built once per run by [`crate::parse::build_model`] and is
//! only ever handed out by shared reference afterwards. Projects are held in
//! an [`Arc`] so that a company's own project list and the flattened
//! [`NormalizedModel::projects`] view point at the same values rather than
//! at independent copies.
//!
//! Field names serialise in camelCase (`techStack`, `generatedAt`, …) to
//! keep `data/normalized-resume.json` stable for downstream tooling.

use serde::ser::{Serialize, SerializeMap, Serializer};
use std::sync::Arc;

/// Name, headline role and contact lines from the document header.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Person {
    pub name: String,
    pub role: String,
    pub contacts: Vec<Contact>,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Contact {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct SkillCategory {
    pub category: String,
    pub items: Vec<String>,
}

/// One `### Company | Role | Period` block of the Experience section.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyExperience {
    pub heading_text: String,
    pub company: String,
    pub role: String,
    pub period: String,
    pub overview: Vec<String>,
    pub highlights: Vec<String>,
    pub projects: Vec<Arc<Project>>,
}

/// One `####` project inside a company.
///
/// `tech_stack` is deduplicated (first occurrence wins) and never holds a
/// blank entry.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub title: String,
    pub tech_stack: Vec<String>,
    pub context: Vec<String>,
    pub bullets: Vec<String>,
    pub results: Vec<String>,
}

/// A project seen through its owning company, as exposed by the flattened
/// [`NormalizedModel::projects`] list.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct ProjectView {
    pub company: String,
    pub role: String,
    pub period: String,
    #[serde(flatten)]
    pub project: Arc<Project>,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenSourceEntry {
    pub title: String,
    pub tech_stack: Vec<String>,
    pub details: Vec<String>,
    pub contributions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct EducationEntry {
    pub title: String,
    pub period: String,
    pub details: Vec<String>,
}

/// Occurrence count of every `##` heading, in first-seen order.
///
/// Duplicates are recorded, not rejected; a count above one is a
/// structural-quality signal surfaced by the extraction log.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionCounts {
    entries: Vec<(String, usize)>,
}

impl SectionCounts {
    pub(crate) fn record(&mut self, title: &str) {
        match self.entries.iter_mut().find(|(t, _)| t == title) {
            Some((_, count)) => *count += 1,
            None => self.entries.push((title.to_string(), 1)),
        }
    }

    /// Count for `title`, or 0 when the heading never appeared.
    pub fn get(&self, title: &str) -> usize {
        self.entries
            .iter()
            .find(|(t, _)| t == title)
            .map(|(_, c)| *c)
            .unwrap_or(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.entries.iter().map(|(t, c)| (t.as_str(), *c))
    }

    /// Headings that occurred more than once.
    pub fn duplicates(&self) -> impl Iterator<Item = (&str, usize)> {
        self.iter().filter(|(_, c)| *c > 1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for SectionCounts {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (title, count) in &self.entries {
            map.serialize_entry(title, count)?;
        }
        map.end()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelMetadata {
    pub source: String,
    pub generated_at: String,
    pub section_counts: SectionCounts,
}

/// The root of the parsed document.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedModel {
    pub metadata: ModelMetadata,
    pub person: Person,
    pub about: String,
    pub skills: Vec<SkillCategory>,
    pub experiences: Vec<CompanyExperience>,
    pub projects: Vec<ProjectView>,
    pub open_source: Vec<OpenSourceEntry>,
    pub education: Vec<EducationEntry>,
}
