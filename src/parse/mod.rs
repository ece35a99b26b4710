//! Source document → [`NormalizedModel`].
//!
//! Each submodule implements exactly one step, and data only flows forward:
//!
//! ```text
//! line ──▶ sections ──▶ header / about / skills / experience / open_source / education ──▶ model
//! ```
//!
//! 1. [`line`]     — classify a raw line into a closed [`line::LineKind`]
//! 2. [`sections`] — split into `##` buckets and count every heading
//! 3. extractors   — one small state machine per bucket
//! 4. [`build_model`] — assemble the extractor outputs and the flattened
//!    project view

pub mod about;
pub mod education;
pub mod experience;
pub mod header;
pub mod line;
pub mod open_source;
pub mod sections;
pub mod skills;

use crate::model::{CompanyExperience, ModelMetadata, NormalizedModel, ProjectView};
use crate::text::normalise_line_endings;
use std::sync::Arc;
use tracing::{debug, warn};

/// Recognised top-level headings.
pub const ABOUT_HEADING: &str = "About Me";
pub const SKILL_HEADING: &str = "Skill";
pub const EXPERIENCE_HEADING: &str = "Experience";
pub const OPEN_SOURCE_HEADING: &str = "Open Source";
pub const EDUCATION_HEADING: &str = "Education";

/// Parse `markdown` into the immutable model.
///
/// `source` is recorded verbatim in the metadata; `generated_at` is the
/// run-wide timestamp, passed in so that parsing stays deterministic.
pub fn build_model(markdown: &str, source: &str, generated_at: &str) -> NormalizedModel {
    let markdown = normalise_line_endings(markdown);
    let sections = sections::split_sections(&markdown);

    for (title, count) in sections.counts.duplicates() {
        warn!("Heading '## {}' appears {} times; occurrences are merged", title, count);
    }

    let person = header::parse_header(sections.header());
    let about = about::parse_about(sections.lines(ABOUT_HEADING));
    let skills = skills::parse_skills(sections.lines(SKILL_HEADING));
    let experiences = experience::parse_experience(sections.lines(EXPERIENCE_HEADING));
    let open_source = open_source::parse_open_source(sections.lines(OPEN_SOURCE_HEADING));
    let education = education::parse_education(sections.lines(EDUCATION_HEADING));
    let projects = flatten_projects(&experiences);

    debug!(
        "Parsed {} skill categories, {} companies, {} projects, {} open-source entries, {} education entries",
        skills.len(),
        experiences.len(),
        projects.len(),
        open_source.len(),
        education.len()
    );

    NormalizedModel {
        metadata: ModelMetadata {
            source: source.to_string(),
            generated_at: generated_at.to_string(),
            section_counts: sections.counts,
        },
        person,
        about,
        skills,
        experiences,
        projects,
        open_source,
        education,
    }
}

/// Every company's projects, company order then project order, each tagged
/// with its owner's company/role/period.
pub fn flatten_projects(experiences: &[CompanyExperience]) -> Vec<ProjectView> {
    experiences
        .iter()
        .flat_map(|exp| {
            exp.projects.iter().map(move |project| ProjectView {
                company: exp.company.clone(),
                role: exp.role.clone(),
                period: exp.period.clone(),
                project: Arc::clone(project),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = "# Jane Doe | Backend Engineer\r\n\
Email | jane@example.com\r\n\
GitHub: github.com/jane\r\n\
\r\n\
## About Me\r\n\
Builds calm backends.\r\n\
## Skill\r\n\
**Backend** · NestJS, TypeScript\r\n\
## Experience\r\n\
### Acme | Backend Engineer | 2021 - 2023\r\n\
#### Billing\r\n\
- rewrote the batch\r\n\
→ 처리 시간 50% 단축\r\n\
### Beta | Engineer | 2019 - 2021\r\n\
#### Sync\r\n\
- built sync\r\n\
## Education\r\n\
**Uni** | 2014 - 2018\r\n";

    #[test]
    fn builds_full_model() {
        let m = build_model(DOC, "docs/resume/index.md", "2026-01-01T00:00:00.000Z");
        assert_eq!(m.person.name, "Jane Doe");
        assert_eq!(m.person.role, "Backend Engineer");
        assert_eq!(m.person.contacts.len(), 2);
        assert_eq!(m.about, "Builds calm backends.");
        assert_eq!(m.skills.len(), 1);
        assert_eq!(m.experiences.len(), 2);
        assert_eq!(m.education.len(), 1);
        assert_eq!(m.metadata.source, "docs/resume/index.md");
        assert_eq!(m.metadata.section_counts.get("Experience"), 1);
    }

    #[test]
    fn flattened_projects_carry_owner_and_share_values() {
        let m = build_model(DOC, "src", "ts");
        assert_eq!(m.projects.len(), 2);
        assert_eq!(m.projects[0].company, "Acme");
        assert_eq!(m.projects[0].project.results, vec!["처리 시간 50% 단축"]);
        assert_eq!(m.projects[1].company, "Beta");
        assert_eq!(m.projects[1].period, "2019 - 2021");
        assert!(Arc::ptr_eq(&m.projects[0].project, &m.experiences[0].projects[0]));
    }

    #[test]
    fn missing_sections_parse_to_empty() {
        let m = build_model("# Only | Header", "src", "ts");
        assert!(m.skills.is_empty());
        assert!(m.experiences.is_empty());
        assert!(m.projects.is_empty());
        assert!(m.education.is_empty());
        assert!(m.open_source.is_empty());
        assert_eq!(m.about, "");
    }

    #[test]
    fn model_json_uses_camel_case() {
        let m = build_model(DOC, "src", "ts");
        let v = serde_json::to_value(&m).unwrap();
        assert_eq!(v["metadata"]["generatedAt"], "ts");
        assert_eq!(v["metadata"]["sectionCounts"]["Skill"], 1);
        assert_eq!(v["experiences"][0]["headingText"], "Acme | Backend Engineer | 2021 - 2023");
        assert!(v["projects"][0]["techStack"].is_array());
        assert!(v["openSource"].is_array());
    }
}
