//! Experience extractor: a three-state machine over the Experience bucket.
//!
//! ```text
//!             ###                   ####
//! NoCompany ──────▶ InCompany ─────────────▶ InProject
//!                     ▲   │ ###                │ ####: close project, open next
//!                     │   └──── close company ◀┘ ###: close project + company
//! ```
//!
//! Open entities live in builders. Closing a builder consumes it and yields
//! the immutable value, so nothing already attached to the result can be
//! touched again. End of input closes whatever is still open.

use super::line::{classify, LineKind};
use crate::model::{CompanyExperience, Project};
use crate::text::unique;
use std::sync::Arc;

#[derive(Debug)]
struct ProjectBuilder {
    title: String,
    tech_stack: Vec<String>,
    context: Vec<String>,
    bullets: Vec<String>,
    results: Vec<String>,
}

impl ProjectBuilder {
    fn open(title: String) -> Self {
        Self {
            title,
            tech_stack: Vec::new(),
            context: Vec::new(),
            bullets: Vec::new(),
            results: Vec::new(),
        }
    }

    fn close(self) -> Project {
        Project {
            title: self.title,
            tech_stack: unique(self.tech_stack),
            context: self.context,
            bullets: self.bullets,
            results: self.results,
        }
    }
}

#[derive(Debug)]
struct CompanyBuilder {
    heading_text: String,
    company: String,
    role: String,
    period: String,
    overview: Vec<String>,
    highlights: Vec<String>,
    projects: Vec<Arc<Project>>,
}

impl CompanyBuilder {
    /// Open from `Company | Role | Period`; missing segments are empty.
    fn open(heading_text: String) -> Self {
        let mut chunks = heading_text.split('|').map(str::trim);
        let company = chunks.next().unwrap_or_default().to_string();
        let role = chunks.next().unwrap_or_default().to_string();
        let period = chunks.next().unwrap_or_default().to_string();
        Self {
            heading_text,
            company,
            role,
            period,
            overview: Vec::new(),
            highlights: Vec::new(),
            projects: Vec::new(),
        }
    }

    fn attach(&mut self, project: ProjectBuilder) {
        self.projects.push(Arc::new(project.close()));
    }

    fn close(self) -> CompanyExperience {
        CompanyExperience {
            heading_text: self.heading_text,
            company: self.company,
            role: self.role,
            period: self.period,
            overview: self.overview,
            highlights: self.highlights,
            projects: self.projects,
        }
    }
}

#[derive(Debug, Default)]
enum State {
    #[default]
    NoCompany,
    InCompany(CompanyBuilder),
    InProject(CompanyBuilder, ProjectBuilder),
}

#[derive(Debug, Default)]
pub struct ExperienceExtractor {
    state: State,
    done: Vec<CompanyExperience>,
}

impl ExperienceExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn feed(&mut self, raw: &str) {
        let state = std::mem::take(&mut self.state);
        self.state = self.step(state, raw.trim(), classify(raw));
    }

    /// Close any open project and company and return every company.
    pub fn finish(mut self) -> Vec<CompanyExperience> {
        let state = std::mem::take(&mut self.state);
        self.close_all(state);
        self.done
    }

    fn close_all(&mut self, state: State) {
        match state {
            State::NoCompany => {}
            State::InCompany(company) => self.done.push(company.close()),
            State::InProject(mut company, project) => {
                company.attach(project);
                self.done.push(company.close());
            }
        }
    }

    fn step(&mut self, state: State, line: &str, kind: LineKind) -> State {
        match (state, kind) {
            (state, LineKind::Heading { level: 3, text }) => {
                self.close_all(state);
                State::InCompany(CompanyBuilder::open(text))
            }

            (State::NoCompany, LineKind::Heading { level: 4, .. }) => State::NoCompany,
            (State::InCompany(company), LineKind::Heading { level: 4, text }) => {
                State::InProject(company, ProjectBuilder::open(text))
            }
            (State::InProject(mut company, project), LineKind::Heading { level: 4, text }) => {
                company.attach(project);
                State::InProject(company, ProjectBuilder::open(text))
            }

            (State::InProject(company, mut project), LineKind::Tech(tokens)) => {
                project.tech_stack.extend(tokens);
                State::InProject(company, project)
            }
            (state, LineKind::Tech(_)) => state,

            (State::InProject(company, mut project), LineKind::Bullet(text)) => {
                project.bullets.push(text);
                State::InProject(company, project)
            }
            (State::InProject(company, mut project), LineKind::Outcome(text)) => {
                project.results.push(text);
                State::InProject(company, project)
            }
            (State::InCompany(mut company), LineKind::Bullet(text) | LineKind::Outcome(text)) => {
                company.highlights.push(text);
                State::InCompany(company)
            }

            (state, LineKind::Separator | LineKind::Blank) => state,

            (State::InProject(company, mut project), _) => {
                project.context.push(line.to_string());
                State::InProject(company, project)
            }
            (State::InCompany(mut company), _) => {
                company.overview.push(line.to_string());
                State::InCompany(company)
            }
            (State::NoCompany, _) => State::NoCompany,
        }
    }
}

pub fn parse_experience(lines: &[String]) -> Vec<CompanyExperience> {
    let mut extractor = ExperienceExtractor::new();
    for line in lines {
        extractor.feed(line);
    }
    extractor.finish()
}
