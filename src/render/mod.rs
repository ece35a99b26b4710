//! Variant renderers: `(model, variant) → markdown`.
//!
//! Every renderer is a pure function of the [`NormalizedModel`] and its
//! [`VariantConfig`]; none of them touches the clock, the filesystem or any
//! shared state, so the five can run in any order (or in parallel) and
//! produce the same bytes.
//!
//! Renderers differ in which sections they emit, whether projects stay
//! grouped under their company or are flattened to a top-N list, and how
//! much fallback prose [`pick`] injects when a source field is empty.

mod impact;
mod minimal;
mod portfolio;
mod tech;
mod traditional;

use crate::config::{VariantConfig, VariantStyle};
use crate::model::{NormalizedModel, Person};

/// Render `variant` from `model`. The result ends in exactly one newline.
pub fn render_variant(model: &NormalizedModel, variant: &VariantConfig) -> String {
    match variant.style {
        VariantStyle::Minimal => minimal::render(model, variant),
        VariantStyle::Impact => impact::render(model, variant),
        VariantStyle::Tech => tech::render(model, variant),
        VariantStyle::Portfolio => portfolio::render(model, variant),
        VariantStyle::Traditional => traditional::render(model, variant),
    }
}

/// First non-blank candidate (trimmed), else `fallback`.
pub fn pick<I, S>(parts: I, fallback: &str) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    parts
        .into_iter()
        .map(|part| part.as_ref().trim().to_string())
        .find(|part| !part.is_empty())
        .unwrap_or_else(|| fallback.to_string())
}

/// `items` joined by `sep`, or `fallback` when that join is empty.
pub(crate) fn join_or(items: &[String], sep: &str, fallback: &str) -> String {
    let joined = items.join(sep);
    if joined.is_empty() {
        fallback.to_string()
    } else {
        joined
    }
}

pub(crate) fn bullet_list<I, S>(items: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    items
        .into_iter()
        .map(|item| format!("- {}", item.as_ref()))
        .collect::<Vec<_>>()
        .join("\n")
}

pub(crate) fn contact_lines(person: &Person) -> String {
    bullet_list(person.contacts.iter().map(|c| {
        if c.label.is_empty() {
            c.value.clone()
        } else {
            format!("{}: {}", c.label, c.value)
        }
    }))
}

pub(crate) fn skill_lines(model: &NormalizedModel) -> String {
    bullet_list(
        model
            .skills
            .iter()
            .map(|s| format!("{}: {}", s.category, s.items.join(", "))),
    )
}

pub(crate) fn keyword_line(variant: &VariantConfig) -> String {
    variant.keywords.join(" · ")
}

/// A markdown document assembled from blocks separated by one blank line.
pub(crate) struct Doc {
    blocks: Vec<String>,
}

impl Doc {
    pub(crate) fn new(title: String) -> Self {
        Self {
            blocks: vec![format!("# {title}")],
        }
    }

    pub(crate) fn section(mut self, heading: &str, body: impl AsRef<str>) -> Self {
        self.blocks.push(format!("## {}\n{}", heading, body.as_ref()));
        self
    }

    pub(crate) fn finish(self) -> String {
        let text = self.blocks.join("\n\n");
        format!("{}\n", text.trim_end())
    }
}
