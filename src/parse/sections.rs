//! Section splitter: partition the document into top-level `##` buckets.
//!
//! Only a `##` heading at the very start of a line opens a bucket; deeper
//! headings stay inside the current bucket for the extractors to interpret.
//! A repeated heading reopens its existing bucket, so the lines of every
//! occurrence end up concatenated in document order.

use super::line::{classify, LineKind};
use crate::model::SectionCounts;
use std::collections::HashMap;

/// Key of the synthetic bucket holding everything before the first `##`.
pub const HEADER_BUCKET: &str = "__HEADER__";

#[derive(Debug, Default)]
pub struct Sections {
    buckets: HashMap<String, Vec<String>>,
    pub counts: SectionCounts,
}

impl Sections {
    /// Lines of the bucket titled `title`; empty when it never appeared.
    pub fn lines(&self, title: &str) -> &[String] {
        self.buckets.get(title).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn header(&self) -> &[String] {
        self.lines(HEADER_BUCKET)
    }
}

pub fn split_sections(markdown: &str) -> Sections {
    let mut sections = Sections::default();
    sections.buckets.insert(HEADER_BUCKET.to_string(), Vec::new());
    let mut current = HEADER_BUCKET.to_string();

    for line in markdown.split('\n') {
        if let Some(title) = top_level_title(line) {
            sections.counts.record(&title);
            sections.buckets.entry(title.clone()).or_default();
            current = title;
            continue;
        }
        sections
            .buckets
            .entry(current.clone())
            .or_default()
            .push(line.to_string());
    }

    sections
}

fn top_level_title(line: &str) -> Option<String> {
    if !line.starts_with("##") {
        return None;
    }
    match classify(line) {
        LineKind::Heading { level: 2, text } => Some(text),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_bucket_holds_preamble() {
        let s = split_sections("# Jane | Dev\nmail: j@x.dev\n## About Me\nhello");
        assert_eq!(s.header(), &["# Jane | Dev", "mail: j@x.dev"]);
        assert_eq!(s.lines("About Me"), &["hello"]);
    }

    #[test]
    fn nested_headings_stay_in_bucket() {
        let s = split_sections("## Experience\n### Acme\n#### Billing\n- did it");
        assert_eq!(s.lines("Experience"), &["### Acme", "#### Billing", "- did it"]);
        assert_eq!(s.counts.get("Acme"), 0);
    }

    #[test]
    fn duplicate_headings_merge_and_count() {
        let s = split_sections("## Experience\n### A\n## Skill\nx\n## Experience\n### B");
        assert_eq!(s.counts.get("Experience"), 2);
        assert_eq!(s.lines("Experience"), &["### A", "### B"]);
        assert_eq!(s.lines("Skill"), &["x"]);
    }

    #[test]
    fn indented_heading_is_not_a_section() {
        let s = split_sections("## About Me\n  ## Not a heading");
        assert_eq!(s.lines("About Me"), &["  ## Not a heading"]);
        assert_eq!(s.counts.len(), 1);
    }

    #[test]
    fn missing_bucket_is_empty() {
        let s = split_sections("# Jane");
        assert!(s.lines("Skill").is_empty());
        assert!(s.counts.is_empty());
    }
}
