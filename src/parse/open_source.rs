//! Open-source extractor: `###` entries with tech, contribution and detail
//! lines. Single level; lines before the first entry are dropped.

use super::line::{classify, LineKind};
use crate::model::OpenSourceEntry;
use crate::text::{strip_inline_markdown, unique};
use once_cell::sync::Lazy;
use regex::Regex;

static RE_CONTRIBUTION: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\*\*#\d+").unwrap());

#[derive(Debug)]
struct EntryBuilder {
    title: String,
    tech_stack: Vec<String>,
    details: Vec<String>,
    contributions: Vec<String>,
}

impl EntryBuilder {
    fn open(title: String) -> Self {
        Self {
            title,
            tech_stack: Vec::new(),
            details: Vec::new(),
            contributions: Vec::new(),
        }
    }

    fn close(self) -> OpenSourceEntry {
        OpenSourceEntry {
            title: self.title,
            tech_stack: unique(self.tech_stack),
            details: self.details,
            contributions: self.contributions,
        }
    }
}

pub fn parse_open_source(lines: &[String]) -> Vec<OpenSourceEntry> {
    let mut entries = Vec::new();
    let mut current: Option<EntryBuilder> = None;

    for raw in lines {
        let line = raw.trim();
        match classify(line) {
            LineKind::Blank | LineKind::Separator => {}
            LineKind::Heading { level: 3, text } => {
                if let Some(open) = current.replace(EntryBuilder::open(text)) {
                    entries.push(open.close());
                }
            }
            kind => {
                let Some(entry) = current.as_mut() else {
                    continue;
                };
                if let LineKind::Tech(tokens) = kind {
                    entry.tech_stack.extend(tokens);
                } else if RE_CONTRIBUTION.is_match(line) {
                    entry.contributions.push(strip_inline_markdown(line));
                } else {
                    entry.details.push(strip_inline_markdown(line));
                }
            }
        }
    }

    if let Some(open) = current.take() {
        entries.push(open.close());
    }
    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(src: &str) -> Vec<OpenSourceEntry> {
        let lines: Vec<String> = src.lines().map(String::from).collect();
        parse_open_source(&lines)
    }

    #[test]
    fn classifies_tech_contribution_and_detail() {
        let entries = parse(
            "### agent-orchestrator\n\
             `TypeScript` `Node.js` `TypeScript`\n\
             Orchestration platform for [coding agents](https://example.org).\n\
             **#123** context compression for long sessions\n\
             **#131** safe self-update\n",
        );
        assert_eq!(entries.len(), 1);
        let e = &entries[0];
        assert_eq!(e.title, "agent-orchestrator");
        assert_eq!(e.tech_stack, vec!["TypeScript", "Node.js"]);
        assert_eq!(
            e.details,
            vec!["Orchestration platform for coding agents (https://example.org)."]
        );
        assert_eq!(
            e.contributions,
            vec![
                "#123 context compression for long sessions",
                "#131 safe self-update"
            ]
        );
    }

    #[test]
    fn lines_before_first_entry_are_dropped() {
        let entries = parse("intro\n### a\ndetail");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].details, vec!["detail"]);
    }

    #[test]
    fn bullet_line_is_a_detail() {
        let entries = parse("### a\n- **bold** note");
        assert_eq!(entries[0].details, vec!["- bold note"]);
    }

    #[test]
    fn multiple_entries_flush_in_order() {
        let entries = parse("### a\nx\n### b\ny");
        let titles: Vec<_> = entries.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["a", "b"]);
        assert_eq!(entries[1].details, vec!["y"]);
    }

    #[test]
    fn bold_without_number_is_not_a_contribution() {
        let entries = parse("### a\n**#x** not numbered");
        assert!(entries[0].contributions.is_empty());
        assert_eq!(entries[0].details, vec!["#x not numbered"]);
    }
}
