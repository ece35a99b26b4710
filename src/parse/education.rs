//! Education extractor: `**Title** | Period` opens an entry; everything
//! else becomes a detail of the open entry.

use super::line::{classify, LineKind};
use crate::model::EducationEntry;
use once_cell::sync::Lazy;
use regex::Regex;

static RE_ENTRY: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\*\*(.+)\*\*\s*\|\s*(.+)$").unwrap());

pub fn parse_education(lines: &[String]) -> Vec<EducationEntry> {
    let mut entries = Vec::new();
    let mut current: Option<EducationEntry> = None;

    for raw in lines {
        let line = raw.trim();
        let kind = classify(line);
        if matches!(kind, LineKind::Blank | LineKind::Separator) {
            continue;
        }

        if let Some(caps) = RE_ENTRY.captures(line) {
            let opened = EducationEntry {
                title: caps[1].trim().to_string(),
                period: caps[2].trim().to_string(),
                details: Vec::new(),
            };
            if let Some(done) = current.replace(opened) {
                entries.push(done);
            }
            continue;
        }

        match current.as_mut() {
            None => {
                current = Some(EducationEntry {
                    title: line.to_string(),
                    period: String::new(),
                    details: Vec::new(),
                });
            }
            Some(entry) => match kind {
                LineKind::Bullet(text) => entry.details.push(text),
                _ => entry.details.push(line.to_string()),
            },
        }
    }

    if let Some(done) = current {
        entries.push(done);
    }
    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(src: &str) -> Vec<EducationEntry> {
        let lines: Vec<String> = src.lines().map(String::from).collect();
        parse_education(&lines)
    }

    #[test]
    fn titled_entries_with_details() {
        let entries = parse(
            "**Seoul National University** | 2014 - 2020\n\
             - B.S. Computer Science\n\
             GPA 3.9\n\
             **Coding Bootcamp** | 2021",
        );
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].title, "Seoul National University");
        assert_eq!(entries[0].period, "2014 - 2020");
        assert_eq!(entries[0].details, vec!["B.S. Computer Science", "GPA 3.9"]);
        assert_eq!(entries[1].title, "Coding Bootcamp");
        assert!(entries[1].details.is_empty());
    }

    #[test]
    fn unmatched_first_line_opens_untitled_period() {
        let entries = parse("Self-taught\n- open courseware");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].title, "Self-taught");
        assert_eq!(entries[0].period, "");
        assert_eq!(entries[0].details, vec!["open courseware"]);
    }

    #[test]
    fn empty_bucket() {
        assert!(parse("\n\n").is_empty());
    }
}
