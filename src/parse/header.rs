//! Header extractor: `# Name | Role` followed by contact lines.

use super::line::{classify, LineKind};
use crate::model::{Contact, Person};
use once_cell::sync::Lazy;
use regex::Regex;

/// Role used when the title line carries no `|` separator.
pub const DEFAULT_ROLE: &str = "Backend Engineer";
/// Label for a contact line with neither `|` nor `:`.
pub const GENERIC_CONTACT_LABEL: &str = "Info";

static RE_TITLE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^#\s*(.+?)\s*\|\s*(.+)$").unwrap());
static RE_TITLE_MARK: Lazy<Regex> = Lazy::new(|| Regex::new(r"^#\s*").unwrap());

pub fn parse_header(lines: &[String]) -> Person {
    let mut clean = lines
        .iter()
        .filter(|line| !matches!(classify(line), LineKind::Blank))
        .map(|line| line.trim());

    let first = clean.next().unwrap_or("");
    let (name, role) = match RE_TITLE.captures(first) {
        Some(caps) => (caps[1].trim().to_string(), caps[2].trim().to_string()),
        None => (
            RE_TITLE_MARK.replace(first, "").trim().to_string(),
            DEFAULT_ROLE.to_string(),
        ),
    };

    let contacts = clean.map(parse_contact).collect();
    Person {
        name,
        role,
        contacts,
    }
}

fn parse_contact(line: &str) -> Contact {
    let split = line.split_once('|').or_else(|| line.split_once(':'));
    match split {
        Some((label, value)) => Contact {
            label: label.trim().to_string(),
            value: value.trim().to_string(),
        },
        None => Contact {
            label: GENERIC_CONTACT_LABEL.to_string(),
            value: line.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(src: &str) -> Vec<String> {
        src.lines().map(String::from).collect()
    }

    #[test]
    fn name_role_and_two_contacts() {
        let p = parse_header(&lines(
            "# Jane Doe | Backend Engineer\n\nEmail | jane@example.com\nGitHub: github.com/jane\n",
        ));
        assert_eq!(p.name, "Jane Doe");
        assert_eq!(p.role, "Backend Engineer");
        assert_eq!(p.contacts.len(), 2);
        assert_eq!(p.contacts[0].label, "Email");
        assert_eq!(p.contacts[0].value, "jane@example.com");
        assert_eq!(p.contacts[1].label, "GitHub");
        assert_eq!(p.contacts[1].value, "github.com/jane");
    }

    #[test]
    fn missing_pipe_uses_placeholder_role() {
        let p = parse_header(&lines("# Jane Doe"));
        assert_eq!(p.name, "Jane Doe");
        assert_eq!(p.role, DEFAULT_ROLE);
        assert!(p.contacts.is_empty());
    }

    #[test]
    fn pipe_takes_priority_over_colon() {
        let p = parse_header(&lines("# J | R\nBlog | https://j.dev"));
        assert_eq!(p.contacts[0].label, "Blog");
        assert_eq!(p.contacts[0].value, "https://j.dev");
    }

    #[test]
    fn value_keeps_later_pipes() {
        let p = parse_header(&lines("# J | R\nPhone | 010 | 1234"));
        assert_eq!(p.contacts[0].value, "010 | 1234");
    }

    #[test]
    fn bare_line_gets_generic_label() {
        let p = parse_header(&lines("# J | R\nSeoul, Korea"));
        assert_eq!(p.contacts[0].label, GENERIC_CONTACT_LABEL);
        assert_eq!(p.contacts[0].value, "Seoul, Korea");
    }

    #[test]
    fn empty_header() {
        let p = parse_header(&[]);
        assert_eq!(p.name, "");
        assert_eq!(p.role, DEFAULT_ROLE);
    }

    #[test]
    fn separator_is_kept_as_a_generic_contact() {
        let p = parse_header(&lines("# J | R\nEmail | a@b\n\n---\n"));
        assert_eq!(p.contacts.len(), 2);
        assert_eq!(p.contacts[1].label, GENERIC_CONTACT_LABEL);
        assert_eq!(p.contacts[1].value, "---");
    }

    #[test]
    fn leading_separator_is_the_title_line() {
        let p = parse_header(&lines("---\n# J | R\n"));
        assert_eq!(p.name, "---");
        assert_eq!(p.role, DEFAULT_ROLE);
        assert_eq!(p.contacts.len(), 1);
    }
}
