//! Line classifier: maps one source line to a closed structural tag.
//!
//! Precedence, first match wins (on the trimmed line):
//!
//! | Tag | Rule |
//! |-----|------|
//! | `Blank` | empty after trimming |
//! | `Separator` | three or more `-` and nothing else |
//! | `Heading` | `#`×1–4, whitespace, non-empty text |
//! | `Tech` | starts with a backtick |
//! | `Bullet` | starts with `- ` |
//! | `Outcome` | starts with `→` |
//! | `Plain` | anything else |

use crate::text::backtick_tokens;
use once_cell::sync::Lazy;
use regex::Regex;

static RE_HEADING: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(#{1,4})\s+(.+)$").unwrap());
static RE_SEPARATOR: Lazy<Regex> = Lazy::new(|| Regex::new(r"^-{3,}$").unwrap());
static RE_BULLET_MARK: Lazy<Regex> = Lazy::new(|| Regex::new(r"^-+\s*").unwrap());
static RE_OUTCOME_MARK: Lazy<Regex> = Lazy::new(|| Regex::new(r"^→\s*").unwrap());

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    Heading { level: u8, text: String },
    Tech(Vec<String>),
    Bullet(String),
    Outcome(String),
    Separator,
    Blank,
    Plain(String),
}

/// Classify a single line. Surrounding whitespace is ignored.
pub fn classify(raw: &str) -> LineKind {
    let line = raw.trim();

    if line.is_empty() {
        return LineKind::Blank;
    }
    if RE_SEPARATOR.is_match(line) {
        return LineKind::Separator;
    }
    if let Some(caps) = RE_HEADING.captures(line) {
        return LineKind::Heading {
            level: caps[1].len() as u8,
            text: caps[2].trim().to_string(),
        };
    }
    if line.starts_with('`') {
        return LineKind::Tech(backtick_tokens(line));
    }
    if line.starts_with("- ") {
        return LineKind::Bullet(RE_BULLET_MARK.replace(line, "").trim().to_string());
    }
    if RE_OUTCOME_MARK.is_match(line) {
        return LineKind::Outcome(RE_OUTCOME_MARK.replace(line, "").trim().to_string());
    }
    LineKind::Plain(line.to_string())
}
