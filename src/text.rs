//! Small string helpers shared by the parser, renderers and validator.

use once_cell::sync::Lazy;
use regex::Regex;

pub(crate) static RE_LINK: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").unwrap());
pub(crate) static RE_BOLD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*([^*]+)\*\*").unwrap());
pub(crate) static RE_CODE: Lazy<Regex> = Lazy::new(|| Regex::new(r"`([^`]+)`").unwrap());

/// Trim every entry, drop blanks, and drop repeats keeping the first
/// occurrence. Comparison is case-sensitive.
pub fn unique<I, S>(items: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out: Vec<String> = Vec::new();
    for item in items {
        let item = item.as_ref().trim();
        if item.is_empty() || out.iter().any(|seen| seen == item) {
            continue;
        }
        out.push(item.to_string());
    }
    out
}

/// Reduce inline markdown to plain text: `[text](url)` becomes
/// `text (url)`, bold and code markers are dropped.
pub fn strip_inline_markdown(input: &str) -> String {
    let s = RE_LINK.replace_all(input, "$1 ($2)");
    let s = RE_BOLD.replace_all(&s, "$1");
    let s = RE_CODE.replace_all(&s, "$1");
    s.trim().to_string()
}

/// Every backtick-delimited token on the line, trimmed, in order.
pub fn backtick_tokens(line: &str) -> Vec<String> {
    RE_CODE
        .captures_iter(line)
        .map(|caps| caps[1].trim().to_string())
        .collect()
}

/// Character count after removing all whitespace.
pub fn compact_length(input: &str) -> usize {
    input.chars().filter(|c| !c.is_whitespace()).count()
}

/// CRLF and lone CR become LF.
pub fn normalise_line_endings(input: &str) -> String {
    input.replace("\r\n", "\n").replace('\r', "\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unique_trims_and_drops_blank_and_repeats() {
        let got = unique(["Rust", " Rust ", "", "  ", "Tokio", "rust"]);
        assert_eq!(got, vec!["Rust", "Tokio", "rust"]);
    }

    #[test]
    fn strip_inline_markdown_keeps_link_target() {
        assert_eq!(
            strip_inline_markdown("**#12** [fix](https://x.dev/pr/12) in `core`"),
            "#12 fix (https://x.dev/pr/12) in core"
        );
    }

    #[test]
    fn backtick_tokens_extracts_all() {
        assert_eq!(
            backtick_tokens("`NestJS` · ` TypeScript ` · `MySQL`"),
            vec!["NestJS", "TypeScript", "MySQL"]
        );
    }

    #[test]
    fn compact_length_ignores_all_whitespace() {
        assert_eq!(compact_length("a b\n\tc  "), 3);
        assert_eq!(compact_length("처리 시간"), 4);
    }

    #[test]
    fn line_endings() {
        assert_eq!(normalise_line_endings("a\r\nb\rc"), "a\nb\nc");
    }
}
