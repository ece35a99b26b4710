//! Restricted markdown → HTML compiler and the self-contained HTML document.
//!
//! The compiler only understands what the renderers emit: headings up to
//! level 4, `- ` bullets, `---` rules and plain paragraphs. It is a single
//! pass with one bit of state (whether a `<ul>` is open).
//!
//! Inline text is escaped *before* links, bold and code spans are expanded,
//! so user content can never smuggle in markup while the tags introduced by
//! the expansion stay intact.

pub mod theme;

use crate::config::VariantConfig;
use crate::text::{RE_BOLD, RE_CODE, RE_LINK};
use once_cell::sync::Lazy;
use regex::Regex;

static RE_RULE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^---+$").unwrap());
static RE_HEADING: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(#{1,4})\s+(.+)$").unwrap());
static RE_BULLET: Lazy<Regex> = Lazy::new(|| Regex::new(r"^- (.+)$").unwrap());

/// Escape `& < > " '`.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escape, then expand links, bold and code spans, in that order.
pub fn apply_inline(input: &str) -> String {
    let text = escape_html(input);
    let text = RE_LINK.replace_all(&text, r#"<a href="$2">$1</a>"#);
    let text = RE_BOLD.replace_all(&text, "<strong>$1</strong>");
    let text = RE_CODE.replace_all(&text, "<code>$1</code>");
    text.into_owned()
}

/// Compile renderer markdown into an HTML fragment, one element per line.
pub fn markdown_to_html(markdown: &str) -> String {
    let mut out: Vec<String> = Vec::new();
    let mut in_list = false;

    let close_list = |out: &mut Vec<String>, in_list: &mut bool| {
        if *in_list {
            out.push("</ul>".to_string());
            *in_list = false;
        }
    };

    for raw in markdown.split('\n') {
        let line = raw.trim();

        if line.is_empty() {
            close_list(&mut out, &mut in_list);
            continue;
        }

        if RE_RULE.is_match(line) {
            close_list(&mut out, &mut in_list);
            out.push("<hr />".to_string());
            continue;
        }

        if let Some(caps) = RE_HEADING.captures(line) {
            close_list(&mut out, &mut in_list);
            let level = caps[1].len();
            out.push(format!("<h{level}>{}</h{level}>", apply_inline(&caps[2])));
            continue;
        }

        if let Some(caps) = RE_BULLET.captures(line) {
            if !in_list {
                out.push("<ul>".to_string());
                in_list = true;
            }
            out.push(format!("<li>{}</li>", apply_inline(&caps[1])));
            continue;
        }

        close_list(&mut out, &mut in_list);
        out.push(format!("<p>{}</p>", apply_inline(line)));
    }

    close_list(&mut out, &mut in_list);
    out.join("\n")
}

/// Wrap compiled `markdown` in a standalone document styled by the
/// variant's theme. `generated_at` is printed in the meta line.
pub fn render_html_document(variant: &VariantConfig, markdown: &str, generated_at: &str) -> String {
    let theme = variant.theme();
    let name = escape_html(&variant.name);
    format!(
        r#"<!doctype html>
<html lang="ko" class="{class}">
<head>
  <meta charset="utf-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1" />
  <title>{name} 이력서</title>
  <style>{css}</style>
</head>
<body>
  <main class="resume">
    <div class="meta">Generated at {generated_at} | Variant: {name}</div>
    {body}
    <div id="ready" style="display:none;"></div>
  </main>
</body>
</html>"#,
        class = theme.css_class(),
        css = theme::stylesheet(theme),
        generated_at = escape_html(generated_at),
        body = markdown_to_html(markdown),
    )
}
