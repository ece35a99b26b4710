//! Inline stylesheets: one shared A4 base plus per-theme rules.

use crate::config::Theme;

const BASE: &str = r#"@page {
  size: A4;
  margin: 12mm;
}

* {
  box-sizing: border-box;
}

body {
  margin: 0;
  padding: 10mm;
  color: #111827;
  line-height: 1.5;
  background: #f5f7fa;
  font-family: "Apple SD Gothic Neo", "Noto Sans CJK KR", "Malgun Gothic", sans-serif;
}

a {
  color: inherit;
  text-decoration: none;
  border-bottom: 1px dotted currentColor;
}

.resume {
  background: #ffffff;
  border: 1px solid #d1d5db;
  padding: 9mm 10mm;
}

.meta {
  margin-bottom: 8px;
  font-size: 11px;
  color: #4b5563;
  letter-spacing: 0.2px;
}

h1 {
  margin: 0 0 10px;
  font-size: 26px;
  line-height: 1.25;
}

h2 {
  margin: 16px 0 8px;
  font-size: 16px;
}

h3 {
  margin: 12px 0 6px;
  font-size: 14px;
}

h4 {
  margin: 10px 0 6px;
  font-size: 12px;
}

p {
  margin: 5px 0;
  font-size: 12px;
}

ul {
  margin: 4px 0 8px 0;
  padding-left: 18px;
}

li {
  margin: 3px 0;
  font-size: 12px;
}

code {
  font-size: 11px;
  padding: 1px 5px;
  border-radius: 5px;
  background: #eef2ff;
}

hr {
  border: 0;
  border-top: 1px solid #e5e7eb;
  margin: 10px 0;
}"#;

const MINIMAL: &str = r#".theme-minimal .resume {
  border-top: 8px solid #0f172a;
}

.theme-minimal h2 {
  border-bottom: 1px solid #cbd5e1;
  padding-bottom: 2px;
}"#;

// The theme class sits on <html>, so `.theme-x body` matches.
const IMPACT: &str = r#".theme-impact body {
  background: #f1fdf4;
}

.theme-impact .resume {
  border-left: 8px solid #166534;
}

.theme-impact h2 {
  background: #166534;
  color: #ffffff;
  padding: 4px 8px;
  margin-top: 14px;
}"#;

const TECH: &str = r#".theme-tech body {
  background: #eef2ff;
}

.theme-tech .resume {
  border: 1px solid #3730a3;
  background: #fdfdff;
}

.theme-tech h1,
.theme-tech h2 {
  color: #312e81;
}

.theme-tech code {
  background: #e0e7ff;
}"#;

const PORTFOLIO: &str = r#".theme-portfolio body {
  background: #fff5eb;
}

.theme-portfolio .resume {
  border: 2px solid #9a3412;
}

.theme-portfolio h3 {
  background: #ffedd5;
  padding: 4px 8px;
  border-radius: 6px;
}"#;

const TRADITIONAL: &str = r#".theme-traditional .resume {
  border: 1px solid #6b7280;
}

.theme-traditional h1 {
  text-align: center;
}

.theme-traditional h2 {
  border-bottom: 2px double #6b7280;
  padding-bottom: 2px;
}"#;

fn rules(theme: Theme) -> &'static str {
    match theme {
        Theme::Minimal => MINIMAL,
        Theme::Impact => IMPACT,
        Theme::Tech => TECH,
        Theme::Portfolio => PORTFOLIO,
        Theme::Traditional => TRADITIONAL,
    }
}

/// Full stylesheet for `theme`.
pub fn stylesheet(theme: Theme) -> String {
    format!("{BASE}\n\n{}", rules(theme))
}
