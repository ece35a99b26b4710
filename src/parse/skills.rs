//! Skills extractor: `**Category** · item, item, …` lines.
//!
//! Lines of any other shape are skipped without complaint.

use crate::model::SkillCategory;
use once_cell::sync::Lazy;
use regex::Regex;

static RE_SKILL: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\*\*(.+?)\*\*\s*·\s*(.+)$").unwrap());

pub fn parse_skills(lines: &[String]) -> Vec<SkillCategory> {
    lines
        .iter()
        .filter_map(|line| RE_SKILL.captures(line.trim()))
        .map(|caps| SkillCategory {
            category: caps[1].trim().to_string(),
            items: caps[2]
                .split(',')
                .map(str::trim)
                .filter(|item| !item.is_empty())
                .map(String::from)
                .collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_categories_and_skips_noise() {
        let lines = vec![
            "**Backend** · NestJS, TypeScript, , Node.js".to_string(),
            "some prose about skills".to_string(),
            "**Infra**·AWS,Docker".to_string(),
        ];
        let skills = parse_skills(&lines);
        assert_eq!(skills.len(), 2);
        assert_eq!(skills[0].category, "Backend");
        assert_eq!(skills[0].items, vec!["NestJS", "TypeScript", "Node.js"]);
        assert_eq!(skills[1].category, "Infra");
        assert_eq!(skills[1].items, vec!["AWS", "Docker"]);
    }

    #[test]
    fn no_matching_lines() {
        assert!(parse_skills(&["- Rust".to_string()]).is_empty());
    }
}
