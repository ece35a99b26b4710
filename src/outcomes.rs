//! Outcome selector: a bounded, deduplicated list of headline achievements.
//!
//! Every project's `results` are taken in document order. When that yields
//! fewer than `max` entries, each project's first bullet is appended as a
//! backfill. Backfill may repeat an outcome already collected, so the list
//! is deduplicated (case-sensitive, first occurrence wins) before it is cut
//! to `max`. The cut happens after deduplication, which makes the result
//! depend on project order.

use crate::model::ProjectView;
use crate::text::unique;

pub fn top_outcomes(projects: &[ProjectView], max: usize) -> Vec<String> {
    let mut outcomes: Vec<&str> = projects
        .iter()
        .flat_map(|view| view.project.results.iter().map(String::as_str))
        .collect();

    if outcomes.len() < max {
        outcomes.extend(
            projects
                .iter()
                .filter_map(|view| view.project.bullets.first().map(String::as_str)),
        );
    }

    let mut outcomes = unique(outcomes);
    outcomes.truncate(max);
    outcomes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Project;
    use std::sync::Arc;

    fn view(title: &str, bullets: &[&str], results: &[&str]) -> ProjectView {
        ProjectView {
            company: "Acme".into(),
            role: "Dev".into(),
            period: "2020".into(),
            project: Arc::new(Project {
                title: title.into(),
                tech_stack: vec![],
                context: vec![],
                bullets: bullets.iter().map(|s| s.to_string()).collect(),
                results: results.iter().map(|s| s.to_string()).collect(),
            }),
        }
    }

    #[test]
    fn results_in_document_order() {
        let projects = vec![view("a", &[], &["r1", "r2"]), view("b", &[], &["r3"])];
        assert_eq!(top_outcomes(&projects, 3), vec!["r1", "r2", "r3"]);
    }

    #[test]
    fn enough_results_skip_backfill() {
        let projects = vec![view("a", &["b1"], &["r1", "r2"])];
        assert_eq!(top_outcomes(&projects, 2), vec!["r1", "r2"]);
    }

    #[test]
    fn sparse_results_backfill_with_first_bullets() {
        let projects = vec![
            view("a", &["a-first", "a-second"], &["r1"]),
            view("b", &["b-first"], &[]),
            view("c", &[], &[]),
        ];
        assert_eq!(top_outcomes(&projects, 5), vec!["r1", "a-first", "b-first"]);
    }

    #[test]
    fn backfill_duplicates_are_removed_before_truncation() {
        let projects = vec![
            view("a", &["same"], &["same"]),
            view("b", &["same"], &[]),
            view("c", &["other"], &[]),
        ];
        assert_eq!(top_outcomes(&projects, 2), vec!["same", "other"]);
    }

    #[test]
    fn dedup_is_case_sensitive() {
        let projects = vec![view("a", &[], &["Cut cost", "cut cost"])];
        assert_eq!(top_outcomes(&projects, 5), vec!["Cut cost", "cut cost"]);
    }

    #[test]
    fn truncates_to_max() {
        let projects = vec![view("a", &[], &["1", "2", "3", "4"])];
        assert_eq!(top_outcomes(&projects, 2), vec!["1", "2"]);
        assert!(top_outcomes(&projects, 0).is_empty());
    }

    #[test]
    fn order_of_projects_changes_selection() {
        let forward = vec![view("a", &["x"], &[]), view("b", &["y"], &[])];
        let backward = vec![view("b", &["y"], &[]), view("a", &["x"], &[])];
        assert_eq!(top_outcomes(&forward, 1), vec!["x"]);
        assert_eq!(top_outcomes(&backward, 1), vec!["y"]);
    }
}
