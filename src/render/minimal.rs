use super::{bullet_list, contact_lines, join_or, keyword_line, pick, skill_lines, Doc};
use crate::config::VariantConfig;
use crate::model::NormalizedModel;
use crate::outcomes::top_outcomes;

const MAX_OUTCOMES: usize = 8;
const MAX_PROJECTS: usize = 5;

pub(super) fn render(model: &NormalizedModel, variant: &VariantConfig) -> String {
    let outcomes = top_outcomes(&model.projects, MAX_OUTCOMES);

    let companies: Vec<String> = model
        .experiences
        .iter()
        .map(|exp| {
            let highlight_projects = exp
                .projects
                .iter()
                .take(2)
                .map(|p| p.title.as_str())
                .collect::<Vec<_>>()
                .join(", ");
            let highlight_projects = if highlight_projects.is_empty() {
                "핵심 업무 자동화".to_string()
            } else {
                highlight_projects
            };
            let result = pick(
                exp.projects.iter().flat_map(|p| p.results.iter()),
                exp.highlights
                    .first()
                    .map(String::as_str)
                    .unwrap_or("운영 자동화 및 안정화 주도"),
            );
            format!(
                "### {} | {} | {}\n- {}\n- 핵심 프로젝트: {}\n- 대표 성과: {}",
                exp.company,
                exp.role,
                exp.period,
                pick(&exp.overview, "도메인 요구를 NestJS 기반 시스템으로 설계 및 운영"),
                highlight_projects,
                result
            )
        })
        .collect();

    let highlights: Vec<String> = model
        .projects
        .iter()
        .take(MAX_PROJECTS)
        .map(|view| {
            let p = &view.project;
            format!(
                "### {} ({})\n- 상황: {}\n- 기술: {}\n- 성과: {}",
                p.title,
                view.company,
                pick(&p.context, "운영 병목을 해결하기 위한 백엔드 구조 개선"),
                join_or(&p.tech_stack, ", ", "NestJS, TypeScript"),
                pick(&p.results, "운영 안정성과 처리 효율을 개선")
            )
        })
        .collect();

    let open_source = bullet_list(model.open_source.iter().map(|entry| {
        let fallback = entry
            .details
            .first()
            .map(String::as_str)
            .unwrap_or("실사용 관점의 개선 PR 기여");
        format!("{}: {}", entry.title, pick(&entry.contributions, fallback))
    }));

    let education = bullet_list(
        model
            .education
            .iter()
            .map(|edu| format!("{} | {}", edu.title, edu.period)),
    );

    Doc::new(format!(
        "{} | {} ({})",
        model.person.name, model.person.role, variant.name
    ))
    .section("연락처", contact_lines(&model.person))
    .section("한 줄 소개", &model.about)
    .section("핵심 키워드", keyword_line(variant))
    .section("대표 성과", bullet_list(&outcomes))
    .section("핵심 기술 스택", skill_lines(model))
    .section("경력 요약", companies.join("\n\n"))
    .section("프로젝트 하이라이트", highlights.join("\n\n"))
    .section("오픈소스", open_source)
    .section("학력", education)
    .finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::default_variants;
    use crate::render::fixtures::{full_model, sparse_model};

    #[test]
    fn company_summary_uses_first_result_and_two_projects() {
        let md = render(&full_model(), &default_variants()[0]);
        assert!(md.starts_with("# Jane Doe | Backend Engineer (미니멀형)\n\n## 연락처\n"));
        assert!(md.contains(
            "### Acme | Backend Engineer | 2021 - 2023\n\
             - Travel platform backend.\n\
             - 핵심 프로젝트: Settlement Batch, Partner Sync\n\
             - 대표 성과: 처리 시간 50% 단축"
        ));
    }

    #[test]
    fn outcomes_backfill_from_first_bullets() {
        let md = render(&full_model(), &default_variants()[0]);
        assert!(md.contains(
            "## 대표 성과\n- 처리 시간 50% 단축\n- Rebuilt the batch around idempotent jobs\n- Moved sync to a queue\n\n"
        ));
    }

    #[test]
    fn empty_company_gets_fallback_lines() {
        let md = render(&sparse_model(), &default_variants()[0]);
        assert!(md.contains("- 도메인 요구를 NestJS 기반 시스템으로 설계 및 운영"));
        assert!(md.contains("- 대표 성과: 운영 자동화 및 안정화 주도"));
        assert!(md.contains("- 기술: NestJS, TypeScript"));
        assert!(md.contains("- tool: 실사용 관점의 개선 PR 기여"));
    }

    #[test]
    fn open_source_prefers_contributions_then_details() {
        let md = render(&full_model(), &default_variants()[0]);
        assert!(md.contains("- agent-orchestrator: #12 context compression"));
    }
}
