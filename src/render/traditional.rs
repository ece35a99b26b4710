use super::{bullet_list, contact_lines, join_or, keyword_line, pick, skill_lines, Doc};
use crate::config::VariantConfig;
use crate::model::{CompanyExperience, NormalizedModel, Project};

pub(super) fn render(model: &NormalizedModel, variant: &VariantConfig) -> String {
    let experience: Vec<String> = model.experiences.iter().map(company_block).collect();

    let open_source: Vec<String> = model
        .open_source
        .iter()
        .map(|entry| {
            format!(
                "### {}\n- 기술: {}\n- 활동 내용: {}\n- 기여 항목: {}",
                entry.title,
                join_or(&entry.tech_stack, ", ", "TypeScript, Node.js"),
                entry.details.join(" "),
                join_or(&entry.contributions, " / ", "실사용 기반 개선 PR")
            )
        })
        .collect();

    let education = bullet_list(model.education.iter().map(|edu| {
        if edu.details.is_empty() {
            format!("{} | {}", edu.title, edu.period)
        } else {
            format!("{} | {} | {}", edu.title, edu.period, edu.details.join(", "))
        }
    }));

    Doc::new(format!("{} | 백엔드 개발자 ({})", model.person.name, variant.name))
        .section("인적사항", contact_lines(&model.person))
        .section("지원 포지션", format!("- {}", model.person.role))
        .section("자기소개", &model.about)
        .section("핵심 키워드", keyword_line(variant))
        .section("기술역량", skill_lines(model))
        .section("경력사항", experience.join("\n\n"))
        .section("오픈소스 활동", open_source.join("\n\n"))
        .section("학력", education)
        .finish()
}

fn company_block(exp: &CompanyExperience) -> String {
    let projects: Vec<String> = exp.projects.iter().map(|p| project_block(p)).collect();
    format!(
        "### {}\n- 직무/기간: {} | {}\n- 경력 요약: {}\n\n{}",
        exp.company,
        exp.role,
        exp.period,
        pick(&exp.overview, "도메인 시스템 현대화 및 운영 자동화"),
        projects.join("\n\n")
    )
}

fn project_block(project: &Project) -> String {
    format!(
        "#### {}\n- 업무 개요: {}\n- 주요 수행 내용: {}\n- 사용 기술: {}\n- 성과: {}",
        project.title,
        pick(&project.context, "운영 구조 개선이 필요한 과제를 담당"),
        pick(&project.bullets, "요구사항 분석, 도메인 설계, API 구현, 배포"),
        join_or(&project.tech_stack, ", ", "NestJS, TypeScript"),
        join_or(&project.results, " / ", "운영 효율화 및 안정성 강화")
    )
}
