use super::{bullet_list, contact_lines, join_or, keyword_line, pick, skill_lines, Doc};
use crate::config::VariantConfig;
use crate::model::{CompanyExperience, NormalizedModel, Project};
use crate::outcomes::top_outcomes;

const MAX_OUTCOMES: usize = 10;

pub(super) fn render(model: &NormalizedModel, variant: &VariantConfig) -> String {
    let outcomes = top_outcomes(&model.projects, MAX_OUTCOMES);

    let experience: Vec<String> = model.experiences.iter().map(company_block).collect();

    let open_source: Vec<String> = model
        .open_source
        .iter()
        .map(|entry| {
            format!(
                "### {}\n- 주요 기여: {}\n- 참고: {}",
                entry.title,
                join_or(&entry.contributions, " / ", "실사용 기반 개선 제안"),
                entry.details.join(" ")
            )
        })
        .collect();

    let education = bullet_list(model.education.iter().map(|edu| {
        if edu.details.is_empty() {
            format!("{} ({})", edu.title, edu.period)
        } else {
            format!("{} ({}): {}", edu.title, edu.period, edu.details.join(", "))
        }
    }));

    Doc::new(format!("{} | 성과 중심 백엔드 이력서", model.person.name))
        .section("연락처", contact_lines(&model.person))
        .section("요약", &model.about)
        .section("핵심 키워드", keyword_line(variant))
        .section("성과 지표 하이라이트", bullet_list(&outcomes))
        .section("경력 상세 (문제-해결-성과)", experience.join("\n\n"))
        .section("기술 역량", skill_lines(model))
        .section("오픈소스 기여", open_source.join("\n\n"))
        .section("학력", education)
        .finish()
}

fn company_block(exp: &CompanyExperience) -> String {
    let projects: Vec<String> = exp.projects.iter().map(|p| project_block(p)).collect();
    format!(
        "### {} | {} | {}\n- 조직/도메인 맥락: {}\n\n{}",
        exp.company,
        exp.role,
        exp.period,
        pick(&exp.overview, "서비스 도메인 운영 안정화와 자동화를 담당"),
        projects.join("\n\n")
    )
}

fn project_block(project: &Project) -> String {
    format!(
        "#### {}\n- 문제: {}\n- 해결: {}\n- 성과: {}\n- 사용 기술: {}",
        project.title,
        pick(&project.context, "운영 과정에서 반복되는 병목/장애가 발생"),
        pick(
            &project.bullets,
            "도메인 모델링과 인터페이스 분리로 안정적인 처리 구조를 구현"
        ),
        pick(&project.results, "장애 대응 시간 단축 및 운영 자동화 달성"),
        join_or(&project.tech_stack, ", ", "NestJS, TypeScript")
    )
}
