use super::{bullet_list, contact_lines, join_or, keyword_line, pick, skill_lines, Doc};
use crate::config::VariantConfig;
use crate::model::NormalizedModel;

const MAX_PROJECTS: usize = 10;

pub(super) fn render(model: &NormalizedModel, variant: &VariantConfig) -> String {
    let entries: Vec<String> = model
        .projects
        .iter()
        .take(MAX_PROJECTS)
        .map(|view| {
            let p = &view.project;
            format!(
                "### {}\n- 소속/도메인: {} ({})\n- 배경: {}\n- 기여: {}\n- 기술: {}\n- 임팩트: {}",
                p.title,
                view.company,
                view.period,
                pick(&p.context, "운영 중 반복되는 병목과 수기 프로세스가 존재"),
                pick(&p.bullets, "도메인 설계, API 구현, 배포까지 엔드투엔드로 수행"),
                join_or(&p.tech_stack, ", ", "NestJS, TypeScript"),
                pick(&p.results, "실패율/수기 대응을 줄이고 운영 속도를 개선")
            )
        })
        .collect();

    let open_source: Vec<String> = model
        .open_source
        .iter()
        .map(|entry| {
            format!(
                "### {}\n- 소개: {}\n- 기여 포인트: {}",
                entry.title,
                pick(&entry.details, "실사용 기반으로 오케스트레이션 플랫폼 개선"),
                join_or(
                    &entry.contributions,
                    " / ",
                    "토큰 예산 최적화, 안전 자동 업데이트"
                )
            )
        })
        .collect();

    let education = bullet_list(
        model
            .education
            .iter()
            .map(|edu| format!("{} | {}", edu.title, edu.period)),
    );

    Doc::new(format!("{} | 프로젝트 포트폴리오형 이력서", model.person.name))
        .section("연락처", contact_lines(&model.person))
        .section("프로필", &model.about)
        .section("핵심 키워드", keyword_line(variant))
        .section("포트폴리오 개요", overview(model))
        .section("주요 프로젝트", entries.join("\n\n"))
        .section("기술 스택", skill_lines(model))
        .section("오픈소스/대외 기여", open_source.join("\n\n"))
        .section("학력", education)
        .finish()
}

fn overview(model: &NormalizedModel) -> String {
    let scope = format!(
        "경력 구성: {}개 회사 · {}개 프로젝트",
        model.experiences.len(),
        model.projects.len()
    );
    bullet_list([
        scope.as_str(),
        "강점: 문제 구조화, 도메인 모델링, 운영 자동화, 비용 최적화",
        "일하는 방식: 문제 정의 → 기술 설계 → 지표 기반 검증",
    ])
}
