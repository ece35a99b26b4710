use super::{bullet_list, contact_lines, join_or, keyword_line, pick, skill_lines, Doc};
use crate::config::VariantConfig;
use crate::model::NormalizedModel;

const MAX_PROJECTS: usize = 8;

const ARCHITECTURE_PRINCIPLES: [&str; 5] = [
    "도메인 로직과 인프라를 분리하는 DDD/헥사고날 성향의 구조를 선호합니다.",
    "Adapter/Strategy 패턴으로 외부 연동 포인트를 교체 가능하게 설계합니다.",
    "trackingId/결제ID 기준 멱등성 처리로 중복 실행 리스크를 억제합니다.",
    "재시도(지수 백오프), DLQ, Audit 로그를 조합해 운영 복구 시간을 단축합니다.",
    "정산/동기화 파이프라인은 스케줄러와 검증 로직으로 누락을 사전에 탐지합니다.",
];

const RELIABILITY_STRATEGY: [&str; 3] = [
    "멱등키, Retry(지수 백오프), DLQ, Slack/Webhook 알림으로 실패 전파를 차단합니다.",
    "동기 파이프라인을 메시지 기반 비동기 처리로 전환하여 장애 범위를 축소합니다.",
    "Audit 로그와 정산 검증 스케줄러로 장애 원인과 데이터 불일치를 빠르게 추적합니다.",
];

pub(super) fn render(model: &NormalizedModel, variant: &VariantConfig) -> String {
    let tracks: Vec<String> = model
        .projects
        .iter()
        .take(MAX_PROJECTS)
        .map(|view| {
            let p = &view.project;
            format!(
                "### {}\n- 도메인: {}\n- 아키텍처 포인트: {}\n- 운영 포인트: {}\n- 기술 스택: {}",
                p.title,
                view.company,
                pick(&p.bullets, "비즈니스 로직과 외부 연동 계층 분리"),
                pick(&p.results, "운영 안정성 및 처리 성능 개선"),
                join_or(&p.tech_stack, ", ", "NestJS, TypeScript, MySQL")
            )
        })
        .collect();

    let open_source = bullet_list(model.open_source.iter().map(|entry| {
        format!(
            "{}: {}",
            entry.title,
            join_or(
                &entry.contributions,
                " / ",
                "컨텍스트 압축, 안전 업데이트, 운영 안정성 개선"
            )
        )
    }));

    let education = bullet_list(
        model
            .education
            .iter()
            .map(|edu| format!("{} | {}", edu.title, edu.period)),
    );

    Doc::new(format!("{} | 기술 특화 백엔드 이력서", model.person.name))
        .section("연락처", contact_lines(&model.person))
        .section("기술자 소개", &model.about)
        .section("핵심 키워드", keyword_line(variant))
        .section("핵심 기술 스택 맵", skill_lines(model))
        .section("아키텍처/설계 원칙", bullet_list(ARCHITECTURE_PRINCIPLES))
        .section("트랜잭션/신뢰성 전략", bullet_list(RELIABILITY_STRATEGY))
        .section("기술 프로젝트 트랙", tracks.join("\n\n"))
        .section("오픈소스", open_source)
        .section("학력", education)
        .finish()
}
