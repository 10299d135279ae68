//! 분석 → 공고 생성 플로우 단위의 매퍼・저장소 통합 테스트

use cleanup_ai_common::{
    apply_publish_outcome, build_create_request, map_analysis, map_recruitment,
    update_request_from_view, Error, LabelRegistry, MemoryStorage, OwnershipStore,
};
use cleanup_ai_common::types::{AnalysisResponse, RecruitmentResponse};

const BASE: &str = "http://localhost:8000";

/// 분석 ID 1 + {2026-02-01, Test Pier} → 생성된 공고의 본문에 미치환
/// 토큰이 없고, 도구・인원이 분석의 권장 자원과 일치한다
#[test]
fn test_create_from_analysis_flow() {
    let registry = LabelRegistry::default();

    let analysis: AnalysisResponse = serde_json::from_str(
        r#"{
            "analysis_id": 1,
            "image_url": "/uploads/site_1.jpg",
            "location": "광안리",
            "trash_summary": {"plastic": 8, "can": 2},
            "recommended_resources": {
                "people": 3,
                "tools": {"tongs": 3, "bags": 5},
                "estimated_time_min": 45
            },
            "created_at": "2026-01-30T08:00:00"
        }"#,
    )
    .unwrap();
    let analysis_view = map_analysis(BASE, &registry, &analysis);
    assert_eq!(analysis_view.total_trash, 10);

    let request = build_create_request("2026-02-01", "Test Pier", None);
    assert_eq!(request.additional_note, None);

    // 백엔드가 권장 자원을 이어받아 공고를 만들어 돌려준 상황
    let created: RecruitmentResponse = serde_json::from_str(
        r#"{
            "recruitment_id": 11,
            "image_name": "site_1.jpg",
            "title": "광안리 정화 활동 모집",
            "content": "[activity_date] [meeting_place] 집결. [location] 일대 정화 활동입니다.",
            "required_people": 3,
            "recommended_tools": {"tongs": 3, "bags": 5},
            "activity_date": "2026-02-01",
            "meeting_place": "Test Pier",
            "analysis_id": 1,
            "status": "created",
            "created_at": "2026-01-30T08:05:00"
        }"#,
    )
    .unwrap();
    let view = map_recruitment(BASE, &registry, &created);

    assert!(!view.content.contains('['), "미치환 토큰: {}", view.content);
    assert!(view.content.contains("Test Pier"));
    assert_eq!(view.required_people, analysis_view.people);
    let total_tools: u32 = view.tools.iter().map(|t| t.count).sum();
    let recommended: u32 = analysis.recommended_resources.tools.values().sum();
    assert_eq!(total_tools, recommended);
    assert_eq!(view.analysis_id, Some(1));
}

/// 생성 직후 공고는 아직 게시 전이므로 모집 종료로 보이고,
/// 게시 후 재조회하면 모집 중으로 바뀐다
#[test]
fn test_status_flips_after_publish() {
    let registry = LabelRegistry::default();
    let mut resp = RecruitmentResponse {
        recruitment_id: 11,
        status: "created".into(),
        ..Default::default()
    };
    assert!(!map_recruitment(BASE, &registry, &resp).status.is_recruiting());

    resp.status = "published".into();
    resp.published_at = Some("2026-01-30T08:06:00".into());
    assert!(map_recruitment(BASE, &registry, &resp).status.is_recruiting());
}

/// 게시 호출이 실패해도 생성된 공고는 되돌려지지 않고 그대로 조회된다
#[test]
fn test_failed_publish_does_not_roll_back_creation() {
    let registry = LabelRegistry::default();
    let created: RecruitmentResponse = serde_json::from_str(
        r#"{
            "recruitment_id": 11,
            "image_name": "site_1.jpg",
            "title": "광안리 정화 활동 모집",
            "content": "[activity_date] [meeting_place] 집결.",
            "required_people": 3,
            "activity_date": "2026-02-01",
            "meeting_place": "Test Pier",
            "status": "created",
            "created_at": "2026-01-30T08:05:00"
        }"#,
    )
    .unwrap();
    let created_view = map_recruitment(BASE, &registry, &created);

    let publish_err = Error::from_status("공고 게시", 503, None);
    let (view, err) = apply_publish_outcome(created_view.clone(), Err(publish_err));

    // 공고는 생성된 그대로 남는다
    assert_eq!(view, created_view);
    assert_eq!(view.id, 11);
    assert_eq!(view.title, "광안리 정화 활동 모집");
    assert!(err.is_some());

    // 같은 공고를 상세 응답으로 다시 받으면 여전히 조회된다
    let refetched = map_recruitment(BASE, &registry, &created);
    assert_eq!(refetched.id, view.id);
}

/// 존재하지 않는 ID 조회는 NotFound로 정규화된다
#[test]
fn test_missing_analysis_is_not_found() {
    let err = Error::from_status("분석 조회", 404, None);
    assert!(matches!(err, Error::NotFound(_)));
    let display = format!("{}", err);
    assert!(display.contains("404"));

    let err = Error::from_status("분석 조회", 404, Some("Analysis 99999 not found".into()));
    assert_eq!(format!("{}", err), "Analysis 99999 not found");
}

/// 뷰 → 수정 요청 왕복에서 편집 가능 필드가 그대로 보존된다
#[test]
fn test_edit_roundtrip() {
    let registry = LabelRegistry::default();
    let resp: RecruitmentResponse = serde_json::from_str(
        r#"{
            "recruitment_id": 4,
            "image_name": "x.jpg",
            "title": "제목",
            "content": "본문",
            "required_people": 5,
            "recommended_tools": {"gloves": 5},
            "activity_date": "2026-03-01",
            "meeting_place": "해운대",
            "additional_note": "장갑 지참",
            "status": "published",
            "created_at": "2026-02-20T12:00:00"
        }"#,
    )
    .unwrap();

    let mut view = map_recruitment(BASE, &registry, &resp);
    view.meeting_place = "송정".into();
    let req = update_request_from_view(&view);

    assert_eq!(req.title.as_deref(), Some("제목"));
    assert_eq!(req.content.as_deref(), Some("본문"));
    assert_eq!(req.required_people, Some(5));
    assert_eq!(req.activity_date.as_deref(), Some("2026-03-01"));
    assert_eq!(req.meeting_place.as_deref(), Some("송정"));
    assert_eq!(req.additional_note.as_deref(), Some("장갑 지참"));
}

/// 공고 생성・참여・분석이 각 목록에 한 번씩만 기록된다
#[test]
fn test_ownership_bookkeeping() {
    let store = OwnershipStore::new(MemoryStorage::new());

    store.add_analysis(1);
    store.add_recruitment(11);
    store.add_recruitment(11);
    store.add_participation(12);

    assert_eq!(store.my_analyses(), vec![1]);
    assert_eq!(store.my_recruitments(), vec![11]);
    assert!(store.is_my_recruitment(11));
    assert!(store.is_my_participation(12));
    assert!(!store.is_my_participation(11));
}
