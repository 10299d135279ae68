//! 응답・요청 매퍼
//!
//! 백엔드 와이어 형태 ↔ UI 뷰 모델의 양방향 변환. 전부 순수 함수이며
//! 네트워크・저장소 접근이 없다. 같은 입력은 항상 같은 출력을 낸다.

use crate::error::Error;
use crate::labels::LabelRegistry;
use crate::types::{
    AnalysisHistoryResponse, AnalysisResponse, CreateRecruitmentRequest, PublishResponse,
    RecruitmentListItem, RecruitmentResponse, UpdateRecruitmentRequest,
};
use crate::view::{
    AnalysisHistoryView, AnalysisView, LabeledCount, RecruitmentStatus, RecruitmentSummaryView,
    RecruitmentView,
};
use std::collections::BTreeMap;

/// 위치 정보가 없을 때의 표시 문구
pub const NO_LOCATION: &str = "위치 정보 없음";
/// 목록에서 장소가 없을 때의 표시 문구
pub const NO_MEETING_PLACE: &str = "위치 미정";

/// 상대 경로・파일명을 절대 이미지 URL로 해석한다.
///
/// - 이미 절대 URL이면 그대로
/// - "/uploads/x.jpg" 같은 상대 경로면 API 베이스를 앞에 붙인다
/// - 파일명만 오면 "/uploads/" 아래로 해석한다
pub fn resolve_image_url(base: &str, path_or_name: &str) -> String {
    let base = base.trim_end_matches('/');
    if path_or_name.is_empty() {
        return String::new();
    }
    if path_or_name.starts_with("http://") || path_or_name.starts_with("https://") {
        return path_or_name.to_string();
    }
    if path_or_name.starts_with('/') {
        return format!("{}{}", base, path_or_name);
    }
    format!("{}/uploads/{}", base, path_or_name)
}

/// 쓰레기・도구 맵 값의 총합
pub fn total_count(map: &BTreeMap<String, u32>) -> u32 {
    map.values().sum()
}

/// 공고 응답에는 소요 시간이 없어 도구 총량에서 근사한다.
/// 도구당 8분, 최소 30분, 최대 120분.
pub fn estimated_minutes(tool_total: u32) -> u32 {
    (tool_total * 8).clamp(30, 120)
}

fn labeled<F>(map: &BTreeMap<String, u32>, label_of: F) -> Vec<LabeledCount>
where
    F: Fn(&str) -> String,
{
    map.iter()
        .map(|(key, count)| LabeledCount {
            label: label_of(key),
            count: *count,
        })
        .collect()
}

/// 본문의 플레이스홀더 토큰을 실제 값으로 치환한다.
///
/// 렌더 시점이 아니라 매핑 시점에 치환하므로 모든 소비자가
/// 완성된 본문을 본다.
fn resolve_content(content: &str, activity_date: &str, meeting_place: &str) -> String {
    let date = if activity_date.is_empty() { "날짜" } else { activity_date };
    let place = if meeting_place.is_empty() { "장소" } else { meeting_place };
    content
        .replace("[location]", place)
        .replace("[activity_date]", date)
        .replace("[meeting_place]", place)
}

/// 분석 상세 응답 → 뷰
pub fn map_analysis(base: &str, registry: &LabelRegistry, resp: &AnalysisResponse) -> AnalysisView {
    // POST 응답은 image_name, GET 응답은 image_url. 있는 쪽을 쓴다
    let image = if resp.image_url.is_empty() {
        &resp.image_name
    } else {
        &resp.image_url
    };

    AnalysisView {
        id: resp.analysis_id,
        image_url: resolve_image_url(base, image),
        location: resp
            .location
            .clone()
            .filter(|l| !l.is_empty())
            .unwrap_or_else(|| NO_LOCATION.to_string()),
        area_type: resp.area_type.clone(),
        total_trash: total_count(&resp.trash_summary),
        trash_items: labeled(&resp.trash_summary, |k| registry.trash_label(k)),
        people: resp.recommended_resources.people,
        tools: labeled(&resp.recommended_resources.tools, |k| registry.tool_label(k)),
        estimated_time_min: resp.recommended_resources.estimated_time_min,
        created_at: resp.created_at.clone(),
    }
}

/// 분석 이력 응답 → 뷰 목록
pub fn map_history(
    base: &str,
    registry: &LabelRegistry,
    resp: &AnalysisHistoryResponse,
) -> Vec<AnalysisHistoryView> {
    resp.histories
        .iter()
        .map(|item| AnalysisHistoryView {
            id: item.analysis_id,
            image_url: resolve_image_url(base, &item.image_url),
            location: item
                .location
                .clone()
                .filter(|l| !l.is_empty())
                .unwrap_or_else(|| NO_LOCATION.to_string()),
            total_trash: total_count(&item.trash_summary),
            trash_labels: item
                .trash_summary
                .keys()
                .map(|k| registry.trash_label(k))
                .collect(),
            created_at: item.created_at.clone(),
        })
        .collect()
}

/// 공고 상세・생성・수정 응답 → 뷰
pub fn map_recruitment(
    base: &str,
    registry: &LabelRegistry,
    resp: &RecruitmentResponse,
) -> RecruitmentView {
    RecruitmentView {
        id: resp.recruitment_id,
        image_url: resolve_image_url(base, &resp.image_name),
        title: resp.title.clone(),
        content: resolve_content(&resp.content, &resp.activity_date, &resp.meeting_place),
        required_people: resp.required_people,
        current_applicants: 0,
        tools: labeled(&resp.recommended_tools, |k| registry.tool_label(k)),
        activity_date: resp.activity_date.clone(),
        meeting_place: resp.meeting_place.clone(),
        additional_note: resp.additional_note.clone().filter(|n| !n.is_empty()),
        analysis_id: resp.analysis_id,
        status: RecruitmentStatus::from_publish_state(&resp.status),
        created_at: resp.created_at.clone(),
        published_at: resp.published_at.clone(),
    }
}

/// 공고 목록 항목 → 카드 뷰
pub fn map_recruitment_summary(base: &str, item: &RecruitmentListItem) -> RecruitmentSummaryView {
    RecruitmentSummaryView {
        id: item.id,
        image_url: resolve_image_url(base, &item.image_name),
        title: item.title.clone(),
        meeting_place: item
            .location
            .clone()
            .filter(|l| !l.is_empty())
            .unwrap_or_else(|| NO_MEETING_PLACE.to_string()),
        required_people: item.required_people,
        current_applicants: 0,
        activity_date: item.activity_date.clone(),
        status: RecruitmentStatus::from_publish_state(&item.status),
    }
}

/// 생성 직후의 게시 결과를 뷰에 반영한다.
///
/// 게시 실패는 이미 생성된 공고를 되돌리지 않는다. 뷰는 항상 그대로
/// 돌려주고, 에러는 호출 측이 로깅만 할 수 있게 따로 떼어 낸다.
/// 게시에 성공했을 때만 상태를 갱신한다.
pub fn apply_publish_outcome(
    mut view: RecruitmentView,
    outcome: std::result::Result<PublishResponse, Error>,
) -> (RecruitmentView, Option<Error>) {
    match outcome {
        Ok(resp) => {
            view.status = RecruitmentStatus::from_publish_state(&resp.status);
            (view, None)
        }
        Err(err) => (view, Some(err)),
    }
}

/// 공고 생성 요청 빌드. 메모는 트림 후 비어 있으면 보내지 않는다.
pub fn build_create_request(
    activity_date: &str,
    meeting_place: &str,
    additional_note: Option<&str>,
) -> CreateRecruitmentRequest {
    CreateRecruitmentRequest {
        activity_date: activity_date.trim().to_string(),
        meeting_place: meeting_place.trim().to_string(),
        additional_note: additional_note
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .map(str::to_string),
    }
}

/// 뷰 → 수정 요청. 사용자가 편집 가능한 필드만 담는다.
pub fn update_request_from_view(view: &RecruitmentView) -> UpdateRecruitmentRequest {
    UpdateRecruitmentRequest {
        title: Some(view.title.clone()),
        content: Some(view.content.clone()),
        required_people: Some(view.required_people),
        activity_date: Some(view.activity_date.clone()),
        meeting_place: Some(view.meeting_place.clone()),
        additional_note: view.additional_note.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RecommendedResources;

    const BASE: &str = "http://localhost:8000";

    fn summary(pairs: &[(&str, u32)]) -> BTreeMap<String, u32> {
        pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    // =============================================
    // 이미지 URL 해석
    // =============================================

    #[test]
    fn test_resolve_image_url_relative_path() {
        assert_eq!(
            resolve_image_url(BASE, "/uploads/a.jpg"),
            "http://localhost:8000/uploads/a.jpg"
        );
    }

    #[test]
    fn test_resolve_image_url_bare_name() {
        assert_eq!(
            resolve_image_url(BASE, "a.jpg"),
            "http://localhost:8000/uploads/a.jpg"
        );
    }

    #[test]
    fn test_resolve_image_url_absolute_passthrough() {
        assert_eq!(
            resolve_image_url(BASE, "https://cdn.example.com/a.jpg"),
            "https://cdn.example.com/a.jpg"
        );
    }

    #[test]
    fn test_resolve_image_url_trailing_slash_base() {
        assert_eq!(
            resolve_image_url("http://localhost:8000/", "/uploads/a.jpg"),
            "http://localhost:8000/uploads/a.jpg"
        );
    }

    #[test]
    fn test_resolve_image_url_empty() {
        assert_eq!(resolve_image_url(BASE, ""), "");
    }

    // =============================================
    // 총 개수
    // =============================================

    #[test]
    fn test_total_count_multi() {
        assert_eq!(total_count(&summary(&[("plastic", 12), ("can", 3), ("glass", 0)])), 15);
    }

    #[test]
    fn test_total_count_single_entry() {
        assert_eq!(total_count(&summary(&[("net", 4)])), 4);
    }

    #[test]
    fn test_total_count_empty() {
        assert_eq!(total_count(&BTreeMap::new()), 0);
    }

    #[test]
    fn test_estimated_minutes_clamped() {
        assert_eq!(estimated_minutes(0), 30);
        assert_eq!(estimated_minutes(3), 30);
        assert_eq!(estimated_minutes(10), 80);
        assert_eq!(estimated_minutes(50), 120);
    }

    // =============================================
    // 분석 매핑
    // =============================================

    fn analysis_fixture() -> AnalysisResponse {
        AnalysisResponse {
            analysis_id: 7,
            image_url: "/uploads/beach_001.jpg".into(),
            location: Some("광안리 해수욕장".into()),
            trash_summary: summary(&[("plastic", 12), ("can", 3)]),
            recommended_resources: RecommendedResources {
                people: 4,
                tools: summary(&[("tongs", 4), ("bags", 6)]),
                estimated_time_min: 60,
            },
            created_at: "2026-01-15T09:30:00".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_map_analysis() {
        let registry = LabelRegistry::default();
        let view = map_analysis(BASE, &registry, &analysis_fixture());

        assert_eq!(view.id, 7);
        assert_eq!(view.image_url, "http://localhost:8000/uploads/beach_001.jpg");
        assert_eq!(view.location, "광안리 해수욕장");
        assert_eq!(view.total_trash, 15);
        // BTreeMap이므로 키 정렬 순서
        assert_eq!(
            view.trash_items,
            vec![
                LabeledCount { label: "캔".into(), count: 3 },
                LabeledCount { label: "플라스틱".into(), count: 12 },
            ]
        );
        assert_eq!(view.people, 4);
        assert_eq!(view.estimated_time_min, 60);
    }

    #[test]
    fn test_map_analysis_prefers_image_url_over_name() {
        let registry = LabelRegistry::default();
        let mut resp = analysis_fixture();
        resp.image_name = "ignored.jpg".into();
        let view = map_analysis(BASE, &registry, &resp);
        assert_eq!(view.image_url, "http://localhost:8000/uploads/beach_001.jpg");

        // POST 응답처럼 image_name만 있을 때
        resp.image_url.clear();
        let view = map_analysis(BASE, &registry, &resp);
        assert_eq!(view.image_url, "http://localhost:8000/uploads/ignored.jpg");
    }

    #[test]
    fn test_map_analysis_missing_location() {
        let registry = LabelRegistry::default();
        let mut resp = analysis_fixture();
        resp.location = None;
        assert_eq!(map_analysis(BASE, &registry, &resp).location, NO_LOCATION);
    }

    #[test]
    fn test_map_analysis_unknown_keys_render_raw() {
        let registry = LabelRegistry::default();
        let mut resp = analysis_fixture();
        resp.trash_summary = summary(&[("styrofoam", 2)]);
        resp.recommended_resources.tools = summary(&[("rake", 1)]);

        let view = map_analysis(BASE, &registry, &resp);
        assert_eq!(view.trash_items[0].label, "styrofoam");
        assert_eq!(view.tools[0].label, "rake");
        assert_eq!(view.total_trash, 2);
    }

    #[test]
    fn test_map_history() {
        let registry = LabelRegistry::default();
        let resp: AnalysisHistoryResponse = serde_json::from_str(
            r#"{"histories": [
                {"analysis_id": 1, "image_url": "/uploads/a.jpg",
                 "trash_summary": {"plastic": 2}, "created_at": "2026-01-01T00:00:00"},
                {"analysis_id": 2, "image_url": "/uploads/b.jpg", "location": "을왕리",
                 "trash_summary": {}, "created_at": "2026-01-02T00:00:00"}
            ]}"#,
        )
        .unwrap();

        let views = map_history(BASE, &registry, &resp);
        assert_eq!(views.len(), 2);
        assert_eq!(views[0].location, NO_LOCATION);
        assert_eq!(views[0].total_trash, 2);
        assert_eq!(views[0].trash_labels, vec!["플라스틱"]);
        assert_eq!(views[1].location, "을왕리");
        assert_eq!(views[1].total_trash, 0);
    }

    // =============================================
    // 공고 매핑
    // =============================================

    fn recruitment_fixture() -> RecruitmentResponse {
        RecruitmentResponse {
            recruitment_id: 3,
            image_name: "beach_001.jpg".into(),
            title: "광안리 정화 활동".into(),
            content: "[activity_date]에 [meeting_place]에서 만나요. [location] 주변을 치웁니다."
                .into(),
            required_people: 4,
            recommended_tools: summary(&[("tongs", 4), ("bags", 6)]),
            activity_date: "2026-02-01".into(),
            meeting_place: "Test Pier".into(),
            analysis_id: Some(1),
            status: "published".into(),
            created_at: "2026-01-15T10:00:00".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_map_recruitment_resolves_placeholders() {
        let registry = LabelRegistry::default();
        let view = map_recruitment(BASE, &registry, &recruitment_fixture());

        assert!(!view.content.contains('['), "미치환 토큰 잔존: {}", view.content);
        assert!(view.content.contains("2026-02-01"));
        assert!(view.content.contains("Test Pier"));
    }

    #[test]
    fn test_map_recruitment_placeholder_fallbacks() {
        let registry = LabelRegistry::default();
        let mut resp = recruitment_fixture();
        resp.activity_date.clear();
        resp.meeting_place.clear();

        let view = map_recruitment(BASE, &registry, &resp);
        assert!(view.content.contains("날짜"));
        assert!(view.content.contains("장소"));
        assert!(!view.content.contains('['));
    }

    #[test]
    fn test_map_recruitment_status_and_tools() {
        let registry = LabelRegistry::default();
        let view = map_recruitment(BASE, &registry, &recruitment_fixture());

        assert_eq!(view.status, RecruitmentStatus::Recruiting);
        assert_eq!(view.required_people, 4);
        assert_eq!(view.current_applicants, 0);
        assert_eq!(
            view.tools,
            vec![
                LabeledCount { label: "마대".into(), count: 6 },
                LabeledCount { label: "집게".into(), count: 4 },
            ]
        );
        assert_eq!(view.analysis_id, Some(1));

        let mut resp = recruitment_fixture();
        resp.status = "created".into();
        assert_eq!(
            map_recruitment(BASE, &registry, &resp).status,
            RecruitmentStatus::Completed
        );
    }

    #[test]
    fn test_map_recruitment_summary() {
        let item: RecruitmentListItem = serde_json::from_str(
            r#"{"id": 9, "image_name": "b.jpg", "title": "해운대 정화",
                "required_people": 6, "activity_date": "2026-03-01",
                "status": "published", "created_at": "2026-02-20T12:00:00"}"#,
        )
        .unwrap();

        let view = map_recruitment_summary(BASE, &item);
        assert_eq!(view.id, 9);
        assert_eq!(view.image_url, "http://localhost:8000/uploads/b.jpg");
        assert_eq!(view.meeting_place, NO_MEETING_PLACE);
        assert_eq!(view.status, RecruitmentStatus::Recruiting);
        assert_eq!(view.current_applicants, 0);
    }

    // =============================================
    // 게시 결과 반영
    // =============================================

    #[test]
    fn test_publish_failure_keeps_created_view() {
        let registry = LabelRegistry::default();
        let mut resp = recruitment_fixture();
        resp.status = "created".into();
        let created = map_recruitment(BASE, &registry, &resp);

        let publish_err = Error::from_status("공고 게시", 500, None);
        let (view, err) = apply_publish_outcome(created.clone(), Err(publish_err));

        // 생성된 공고는 그대로, 에러는 호출 측에 알려만 준다
        assert_eq!(view, created);
        assert_eq!(view.id, 3);
        assert!(!view.status.is_recruiting());
        assert!(err.is_some());
    }

    #[test]
    fn test_publish_success_marks_recruiting() {
        let registry = LabelRegistry::default();
        let mut resp = recruitment_fixture();
        resp.status = "created".into();
        let created = map_recruitment(BASE, &registry, &resp);
        assert!(!created.status.is_recruiting());

        let publish = PublishResponse {
            recruitment_id: 3,
            status: "published".into(),
        };
        let (view, err) = apply_publish_outcome(created, Ok(publish));

        assert!(view.status.is_recruiting());
        assert!(err.is_none());
    }

    // =============================================
    // 요청 빌드
    // =============================================

    #[test]
    fn test_build_create_request_trims_and_omits_note() {
        let req = build_create_request("2026-02-01", "  Test Pier ", Some("   "));
        assert_eq!(req.activity_date, "2026-02-01");
        assert_eq!(req.meeting_place, "Test Pier");
        assert_eq!(req.additional_note, None);

        let req = build_create_request("2026-02-01", "Test Pier", Some(" 장갑 지참 "));
        assert_eq!(req.additional_note.as_deref(), Some("장갑 지참"));

        let req = build_create_request("2026-02-01", "Test Pier", None);
        assert_eq!(req.additional_note, None);
    }

    #[test]
    fn test_update_request_roundtrip_preserves_editable_fields() {
        let registry = LabelRegistry::default();
        let view = map_recruitment(BASE, &registry, &recruitment_fixture());
        let req = update_request_from_view(&view);

        assert_eq!(req.title.as_deref(), Some("광안리 정화 활동"));
        assert_eq!(req.content.as_deref(), Some(view.content.as_str()));
        assert_eq!(req.required_people, Some(4));
        assert_eq!(req.activity_date.as_deref(), Some("2026-02-01"));
        assert_eq!(req.meeting_place.as_deref(), Some("Test Pier"));
        assert_eq!(req.additional_note, None);

        // 직렬화 결과에 편집 가능 필드 외의 키가 섞이지 않는다
        let json: serde_json::Value = serde_json::to_value(&req).unwrap();
        let keys: Vec<&str> = json.as_object().unwrap().keys().map(|k| k.as_str()).collect();
        assert_eq!(
            keys,
            vec!["activity_date", "content", "meeting_place", "required_people", "title"]
        );
    }
}
