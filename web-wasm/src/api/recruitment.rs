//! 구인글(모집 공고) API

use cleanup_ai_common::{
    apply_publish_outcome, map_recruitment, map_recruitment_summary, CreateRecruitmentRequest,
    LabelRegistry, PublishResponse, RecruitmentListResponse, RecruitmentResponse,
    RecruitmentSummaryView, RecruitmentView, Result, UpdateRecruitmentRequest,
};
use gloo::console;

use super::client;

fn map(resp: &RecruitmentResponse) -> RecruitmentView {
    map_recruitment(&client::api_base_url(), &LabelRegistry::default(), resp)
}

/// POST /recruitment/from-analysis/{analysis_id}
///
/// 응답에 recruitment_id가 없는 백엔드 버전이 있어, 그 경우
/// analysis_id를 ID로 쓴다.
pub async fn create_from_analysis(
    analysis_id: u32,
    req: &CreateRecruitmentRequest,
) -> Result<RecruitmentView> {
    let resp: RecruitmentResponse = client::post_json(
        "공고 생성",
        &format!("/recruitment/from-analysis/{analysis_id}"),
        req,
    )
    .await?;

    let mut view = map(&resp);
    if view.id == 0 {
        view.id = analysis_id;
    }
    Ok(view)
}

/// POST /recruitment/{id}/publish
pub async fn publish(id: u32) -> Result<PublishResponse> {
    client::post_empty("공고 게시", &format!("/recruitment/{id}/publish")).await
}

/// 생성 후 즉시 게시한다.
///
/// 게시 실패는 경고 로그만 남기고 생성 결과를 그대로 돌려준다.
/// 생성을 되돌리지 않으므로 공고는 미게시 상태로 남는다.
pub async fn create_and_publish(
    analysis_id: u32,
    req: &CreateRecruitmentRequest,
) -> Result<RecruitmentView> {
    let created = create_from_analysis(analysis_id, req).await?;
    let outcome = publish(created.id).await;
    let (view, publish_err) = apply_publish_outcome(created, outcome);
    if let Some(err) = publish_err {
        console::warn!(format!("공고 게시 실패 (생성은 유지됨): {err}"));
    }
    Ok(view)
}

/// GET /recruitment?status=
pub async fn list(status: Option<&str>) -> Result<Vec<RecruitmentSummaryView>> {
    let path = match status {
        Some(s) => format!("/recruitment?status={s}"),
        None => "/recruitment".to_string(),
    };
    let resp: RecruitmentListResponse = client::get_json("공고 목록 조회", &path).await?;
    let base = client::api_base_url();
    Ok(resp
        .recruitments
        .iter()
        .map(|item| map_recruitment_summary(&base, item))
        .collect())
}

/// GET /recruitment/{id}
pub async fn detail(id: u32) -> Result<RecruitmentView> {
    let resp: RecruitmentResponse =
        client::get_json("공고 조회", &format!("/recruitment/{id}")).await?;
    Ok(map(&resp))
}

/// PUT /recruitment/{id}
pub async fn update(id: u32, req: &UpdateRecruitmentRequest) -> Result<RecruitmentView> {
    let resp: RecruitmentResponse =
        client::put_json("공고 수정", &format!("/recruitment/{id}"), req).await?;
    Ok(map(&resp))
}

/// DELETE /recruitment/{id}
pub async fn remove(id: u32) -> Result<()> {
    client::delete("공고 삭제", &format!("/recruitment/{id}")).await
}
