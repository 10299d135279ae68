//! 이미지 분석 API

use cleanup_ai_common::{
    map_analysis, map_history, AnalysisHistoryResponse, AnalysisHistoryView, AnalysisResponse,
    AnalysisView, LabelRegistry, Result,
};
use web_sys::{Blob, FormData};

use super::client;

/// POST /analysis/image
///
/// 이미지를 multipart로 업로드해 쓰레기 분석을 요청한다.
/// 위치는 선택 입력이며 공백뿐이면 보내지 않는다.
pub async fn analyze_image(
    image: &Blob,
    file_name: &str,
    location: Option<&str>,
) -> Result<AnalysisView> {
    let form = FormData::new().map_err(client::js_error)?;
    form.append_with_blob_and_filename("image", image, file_name)
        .map_err(client::js_error)?;
    if let Some(loc) = location.map(str::trim).filter(|l| !l.is_empty()) {
        form.append_with_str("location", loc)
            .map_err(client::js_error)?;
    }

    let resp: AnalysisResponse = client::post_form("이미지 분석", "/analysis/image", &form).await?;
    Ok(map_analysis(
        &client::api_base_url(),
        &LabelRegistry::default(),
        &resp,
    ))
}

/// GET /analysis/history
pub async fn fetch_history() -> Result<Vec<AnalysisHistoryView>> {
    let resp: AnalysisHistoryResponse =
        client::get_json("분석 이력 조회", "/analysis/history").await?;
    Ok(map_history(
        &client::api_base_url(),
        &LabelRegistry::default(),
        &resp,
    ))
}

/// GET /analysis/{id}
pub async fn fetch_detail(id: u32) -> Result<AnalysisView> {
    let resp: AnalysisResponse =
        client::get_json("분석 결과 조회", &format!("/analysis/{id}")).await?;
    Ok(map_analysis(
        &client::api_base_url(),
        &LabelRegistry::default(),
        &resp,
    ))
}
