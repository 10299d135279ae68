//! 백엔드 와이어 타입 정의
//!
//! 모든 필드는 snake_case 그대로 주고받는다. 백엔드가 생략할 수 있는
//! 필드는 `#[serde(default)]`로 관용적으로 받는다.
//!
//! - 분석: POST /analysis/image 는 `image_name`, GET 계열은 상대 경로
//!   `image_url`을 내려준다. 둘 다 [`AnalysisResponse`] 하나로 받는다.
//! - 쓰레기・도구 맵은 카테고리가 열려 있으므로 `BTreeMap<String, u32>`.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// 권장 자원 (인원・도구・예상 소요 시간)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RecommendedResources {
    pub people: u32,
    pub tools: BTreeMap<String, u32>,
    pub estimated_time_min: u32,
}

/// 이미지 분석 결과
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisResponse {
    pub analysis_id: u32,
    pub image_name: String,
    pub image_url: String,
    pub location: Option<String>,
    pub area_type: Option<String>,
    pub trash_summary: BTreeMap<String, u32>,
    pub recommended_resources: RecommendedResources,
    pub created_at: String,
}

/// 분석 이력 항목
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisHistoryItem {
    pub analysis_id: u32,
    pub image_url: String,
    pub location: Option<String>,
    pub trash_summary: BTreeMap<String, u32>,
    pub created_at: String,
}

/// GET /analysis/history 응답
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisHistoryResponse {
    pub histories: Vec<AnalysisHistoryItem>,
}

/// 구인글 상세 (생성・수정 응답도 동일 형태)
///
/// `status`는 백엔드의 게시 상태 문자열 그대로이고, 화면용 상태는
/// 매퍼가 [`crate::view::RecruitmentStatus`]로 파생한다.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RecruitmentResponse {
    pub recruitment_id: u32,
    pub image_name: String,
    pub title: String,
    pub content: String,
    pub required_people: u32,
    pub recommended_tools: BTreeMap<String, u32>,
    pub activity_date: String,
    pub meeting_place: String,
    pub additional_note: Option<String>,
    pub analysis_id: Option<u32>,
    pub status: String,
    pub created_at: String,
    pub updated_at: Option<String>,
    pub published_at: Option<String>,
}

/// 구인글 목록 항목
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RecruitmentListItem {
    #[serde(alias = "recruitment_id")]
    pub id: u32,
    pub image_name: String,
    pub title: String,
    pub location: Option<String>,
    pub required_people: u32,
    pub activity_date: String,
    pub status: String,
    pub created_at: String,
}

/// GET /recruitment 응답
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RecruitmentListResponse {
    pub recruitments: Vec<RecruitmentListItem>,
}

/// POST /recruitment/from-analysis/{id} 요청 본문
///
/// 선택 필드는 값이 있을 때만 직렬화한다 (null을 보내지 않는다).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateRecruitmentRequest {
    pub activity_date: String,
    pub meeting_place: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_note: Option<String>,
}

/// PUT /recruitment/{id} 요청 본문
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateRecruitmentRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required_people: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activity_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meeting_place: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_note: Option<String>,
}

/// POST /recruitment/{id}/publish 응답
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PublishResponse {
    pub recruitment_id: u32,
    pub status: String,
}

/// GET /health 응답
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HealthResponse {
    pub status: String,
}

/// 2xx 이외 응답의 본문 (있을 수도, 없을 수도 있다)
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ErrorBody {
    pub detail: Option<String>,
    pub message: Option<String>,
}

impl ErrorBody {
    /// detail 우선, 다음 message
    pub fn into_message(self) -> Option<String> {
        self.detail.or(self.message)
    }
}
