//! UI 뷰 모델 정의
//!
//! 페이지가 그대로 렌더링하는 형태. 와이어 타입에서 뷰 모델로의 변환은
//! 전부 [`crate::mapper`]의 순수 함수가 담당한다.

use serde::{Deserialize, Serialize};

/// 현지화된 라벨 + 개수 쌍 (쓰레기 분류・도구 공용)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabeledCount {
    pub label: String,
    pub count: u32,
}

/// 분석 상세 뷰
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnalysisView {
    pub id: u32,
    /// 절대 URL로 해석된 이미지 주소
    pub image_url: String,
    /// 백엔드가 위치를 주지 않으면 "위치 정보 없음"
    pub location: String,
    /// 백엔드에 없을 수 있는 필드. 없으면 표시 생략
    pub area_type: Option<String>,
    /// trash_summary 값의 총합
    pub total_trash: u32,
    pub trash_items: Vec<LabeledCount>,
    pub people: u32,
    pub tools: Vec<LabeledCount>,
    pub estimated_time_min: u32,
    pub created_at: String,
}

/// 분석 이력 목록 항목 뷰
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnalysisHistoryView {
    pub id: u32,
    pub image_url: String,
    pub location: String,
    pub total_trash: u32,
    pub trash_labels: Vec<String>,
    pub created_at: String,
}

/// 공고 표시 상태
///
/// 저장되는 값이 아니라 백엔드 게시 상태에서 파생된다:
/// "published" → 모집 중, 그 외 전부 → 모집 종료.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RecruitmentStatus {
    Recruiting,
    #[default]
    Completed,
}

impl RecruitmentStatus {
    /// 백엔드 게시 상태 문자열에서 파생 (대소문자 무시)
    pub fn from_publish_state(state: &str) -> Self {
        if state.eq_ignore_ascii_case("published") {
            RecruitmentStatus::Recruiting
        } else {
            RecruitmentStatus::Completed
        }
    }

    pub fn is_recruiting(&self) -> bool {
        matches!(self, RecruitmentStatus::Recruiting)
    }

    /// 화면 표시용 한국어 라벨
    pub fn label(&self) -> &'static str {
        match self {
            RecruitmentStatus::Recruiting => "모집 중",
            RecruitmentStatus::Completed => "모집 종료",
        }
    }
}

/// 공고 상세 뷰
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecruitmentView {
    pub id: u32,
    pub image_url: String,
    pub title: String,
    /// 플레이스홀더([activity_date] 등)가 치환 완료된 본문
    pub content: String,
    pub required_people: u32,
    /// 백엔드 미제공. 항상 0으로 시작
    pub current_applicants: u32,
    pub tools: Vec<LabeledCount>,
    pub activity_date: String,
    pub meeting_place: String,
    pub additional_note: Option<String>,
    pub analysis_id: Option<u32>,
    pub status: RecruitmentStatus,
    pub created_at: String,
    pub published_at: Option<String>,
}

/// 공고 목록 카드 뷰
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecruitmentSummaryView {
    pub id: u32,
    pub image_url: String,
    pub title: String,
    /// 목록 응답의 location. 없으면 "위치 미정"
    pub meeting_place: String,
    pub required_people: u32,
    pub current_applicants: u32,
    pub activity_date: String,
    pub status: RecruitmentStatus,
}
