//! Cleanup AI Common Library
//!
//! 웹(WASM) 프론트와 공유되는 타입과 유틸리티:
//! - 백엔드 와이어 타입 / UI 뷰 모델
//! - 응답・요청 매퍼 (순수 함수)
//! - 쓰레기・도구 라벨 레지스트리
//! - 브라우저 로컬 이력 저장소 (주입형 KeyStorage)

pub mod error;
pub mod labels;
pub mod mapper;
pub mod store;
pub mod types;
pub mod view;

pub use error::{Error, Result};
pub use labels::LabelRegistry;
pub use mapper::{
    apply_publish_outcome, build_create_request, estimated_minutes, map_analysis, map_history,
    map_recruitment, map_recruitment_summary, resolve_image_url, total_count,
    update_request_from_view,
};
pub use store::{KeyStorage, MemoryStorage, OwnershipStore};
pub use types::{
    AnalysisHistoryItem, AnalysisHistoryResponse, AnalysisResponse, CreateRecruitmentRequest,
    ErrorBody, HealthResponse, PublishResponse, RecommendedResources, RecruitmentListItem,
    RecruitmentListResponse, RecruitmentResponse, UpdateRecruitmentRequest,
};
pub use view::{
    AnalysisHistoryView, AnalysisView, LabeledCount, RecruitmentStatus, RecruitmentSummaryView,
    RecruitmentView,
};
