//! 백엔드 REST API 연동
//!
//! 엔드포인트별 함수 하나씩. 전부 매퍼를 거친 뷰 모델을 돌려주고,
//! 실패는 [`cleanup_ai_common::Error`] 하나로 수렴한다.

pub mod analysis;
pub mod client;
pub mod recruitment;

use cleanup_ai_common::{HealthResponse, Result};

/// GET /health. 백엔드 생존 확인
pub async fn health() -> Result<HealthResponse> {
    client::get_json("헬스 체크", "/health").await
}
