//! 에러 타입 정의

use thiserror::Error;

/// 공통 에러 타입
///
/// 백엔드 호출의 모든 실패가 이 하나의 타입으로 수렴한다.
/// 페이지 레이어는 `Display` 메시지를 그대로 사용자에게 보여준다.
#[derive(Error, Debug)]
pub enum Error {
    /// 2xx 이외의 HTTP 응답
    #[error("{message}")]
    Http { status: u16, message: String },

    /// 요청한 분석・공고가 존재하지 않음 (404)
    #[error("{0}")]
    NotFound(String),

    /// fetch 자체가 실패 (네트워크 단절 등)
    #[error("네트워크 오류: {0}")]
    Network(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// 2xx 이외의 응답을 에러로 정규화한다.
    ///
    /// 백엔드가 내려준 detail/message가 있으면 그 메시지를,
    /// 없으면 "<동작> 실패: <상태코드>" 형식의 메시지를 사용한다.
    pub fn from_status(action: &str, status: u16, detail: Option<String>) -> Self {
        let message = detail
            .filter(|d| !d.trim().is_empty())
            .unwrap_or_else(|| format!("{} 실패: {}", action, status));

        if status == 404 {
            Error::NotFound(message)
        } else {
            Error::Http { status, message }
        }
    }
}

/// Result 타입 에일리어스
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_status_generic_message() {
        let err = Error::from_status("분석 조회", 500, None);
        assert!(matches!(err, Error::Http { status: 500, .. }));
        assert_eq!(format!("{}", err), "분석 조회 실패: 500");
    }

    #[test]
    fn test_from_status_prefers_backend_detail() {
        let err = Error::from_status("공고 생성", 422, Some("activity_date is required".into()));
        assert_eq!(format!("{}", err), "activity_date is required");
    }

    #[test]
    fn test_from_status_blank_detail_falls_back() {
        let err = Error::from_status("공고 생성", 422, Some("   ".into()));
        assert_eq!(format!("{}", err), "공고 생성 실패: 422");
    }

    #[test]
    fn test_from_status_not_found() {
        let err = Error::from_status("분석 조회", 404, None);
        assert!(matches!(err, Error::NotFound(_)));
        assert_eq!(format!("{}", err), "분석 조회 실패: 404");
    }

    #[test]
    fn test_network_display() {
        let err = Error::Network("Failed to fetch".into());
        let display = format!("{}", err);
        assert!(display.contains("네트워크 오류"));
        assert!(display.contains("Failed to fetch"));
    }

    #[test]
    fn test_from_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::Json(_)));
    }
}
