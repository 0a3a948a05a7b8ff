//! Error types for the visitor registry
//!
//! 모든 에러를 중앙에서 관리

use crate::visitor::VisitorField;
use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// 방문자 레지스트리 에러 타입
#[derive(Error, Debug)]
pub enum Error {
    // ========================================================================
    // 레지스트리 관련 (사용자 입력)
    // ========================================================================
    #[error("Validation error: {field} must not be empty")]
    Validation { field: VisitorField },

    #[error("Search query must not be empty")]
    EmptyQuery,

    #[error("Visitor not found: {0}")]
    NotFound(String),

    // ========================================================================
    // 설정 관련
    // ========================================================================
    #[error("Configuration error: {0}")]
    Config(String),

    // ========================================================================
    // 외부 에러 변환
    // ========================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// 사용자에게 보여줄 수 있는 에러인지 확인
    pub fn is_user_facing(&self) -> bool {
        matches!(
            self,
            Error::Validation { .. } | Error::EmptyQuery | Error::NotFound(_)
        )
    }

    /// "찾을 수 없음" 계열 에러인지 확인 (빈 검색어 포함)
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::EmptyQuery | Error::NotFound(_))
    }

    /// Validation 에러 생성 헬퍼
    pub fn validation(field: VisitorField) -> Self {
        Error::Validation { field }
    }

    /// NotFound 에러 생성 헬퍼
    pub fn not_found(name: impl Into<String>) -> Self {
        Error::NotFound(name.into())
    }
}
