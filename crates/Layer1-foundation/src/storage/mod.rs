//! Storage module
//!
//! - `json`: JSON - 설정 파일 저장/로드
//!
//! 방문자 레코드 자체는 프로세스 메모리에만 존재하며 저장하지 않는다.

mod json;

pub use json::JsonStore;
