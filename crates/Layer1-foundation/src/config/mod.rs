//! Config - 설정 관리
//!
//! - `visitor.rs` - VisitorConfig 통합 설정 (글로벌 + 프로젝트 병합)

mod visitor;

pub use visitor::{ThemeName, VisitorConfig, VISITOR_CONFIG_FILE};
