//! # visitor-foundation
//!
//! Foundation layer for the visitor registry:
//! - Visitor: 방문자 레코드 (이름, 문서, 시간) 및 검증
//! - Registry: 메모리 내 방문자 목록 (register / list / search / delete)
//! - Config: 통합 설정 (VisitorConfig, 글로벌 + 프로젝트 병합)
//! - Storage: JsonStore (설정 파일 전용)
//!
//! ## 아키텍처
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │  visitor-cli (TUI / batch)                  │
//! │                     │                       │
//! │                     ▼                       │
//! │          VisitorRegistry (Vec<Visitor>)     │
//! │                     │                       │
//! │          ┌─────────┴─────────┐             │
//! │          ▼                   ▼             │
//! │     Visitor::new        DeletePolicy       │
//! │     (trim + 검증)      (all / first)       │
//! └─────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod error;
pub mod registry;
pub mod storage;
pub mod visitor;

// ============================================================================
// Error
// ============================================================================
pub use error::{Error, Result};

// ============================================================================
// Visitor / Registry
// ============================================================================
pub use registry::{DeletePolicy, VisitorRegistry};
pub use visitor::{fold_name, Visitor, VisitorField};

// ============================================================================
// Config (설정)
// ============================================================================
pub use config::{ThemeName, VisitorConfig, VISITOR_CONFIG_FILE};

// ============================================================================
// Storage (저장소)
// ============================================================================
pub use storage::JsonStore;
