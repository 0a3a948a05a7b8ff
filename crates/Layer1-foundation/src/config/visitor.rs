//! Visitor Config - 통합 설정
//!
//! 글로벌 설정 위에 프로젝트 설정을 덮어쓰는 VisitorConfig

use crate::registry::DeletePolicy;
use crate::storage::JsonStore;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

/// 설정 파일명
pub const VISITOR_CONFIG_FILE: &str = "config.json";

/// TUI 로그 파일명 (logFile 미지정 시 글로벌 디렉토리 아래)
const DEFAULT_LOG_FILE: &str = "visitors.log";

const DEFAULT_NOTIFICATION_SECS: u64 = 3;
const DEFAULT_SEARCH_NOTIFICATION_SECS: u64 = 6;

// ============================================================================
// Theme
// ============================================================================

/// TUI 테마 이름
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
    #[default]
    Dark,
    Light,
}

impl fmt::Display for ThemeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dark => f.write_str("dark"),
            Self::Light => f.write_str("light"),
        }
    }
}

impl FromStr for ThemeName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "dark" => Ok(Self::Dark),
            "light" => Ok(Self::Light),
            other => Err(Error::Config(format!(
                "Unknown theme '{}' (expected 'dark' or 'light')",
                other
            ))),
        }
    }
}

// ============================================================================
// Visitor Config (통합)
// ============================================================================

/// 방문자 레지스트리 설정
///
/// 모든 필드는 선택 사항이며, 설정되지 않은 값은 접근자에서 기본값으로 채운다.
/// ```json
/// {
///   "deletePolicy": "firstMatch",
///   "theme": "light",
///   "notificationSecs": 3,
///   "searchNotificationSecs": 6
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisitorConfig {
    /// 같은 이름이 여럿일 때 삭제 범위
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delete_policy: Option<DeletePolicy>,

    /// 테마 (TUI용)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<ThemeName>,

    /// 일반 알림 표시 시간 (초)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notification_secs: Option<u64>,

    /// 검색 결과 알림 표시 시간 (초)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_notification_secs: Option<u64>,

    /// TUI 모드 로그 파일 경로
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
}

impl VisitorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    // ========================================================================
    // Load / Save
    // ========================================================================

    /// 글로벌 + 프로젝트 병합 로드
    pub fn load() -> Result<Self> {
        let mut stores = Vec::new();
        if let Ok(global) = JsonStore::global() {
            stores.push(global);
        }
        if let Ok(project) = JsonStore::current_project() {
            stores.push(project);
        }
        Self::load_from(&stores)
    }

    /// 주어진 저장소 순서대로 병합 (뒤쪽이 우선)
    pub fn load_from(stores: &[JsonStore]) -> Result<Self> {
        let mut config = Self::new();
        for store in stores {
            if let Some(layer) = store.load_optional::<VisitorConfig>(VISITOR_CONFIG_FILE)? {
                tracing::debug!("Loaded config from {}", store.base_dir().display());
                config.merge(layer);
            }
        }
        Ok(config)
    }

    /// 프로젝트 설정 저장
    pub fn save_project(&self) -> Result<()> {
        JsonStore::current_project()?.save(VISITOR_CONFIG_FILE, self)
    }

    // ========================================================================
    // Merge
    // ========================================================================

    /// 다른 설정과 병합 (other가 우선)
    pub fn merge(&mut self, other: VisitorConfig) {
        if other.delete_policy.is_some() {
            self.delete_policy = other.delete_policy;
        }
        if other.theme.is_some() {
            self.theme = other.theme;
        }
        if other.notification_secs.is_some() {
            self.notification_secs = other.notification_secs;
        }
        if other.search_notification_secs.is_some() {
            self.search_notification_secs = other.search_notification_secs;
        }
        if other.log_file.is_some() {
            self.log_file = other.log_file;
        }
    }

    // ========================================================================
    // Accessors (기본값 적용)
    // ========================================================================

    pub fn delete_policy(&self) -> DeletePolicy {
        self.delete_policy.unwrap_or_default()
    }

    pub fn theme(&self) -> ThemeName {
        self.theme.unwrap_or_default()
    }

    pub fn notification_duration(&self) -> Duration {
        Duration::from_secs(self.notification_secs.unwrap_or(DEFAULT_NOTIFICATION_SECS))
    }

    pub fn search_notification_duration(&self) -> Duration {
        Duration::from_secs(
            self.search_notification_secs
                .unwrap_or(DEFAULT_SEARCH_NOTIFICATION_SECS),
        )
    }

    /// 로그 파일 경로 (미지정 시 글로벌 디렉토리의 visitors.log)
    ///
    /// 상위 디렉토리는 없으면 만든다.
    pub fn log_file(&self) -> Result<PathBuf> {
        match &self.log_file {
            Some(path) => {
                if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                    std::fs::create_dir_all(parent)?;
                }
                Ok(path.clone())
            }
            None => {
                let store = JsonStore::global()?;
                store.ensure_dir()?;
                Ok(store.file_path(DEFAULT_LOG_FILE))
            }
        }
    }

    // ========================================================================
    // Builder
    // ========================================================================

    pub fn with_delete_policy(mut self, policy: DeletePolicy) -> Self {
        self.delete_policy = Some(policy);
        self
    }

    pub fn with_theme(mut self, theme: ThemeName) -> Self {
        self.theme = Some(theme);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = VisitorConfig::new();
        assert_eq!(config.delete_policy(), DeletePolicy::AllMatches);
        assert_eq!(config.theme(), ThemeName::Dark);
        assert_eq!(config.notification_duration(), Duration::from_secs(3));
        assert_eq!(config.search_notification_duration(), Duration::from_secs(6));
    }

    #[test]
    fn test_custom_log_file_creates_parent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("logs").join("visitors.log");
        let config = VisitorConfig {
            log_file: Some(path.clone()),
            ..VisitorConfig::default()
        };

        assert_eq!(config.log_file().unwrap(), path);
        assert!(path.parent().unwrap().is_dir());
    }

    #[test]
    fn test_config_merge() {
        let mut base = VisitorConfig::new().with_theme(ThemeName::Light);
        base.notification_secs = Some(10);

        let overlay = VisitorConfig::new().with_delete_policy(DeletePolicy::FirstMatch);
        base.merge(overlay);

        assert_eq!(base.delete_policy(), DeletePolicy::FirstMatch);
        assert_eq!(base.theme(), ThemeName::Light);
        assert_eq!(base.notification_secs, Some(10));
    }

    #[test]
    fn test_load_from_layers() {
        let global = tempfile::tempdir().unwrap();
        let project = tempfile::tempdir().unwrap();
        let global_store = JsonStore::new(global.path());
        let project_store = JsonStore::new(project.path());

        global_store
            .save(
                VISITOR_CONFIG_FILE,
                &VisitorConfig::new()
                    .with_theme(ThemeName::Light)
                    .with_delete_policy(DeletePolicy::AllMatches),
            )
            .unwrap();
        project_store
            .save(
                VISITOR_CONFIG_FILE,
                &VisitorConfig::new().with_delete_policy(DeletePolicy::FirstMatch),
            )
            .unwrap();

        let config = VisitorConfig::load_from(&[global_store, project_store]).unwrap();
        assert_eq!(config.theme(), ThemeName::Light);
        assert_eq!(config.delete_policy(), DeletePolicy::FirstMatch);
    }

    #[test]
    fn test_load_from_missing_files() {
        let dir = tempfile::tempdir().unwrap();
        let config = VisitorConfig::load_from(&[JsonStore::new(dir.path())]).unwrap();
        assert_eq!(config, VisitorConfig::default());
    }

    #[test]
    fn test_config_json_shape() {
        let json = r#"{ "deletePolicy": "firstMatch", "searchNotificationSecs": 8 }"#;
        let config: VisitorConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.delete_policy(), DeletePolicy::FirstMatch);
        assert_eq!(config.search_notification_duration(), Duration::from_secs(8));
        assert!(config.theme.is_none());
    }

    #[test]
    fn test_theme_parse() {
        assert_eq!("Light".parse::<ThemeName>().unwrap(), ThemeName::Light);
        assert!("neon".parse::<ThemeName>().is_err());
    }
}
