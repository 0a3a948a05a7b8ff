//! Registry - 방문자 레지스트리
//!
//! 등록 순서를 유지하는 메모리 내 방문자 목록과 네 가지 연산:
//!
//! ```text
//! register(name, document, time) ──▶ 끝에 추가
//! list()                          ──▶ 전체 스냅샷 (등록 순서)
//! search(name)                    ──▶ 첫 번째 일치 (대소문자 무시)
//! delete(name)                    ──▶ DeletePolicy에 따라 제거
//! ```
//!
//! 모든 연산은 동기적이며 실패 시 목록을 변경하지 않는다.

use crate::visitor::{fold_name, Visitor};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Delete Policy
// ============================================================================

/// 같은 이름의 방문자가 여럿일 때 delete가 제거하는 범위
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DeletePolicy {
    /// 이름이 일치하는 모든 방문자 제거
    #[default]
    AllMatches,
    /// 첫 번째로 일치하는 방문자만 제거 (search와 같은 기준)
    FirstMatch,
}

impl DeletePolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AllMatches => "all",
            Self::FirstMatch => "first",
        }
    }
}

impl fmt::Display for DeletePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DeletePolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "all" | "all-matches" | "allmatches" => Ok(Self::AllMatches),
            "first" | "first-match" | "firstmatch" => Ok(Self::FirstMatch),
            other => Err(Error::Config(format!(
                "Unknown delete policy '{}' (expected 'all' or 'first')",
                other
            ))),
        }
    }
}

// ============================================================================
// Visitor Registry
// ============================================================================

/// 방문자 레지스트리
#[derive(Debug, Clone, Default)]
pub struct VisitorRegistry {
    visitors: Vec<Visitor>,
    delete_policy: DeletePolicy,
}

impl VisitorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_delete_policy(mut self, policy: DeletePolicy) -> Self {
        self.delete_policy = policy;
        self
    }

    pub fn delete_policy(&self) -> DeletePolicy {
        self.delete_policy
    }

    /// 방문자 등록 (검증 실패 시 목록 변경 없음)
    pub fn register(
        &mut self,
        name: impl AsRef<str>,
        document: impl AsRef<str>,
        time: impl AsRef<str>,
    ) -> Result<&Visitor> {
        let visitor = match Visitor::new(name, document, time) {
            Ok(v) => v,
            Err(e) => {
                tracing::debug!("Rejected visitor registration: {}", e);
                return Err(e);
            }
        };

        tracing::debug!(name = visitor.name(), "Registered visitor");
        let index = self.visitors.len();
        self.visitors.push(visitor);
        Ok(&self.visitors[index])
    }

    /// 전체 목록 (등록 순서)
    pub fn list(&self) -> &[Visitor] {
        &self.visitors
    }

    pub fn iter(&self) -> impl Iterator<Item = &Visitor> {
        self.visitors.iter()
    }

    pub fn len(&self) -> usize {
        self.visitors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.visitors.is_empty()
    }

    /// 이름으로 검색 (첫 번째 일치)
    pub fn search(&self, query: &str) -> Result<&Visitor> {
        let folded = fold_name(query);
        if folded.is_empty() {
            return Err(Error::EmptyQuery);
        }

        self.visitors
            .iter()
            .find(|v| v.matches_folded(&folded))
            .ok_or_else(|| Error::not_found(query.trim()))
    }

    /// 이름으로 삭제, 제거된 개수 반환
    pub fn delete(&mut self, name: &str) -> Result<usize> {
        let folded = fold_name(name);
        let before = self.visitors.len();

        if !folded.is_empty() {
            match self.delete_policy {
                DeletePolicy::AllMatches => {
                    self.visitors.retain(|v| !v.matches_folded(&folded));
                }
                DeletePolicy::FirstMatch => {
                    if let Some(pos) = self
                        .visitors
                        .iter()
                        .position(|v| v.matches_folded(&folded))
                    {
                        self.visitors.remove(pos);
                    }
                }
            }
        }

        let removed = before - self.visitors.len();
        if removed == 0 {
            tracing::debug!(name = name.trim(), "Delete found no visitor");
            return Err(Error::not_found(name.trim()));
        }

        tracing::debug!(
            name = name.trim(),
            removed,
            policy = %self.delete_policy,
            "Deleted visitors"
        );
        Ok(removed)
    }

    /// 위치로 삭제 (TUI에서 선택된 행)
    pub fn remove_at(&mut self, index: usize) -> Result<Visitor> {
        if index >= self.visitors.len() {
            return Err(Error::not_found(format!("#{}", index + 1)));
        }
        let visitor = self.visitors.remove(index);
        tracing::debug!(name = visitor.name(), index, "Removed visitor");
        Ok(visitor)
    }

    /// 전체 삭제
    pub fn clear(&mut self) {
        tracing::debug!(count = self.visitors.len(), "Cleared registry");
        self.visitors.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(registry: &VisitorRegistry) -> Vec<&str> {
        registry.iter().map(|v| v.name()).collect()
    }

    #[test]
    fn test_register_appends_in_order() {
        let mut registry = VisitorRegistry::new();
        registry.register("Ana", "1", "09:00").unwrap();
        registry.register("Bruno", "2", "09:30").unwrap();
        registry.register("Carla", "3", "10:00").unwrap();

        assert_eq!(registry.len(), 3);
        assert_eq!(names(&registry), vec!["Ana", "Bruno", "Carla"]);
        assert_eq!(registry.list().last().unwrap().name(), "Carla");
    }

    #[test]
    fn test_register_rejects_blank_fields() {
        let mut registry = VisitorRegistry::new();
        registry.register("Ana", "1", "09:00").unwrap();

        assert!(registry.register(" ", "1", "09:00").is_err());
        assert!(registry.register("Bob", "", "09:00").is_err());
        assert!(registry.register("Bob", "2", "\t").is_err());
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_register_allows_duplicates() {
        let mut registry = VisitorRegistry::new();
        registry.register("Ana", "1", "09:00").unwrap();
        registry.register("Ana", "1", "09:00").unwrap();
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_search_returns_first_match() {
        let mut registry = VisitorRegistry::new();
        registry.register("Bob", "A1", "10:00").unwrap();
        registry.register("BOB", "A2", "11:00").unwrap();

        let found = registry.search("bob").unwrap();
        assert_eq!(found.document(), "A1");
    }

    #[test]
    fn test_search_is_exact() {
        let mut registry = VisitorRegistry::new();
        registry.register("Ana Silva", "123", "09:00").unwrap();

        assert!(matches!(registry.search("Ana"), Err(Error::NotFound(_))));
        assert!(matches!(registry.search("   "), Err(Error::EmptyQuery)));
        assert!(registry.search(" ana SILVA ").is_ok());
    }

    #[test]
    fn test_delete_all_matches() {
        let mut registry = VisitorRegistry::new();
        registry.register("Bob", "A1", "10:00").unwrap();
        registry.register("Ana", "B1", "10:30").unwrap();
        registry.register("Bob", "A2", "11:00").unwrap();

        assert_eq!(registry.delete("bob").unwrap(), 2);
        assert_eq!(names(&registry), vec!["Ana"]);
    }

    #[test]
    fn test_delete_first_match() {
        let mut registry = VisitorRegistry::new().with_delete_policy(DeletePolicy::FirstMatch);
        registry.register("Bob", "A1", "10:00").unwrap();
        registry.register("Ana", "B1", "10:30").unwrap();
        registry.register("Bob", "A2", "11:00").unwrap();

        assert_eq!(registry.delete("BOB").unwrap(), 1);
        assert_eq!(names(&registry), vec!["Ana", "Bob"]);
        assert_eq!(registry.search("bob").unwrap().document(), "A2");
    }

    #[test]
    fn test_delete_missing_leaves_list() {
        let mut registry = VisitorRegistry::new();
        registry.register("Ana", "1", "09:00").unwrap();

        assert!(matches!(registry.delete("Bob"), Err(Error::NotFound(_))));
        assert!(matches!(registry.delete(""), Err(Error::NotFound(_))));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_delete_trims_argument() {
        let mut registry = VisitorRegistry::new();
        registry.register("Bob", "A1", "10:00").unwrap();

        assert_eq!(registry.delete("  bob ").unwrap(), 1);
        assert!(registry.is_empty());
    }

    #[test]
    fn test_remove_at() {
        let mut registry = VisitorRegistry::new();
        registry.register("Bob", "A1", "10:00").unwrap();
        registry.register("Bob", "A2", "11:00").unwrap();

        let removed = registry.remove_at(1).unwrap();
        assert_eq!(removed.document(), "A2");
        assert!(registry.remove_at(5).is_err());
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_delete_policy_parse() {
        assert_eq!("all".parse::<DeletePolicy>().unwrap(), DeletePolicy::AllMatches);
        assert_eq!("First".parse::<DeletePolicy>().unwrap(), DeletePolicy::FirstMatch);
        assert!("some".parse::<DeletePolicy>().is_err());
        assert_eq!(DeletePolicy::default(), DeletePolicy::AllMatches);
    }

    #[test]
    fn test_delete_policy_serde() {
        let json = serde_json::to_string(&DeletePolicy::FirstMatch).unwrap();
        assert_eq!(json, "\"firstMatch\"");
        let parsed: DeletePolicy = serde_json::from_str("\"allMatches\"").unwrap();
        assert_eq!(parsed, DeletePolicy::AllMatches);
    }
}
