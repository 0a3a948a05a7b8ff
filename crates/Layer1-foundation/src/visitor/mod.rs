//! Visitor - 방문자 레코드
//!
//! 이름/문서/시간 세 필드로 구성된 방문 기록 하나

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// 방문자 필드 (검증 에러 보고용)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VisitorField {
    Name,
    Document,
    Time,
}

impl VisitorField {
    pub fn all() -> [Self; 3] {
        [Self::Name, Self::Document, Self::Time]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Visitor name",
            Self::Document => "Document",
            Self::Time => "Time",
        }
    }
}

impl fmt::Display for VisitorField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Name => "name",
            Self::Document => "document",
            Self::Time => "time",
        };
        f.write_str(s)
    }
}

/// 등록된 방문자
///
/// 생성 시점에 모든 필드는 trim 되어 있고 비어있지 않음이 보장된다.
/// `Visitor::new`를 거치지 않는 생성 경로가 없도록 Deserialize는 구현하지 않는다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Visitor {
    name: String,
    document: String,
    time: String,
}

impl Visitor {
    /// 검증 후 생성 (name -> document -> time 순서로 첫 빈 필드를 보고)
    pub fn new(
        name: impl AsRef<str>,
        document: impl AsRef<str>,
        time: impl AsRef<str>,
    ) -> Result<Self> {
        let name = required(name.as_ref(), VisitorField::Name)?;
        let document = required(document.as_ref(), VisitorField::Document)?;
        let time = required(time.as_ref(), VisitorField::Time)?;

        Ok(Self {
            name,
            document,
            time,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn document(&self) -> &str {
        &self.document
    }

    pub fn time(&self) -> &str {
        &self.time
    }

    /// 이름이 질의와 같은지 (대소문자 무시, 질의는 trim)
    pub fn matches_name(&self, query: &str) -> bool {
        self.matches_folded(&fold_name(query))
    }

    /// 이미 `fold_name`으로 정규화된 이름과 비교 (목록 스캔용)
    pub fn matches_folded(&self, folded: &str) -> bool {
        fold_name(&self.name) == folded
    }
}

impl fmt::Display for Visitor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | Doc: {} | Time: {}",
            self.name, self.document, self.time
        )
    }
}

/// 이름 비교용 정규화 (trim + 소문자)
pub fn fold_name(name: &str) -> String {
    name.trim().to_lowercase()
}

fn required(value: &str, field: VisitorField) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(Error::validation(field));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visitor_trims_fields() {
        let visitor = Visitor::new("  Ana Silva ", "\t123 ", " 09:00").unwrap();
        assert_eq!(visitor.name(), "Ana Silva");
        assert_eq!(visitor.document(), "123");
        assert_eq!(visitor.time(), "09:00");
    }

    #[test]
    fn test_visitor_reports_first_empty_field() {
        let err = Visitor::new("", "", "").unwrap_err();
        assert!(matches!(
            err,
            Error::Validation {
                field: VisitorField::Name
            }
        ));

        let err = Visitor::new("Ana", "   ", "").unwrap_err();
        assert!(matches!(
            err,
            Error::Validation {
                field: VisitorField::Document
            }
        ));

        let err = Visitor::new("Ana", "123", " \n").unwrap_err();
        assert!(matches!(
            err,
            Error::Validation {
                field: VisitorField::Time
            }
        ));
    }

    #[test]
    fn test_matches_name_case_insensitive() {
        let visitor = Visitor::new("Ana Silva", "123", "09:00").unwrap();
        assert!(visitor.matches_name("ana silva"));
        assert!(visitor.matches_name("  ANA SILVA  "));
        assert!(!visitor.matches_name("ana"));
        assert!(!visitor.matches_name(""));
        assert!(visitor.matches_folded("ana silva"));
        assert!(!visitor.matches_folded("ANA SILVA"));
    }

    #[test]
    fn test_fold_name_unicode() {
        assert_eq!(fold_name(" JOÃO "), "joão");
    }

    #[test]
    fn test_display() {
        let visitor = Visitor::new("Ana Silva", "123", "09:00").unwrap();
        assert_eq!(visitor.to_string(), "Ana Silva | Doc: 123 | Time: 09:00");
    }

    #[test]
    fn test_field_labels() {
        let labels: Vec<_> = VisitorField::all().iter().map(|f| f.label()).collect();
        assert_eq!(labels, vec!["Visitor name", "Document", "Time"]);
    }
}
