//! User-facing notices shared by the TUI and batch mode

use visitor_foundation::{Error, Visitor};

pub const REGISTERED: &str = "Visitor registered successfully!";
pub const REMOVED: &str = "Visitor removed successfully!";
pub const FILL_ALL_FIELDS: &str = "Fill in all fields";
pub const EMPTY_SEARCH: &str = "Type a name to search";
pub const NOT_FOUND: &str = "Visitor not found";
pub const NO_VISITORS: &str = "No visitors registered";
pub const NOTHING_TO_DELETE: &str = "No visitors to delete";

/// 검색 성공 메시지
pub fn found(visitor: &Visitor) -> String {
    format!("Found: {}", visitor)
}

/// 레지스트리 에러 -> 사용자 메시지
pub fn describe_error(err: &Error) -> String {
    match err {
        Error::Validation { .. } => FILL_ALL_FIELDS.to_string(),
        Error::EmptyQuery => EMPTY_SEARCH.to_string(),
        Error::NotFound(_) => NOT_FOUND.to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use visitor_foundation::VisitorField;

    #[test]
    fn test_describe_error() {
        assert_eq!(
            describe_error(&Error::validation(VisitorField::Time)),
            FILL_ALL_FIELDS
        );
        assert_eq!(describe_error(&Error::EmptyQuery), EMPTY_SEARCH);
        assert_eq!(describe_error(&Error::not_found("x")), NOT_FOUND);
    }

    #[test]
    fn test_found_message() {
        let visitor = Visitor::new("Ana Silva", "123", "09:00").unwrap();
        assert_eq!(found(&visitor), "Found: Ana Silva | Doc: 123 | Time: 09:00");
    }
}
