//! Field predicates and validation error kinds

use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

/// Loose email shape: something, `@`, something, `.`, something.
///
/// This is a known approximation and not RFC 5322. It is a search, not a
/// full match, so surrounding text does not make a value invalid.
static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").expect("email pattern is valid"));

/// Why a field is currently invalid. `Display` is the inline error text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("Name must not be empty.")]
    EmptyName,
    #[error("Email is invalid.")]
    InvalidEmail,
}

/// A name is valid when it has anything besides whitespace
pub fn is_valid_name(value: &str) -> bool {
    !value.trim().is_empty()
}

/// An email is valid when it contains the loose `x@y.z` shape
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_REGEX.is_match(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_empty_is_invalid() {
        assert!(!is_valid_name(""));
    }

    #[test]
    fn test_name_whitespace_only_is_invalid() {
        assert!(!is_valid_name("   "));
        assert!(!is_valid_name("\t\n "));
    }

    #[test]
    fn test_name_single_char_is_valid() {
        assert!(is_valid_name("a"));
    }

    #[test]
    fn test_name_with_padding_is_valid() {
        assert!(is_valid_name("  Ada  "));
    }

    #[test]
    fn test_name_validity_matches_trim() {
        for s in ["", " ", "x", " x ", "\u{3000}", "Ada Lovelace", "\n"] {
            assert_eq!(is_valid_name(s), !s.trim().is_empty(), "input {s:?}");
        }
    }

    #[test]
    fn test_email_minimal_is_valid() {
        assert!(is_valid_email("a@b.c"));
    }

    #[test]
    fn test_email_common_address_is_valid() {
        assert!(is_valid_email("ada@example.com"));
    }

    #[test]
    fn test_email_without_at_is_invalid() {
        assert!(!is_valid_email("abc"));
    }

    #[test]
    fn test_email_empty_is_invalid() {
        assert!(!is_valid_email(""));
    }

    #[test]
    fn test_email_without_dot_after_at_is_invalid() {
        assert!(!is_valid_email("ada@example"));
    }

    #[test]
    fn test_email_missing_parts_are_invalid() {
        assert!(!is_valid_email("@b.c"));
        assert!(!is_valid_email("a@.c"));
        assert!(!is_valid_email("a@b."));
    }

    #[test]
    fn test_email_is_permissive_about_surrounding_text() {
        // Search semantics: a valid-looking run inside the value is enough
        assert!(is_valid_email("mail me at a@b.c please"));
        assert!(is_valid_email("a@b@c.d"));
    }

    #[test]
    fn test_email_whitespace_breaks_shape() {
        assert!(!is_valid_email("a @b.c"));
        assert!(!is_valid_email("a@ b.c"));
    }

    #[test]
    fn test_field_error_messages() {
        assert_eq!(FieldError::EmptyName.to_string(), "Name must not be empty.");
        assert_eq!(FieldError::InvalidEmail.to_string(), "Email is invalid.");
    }
}
