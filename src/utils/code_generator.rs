//! Short code generation and validation utilities.

use crate::error::AppError;
use rand::{Rng, distr::Alphanumeric};
use regex::Regex;
use serde_json::json;
use std::sync::LazyLock;

/// Length of generated short codes.
const CODE_LENGTH: usize = 7;

/// Allowed character set for user-provided custom codes.
static CUSTOM_CODE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9_-]+$").unwrap());

/// Codes that cannot be used as short links.
///
/// These words are routed to system endpoints and would shadow them.
const RESERVED_CODES: &[&str] = &["shorten", "stats", "activate", "deactivate", "health"];

/// Generates a random 7-character short code.
///
/// Characters are drawn uniformly from `[A-Za-z0-9]` (62 symbols), giving a
/// 62^7 keyspace in which collisions are statistically negligible.
///
/// # Examples
///
/// ```ignore
/// let code = generate_code();
/// assert_eq!(code.len(), 7);
/// assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
/// ```
pub fn generate_code() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(CODE_LENGTH)
        .map(char::from)
        .collect()
}

/// Validates a user-provided custom short code.
///
/// # Rules
///
/// - Must match `^[a-zA-Z0-9_-]+$` (letters, digits, hyphens, underscores)
/// - Maximum 64 characters
/// - Cannot be a reserved system word
///
/// # Errors
///
/// Returns [`AppError::Validation`] if any rule is violated.
pub fn validate_custom_code(code: &str) -> Result<(), AppError> {
    if code.is_empty() || code.len() > 64 {
        return Err(AppError::bad_request(
            "Custom code must be 1-64 characters",
            json!({ "provided_length": code.len() }),
        ));
    }

    if !CUSTOM_CODE_REGEX.is_match(code) {
        return Err(AppError::bad_request(
            "Custom code can only contain letters, numbers, hyphens, and underscores",
            json!({ "code": code }),
        ));
    }

    if RESERVED_CODES.contains(&code) {
        return Err(AppError::bad_request(
            "This code is reserved",
            json!({ "code": code }),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generate_code_has_correct_length() {
        let code = generate_code();
        assert_eq!(code.len(), 7);
    }

    #[test]
    fn test_generate_code_alphabet() {
        for _ in 0..100 {
            let code = generate_code();
            assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
        }
    }

    #[test]
    fn test_generate_code_produces_unique_codes() {
        let mut codes = HashSet::new();

        for _ in 0..1000 {
            codes.insert(generate_code());
        }

        assert_eq!(codes.len(), 1000);
    }

    #[test]
    fn test_validate_letters_digits() {
        assert!(validate_custom_code("MyLink2024").is_ok());
    }

    #[test]
    fn test_validate_hyphens_and_underscores() {
        assert!(validate_custom_code("my-cool_link").is_ok());
        assert!(validate_custom_code("_leading").is_ok());
        assert!(validate_custom_code("trailing-").is_ok());
    }

    #[test]
    fn test_validate_single_character() {
        assert!(validate_custom_code("a").is_ok());
    }

    #[test]
    fn test_validate_rejects_empty() {
        assert!(validate_custom_code("").is_err());
    }

    #[test]
    fn test_validate_rejects_too_long() {
        let long = "a".repeat(65);
        assert!(validate_custom_code(&long).is_err());
    }

    #[test]
    fn test_validate_rejects_spaces() {
        let err = validate_custom_code("my code").unwrap_err();
        assert!(err.to_string().contains("letters, numbers"));
    }

    #[test]
    fn test_validate_rejects_special_characters() {
        for code in ["code@123", "code!", "päth", "a/b", "a.b", "a+b"] {
            assert!(validate_custom_code(code).is_err(), "'{code}' should fail");
        }
    }

    #[test]
    fn test_validate_rejects_reserved_codes() {
        for &reserved in RESERVED_CODES {
            assert!(
                validate_custom_code(reserved).is_err(),
                "Reserved code '{reserved}' should be invalid"
            );
        }
    }
}
