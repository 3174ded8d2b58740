//! Common validation utilities
//!
//! Pure predicates. Messages and rule ordering live in the core validation
//! service.

use once_cell::sync::Lazy;
use regex::Regex;

/// Minimum username length (in characters)
pub const USERNAME_MIN_LEN: usize = 3;
/// Maximum username length (in characters)
pub const USERNAME_MAX_LEN: usize = 20;
/// Minimum password length (in characters)
pub const PASSWORD_MIN_LEN: usize = 8;
/// Minimum verification token length
pub const TOKEN_MIN_LEN: usize = 10;

static USERNAME_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z0-9_]+$").expect("Invalid username regex"));

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("Invalid email regex")
});

/// Common validation functions
pub mod validators {
    use super::*;

    /// Check if a string has at least `min` characters
    pub fn min_length(value: &str, min: usize) -> bool {
        value.chars().count() >= min
    }

    /// ASCII letters, digits and underscore only
    pub fn is_username_charset(value: &str) -> bool {
        USERNAME_REGEX.is_match(value)
    }

    /// Strict email shape check
    pub fn is_valid_email(email: &str) -> bool {
        EMAIL_REGEX.is_match(email)
    }

    /// Heuristic used to route a login/registration identifier
    pub fn looks_like_email(identifier: &str) -> bool {
        identifier.contains('@')
    }
}
