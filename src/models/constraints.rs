//! Shared field constraint tables.
//!
//! Every length bound, format rule and custom check lives here so that the
//! form DTOs and the domain entities validate against the same rules: a form
//! that passes validation always maps to an entity that passes validation,
//! and vice versa.

use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use regex::Regex;
use validator::ValidationError;

/// User first/last names and author usernames.
pub const MIN_NAME_LENGTH: u64 = 3;
pub const MAX_NAME_LENGTH: u64 = 30;

/// Upper bound for free-form single-line fields (email).
pub const MAX_FIELD_LENGTH: u64 = 100;

/// Article and event titles.
pub const MIN_TITLE_LENGTH: u64 = 3;
pub const MAX_TITLE_LENGTH: u64 = 300;

/// Article and event bodies.
pub const MIN_CONTENT_LENGTH: u64 = 30;
pub const MAX_CONTENT_LENGTH: u64 = 3000;

pub const MIN_PASSWORD_LENGTH: usize = 8;
pub const MAX_PASSWORD_LENGTH: usize = 25;

/// Artist names and artwork names.
pub const MAX_GALLERY_NAME_LENGTH: u64 = 50;

/// `local@domain.tld` with at least one dot-separated domain label of two
/// or more letters.
pub static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9+_.-]+@([A-Za-z0-9-]+\.)+[A-Za-z]{2,}$").expect("invalid email regex")
});

fn violation(code: &'static str, message: &'static str) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(message.into());
    err
}

/// Rejects strings that are empty or contain only whitespace.
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(violation("not_blank", "must not be blank"));
    }
    Ok(())
}

/// Password rule: 8-25 alphanumeric characters with at least one letter and
/// at least one digit. The input is checked as supplied, without trimming.
pub fn password(value: &str) -> Result<(), ValidationError> {
    let len = value.chars().count();
    let well_formed = (MIN_PASSWORD_LENGTH..=MAX_PASSWORD_LENGTH).contains(&len)
        && value.chars().all(|c| c.is_ascii_alphanumeric())
        && value.chars().any(|c| c.is_ascii_alphabetic())
        && value.chars().any(|c| c.is_ascii_digit());
    if !well_formed {
        return Err(violation(
            "password",
            "must be 8-25 alphanumeric characters with at least one letter and one digit",
        ));
    }
    Ok(())
}

/// Event timing must lie in the future at validation time.
pub fn future(timing: &DateTime<Utc>) -> Result<(), ValidationError> {
    if *timing <= Utc::now() {
        return Err(violation("future", "must be in the future"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::*;

    #[test]
    fn email_regex_accepts_common_shapes() {
        for email in [
            "john@example.com",
            "john.doe+tag@example.co.uk",
            "a_b-c@sub-domain.org",
        ] {
            assert!(EMAIL_REGEX.is_match(email), "expected match: {email}");
        }
    }

    #[test]
    fn email_regex_rejects_malformed_addresses() {
        for email in [
            "john",
            "john@",
            "@example.com",
            "john@example",
            "john@example.c",
            "john doe@example.com",
        ] {
            assert!(!EMAIL_REGEX.is_match(email), "expected no match: {email}");
        }
    }

    #[test]
    fn password_requires_letter_and_digit_within_bounds() {
        assert!(password("Secret12").is_ok());
        assert!(password("a1b2c3d4e5f6g7h8i9j0k1l2m").is_ok());

        assert!(password("short1").is_err());
        assert!(password("lettersonly").is_err());
        assert!(password("12345678").is_err());
        assert!(password("Secret 12").is_err());
        assert!(password("        ").is_err());
        assert!(password("a1b2c3d4e5f6g7h8i9j0k1l2m9").is_err());
    }

    #[test]
    fn not_blank_rejects_whitespace_only() {
        assert!(not_blank("x").is_ok());
        assert!(not_blank("").is_err());
        assert!(not_blank("   ").is_err());
    }

    #[test]
    fn future_rejects_past_and_present() {
        assert!(future(&(Utc::now() + Duration::days(1))).is_ok());
        assert!(future(&(Utc::now() - Duration::seconds(1))).is_err());
    }
}
