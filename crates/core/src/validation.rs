//! Input validation helpers.
//!
//! The `validate_*` functions returning [`ValidationError`] plug into
//! `#[validate(custom(function = ...))]` on request bodies; the others are
//! cross-field checks called directly by handlers.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;
use validator::{ValidationError, ValidationErrors};

use crate::error::CoreError;
use crate::types::Date;

/// Minimum accepted password length.
pub const MIN_PASSWORD_LENGTH: usize = 8;

static LETTERS_AND_SPACES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z ]*[A-Za-z][A-Za-z ]*$").expect("valid regex"));

/// Department and designation names: letters and spaces only, at least one
/// letter, no digits or symbols.
pub fn validate_letters_and_spaces(value: &str) -> Result<(), ValidationError> {
    if LETTERS_AND_SPACES.is_match(value) {
        Ok(())
    } else {
        Err(ValidationError::new("letters_and_spaces")
            .with_message(Cow::Borrowed("Special characters and digits are not allowed")))
    }
}

/// Reject empty or whitespace-only strings.
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::new("blank").with_message(Cow::Borrowed("must not be blank")))
    } else {
        Ok(())
    }
}

/// Validate that a password meets the minimum length.
pub fn validate_password_strength(password: &str) -> Result<(), ValidationError> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(ValidationError::new("password_length").with_message(Cow::Owned(format!(
            "Password must be at least {MIN_PASSWORD_LENGTH} characters long"
        ))));
    }
    Ok(())
}

/// `start` must not be after `end` when both are present.
pub fn validate_date_range(
    start_label: &str,
    start: Option<Date>,
    end_label: &str,
    end: Option<Date>,
) -> Result<(), CoreError> {
    match (start, end) {
        (Some(s), Some(e)) if s > e => Err(CoreError::Validation(format!(
            "{end_label} ({e}) must not be before {start_label} ({s})"
        ))),
        _ => Ok(()),
    }
}

/// Trim every name, drop blank entries and duplicates, keep first-seen order.
pub fn normalize_names(names: &[String]) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(names.len());
    for name in names {
        let trimmed = name.trim();
        if trimmed.is_empty() || out.iter().any(|n| n == trimmed) {
            continue;
        }
        out.push(trimmed.to_string());
    }
    out
}

/// Flatten `validator` errors into a single human-readable message.
///
/// Produces `field: message` pairs joined by `; `, sorted by field name so
/// the output is stable.
pub fn describe_errors(errors: &ValidationErrors) -> String {
    let mut parts: Vec<String> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| {
                let msg = e
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| e.code.to_string());
                format!("{field}: {msg}")
            })
        })
        .collect();
    parts.sort();
    parts.join("; ")
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use validator::Validate;

    use super::*;

    #[derive(Validate)]
    struct NamedThing {
        #[validate(
            length(min = 3, max = 50),
            custom(function = "validate_letters_and_spaces")
        )]
        name: String,
    }

    #[test]
    fn letters_and_spaces_accepts_plain_names() {
        assert!(validate_letters_and_spaces("Human Resources").is_ok());
    }

    #[test]
    fn letters_and_spaces_rejects_digits_and_symbols() {
        assert!(validate_letters_and_spaces("R&D").is_err());
        assert!(validate_letters_and_spaces("Team 42").is_err());
        assert!(validate_letters_and_spaces("").is_err());
    }

    #[test]
    fn letters_and_spaces_requires_a_letter() {
        assert!(validate_letters_and_spaces("   ").is_err());
        assert!(validate_letters_and_spaces(" ").is_err());
    }

    #[test]
    fn blank_strings_rejected() {
        assert!(validate_not_blank("   ").is_err());
        assert!(validate_not_blank("Rust").is_ok());
    }

    #[test]
    fn password_minimum_length() {
        assert!(validate_password_strength("short").is_err());
        assert!(validate_password_strength("exactly8").is_ok());
    }

    #[test]
    fn date_range_rejects_inverted_dates() {
        let start = Date::from_ymd_opt(2024, 5, 10);
        let end = Date::from_ymd_opt(2024, 5, 1);
        assert_matches!(
            validate_date_range("start_date", start, "end_date", end),
            Err(CoreError::Validation(msg)) if msg.contains("end_date")
        );
    }

    #[test]
    fn date_range_allows_open_or_equal_ranges() {
        let day = Date::from_ymd_opt(2024, 5, 10);
        assert!(validate_date_range("a", day, "b", day).is_ok());
        assert!(validate_date_range("a", day, "b", None).is_ok());
        assert!(validate_date_range("a", None, "b", None).is_ok());
    }

    #[test]
    fn normalize_names_trims_and_dedupes() {
        let input = vec![
            " Rust ".to_string(),
            "".to_string(),
            "Go".to_string(),
            "Rust".to_string(),
            "   ".to_string(),
        ];
        assert_eq!(normalize_names(&input), vec!["Rust", "Go"]);
    }

    #[test]
    fn describe_errors_names_the_field() {
        let thing = NamedThing {
            name: "R2".to_string(),
        };
        let errors = thing.validate().unwrap_err();
        let message = describe_errors(&errors);
        assert!(message.starts_with("name: "), "got: {message}");
        assert!(message.contains("Special characters"), "got: {message}");
    }
}
