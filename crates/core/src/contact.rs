//! Contact form submission schema and its validation rules.
//!
//! Missing fields deserialize to empty strings so that absence and blankness
//! are reported the same way: as a field-level validation error rather than
//! a body-parsing failure.

use std::borrow::Cow;

use serde::Deserialize;
use validator::{Validate, ValidationError};

/// Body of `POST /api/contact`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ContactSubmission {
    #[serde(default)]
    #[validate(custom(function = "not_blank"))]
    pub name: String,

    #[serde(default)]
    #[validate(
        email(message = "must be a valid email address"),
        custom(function = "no_nul")
    )]
    pub email: String,

    #[serde(default)]
    #[validate(custom(function = "not_blank"))]
    pub message: String,
}

/// Reject empty and whitespace-only strings, and anything [`no_nul`] rejects.
///
/// The value itself is stored untrimmed; only the check ignores whitespace.
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    no_nul(value)?;
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank").with_message(Cow::Borrowed("must not be empty")));
    }
    Ok(())
}

/// Reject strings containing U+0000. Postgres `TEXT` cannot store it.
pub fn no_nul(value: &str) -> Result<(), ValidationError> {
    if value.contains('\0') {
        return Err(ValidationError::new("nul")
            .with_message(Cow::Borrowed("must not contain NUL characters")));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission(name: &str, email: &str, message: &str) -> ContactSubmission {
        ContactSubmission {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        }
    }

    fn failing_fields(input: &ContactSubmission) -> Vec<String> {
        let errors = input.validate().expect_err("expected validation to fail");
        let mut fields: Vec<String> = errors
            .field_errors()
            .keys()
            .map(|k| k.to_string())
            .collect();
        fields.sort();
        fields
    }

    #[test]
    fn accepts_well_formed_submission() {
        let input = submission(
            "Sarah Johnson",
            "sarah.johnson@email.com",
            "Hi! I'd love to talk about a wedding shoot.",
        );
        assert!(input.validate().is_ok());
    }

    #[test]
    fn rejects_malformed_email() {
        let input = submission("Sarah", "invalid-email", "Hello");
        assert_eq!(failing_fields(&input), vec!["email"]);
    }

    #[test]
    fn rejects_empty_name_and_message() {
        let input = submission("", "a@example.com", "");
        assert_eq!(failing_fields(&input), vec!["message", "name"]);
    }

    #[test]
    fn whitespace_only_counts_as_empty() {
        let input = submission("   ", "a@example.com", "\n\t");
        assert_eq!(failing_fields(&input), vec!["message", "name"]);
    }

    #[test]
    fn missing_fields_are_reported_per_field() {
        let input: ContactSubmission = serde_json::from_str(r#"{"name": "Sarah"}"#).unwrap();
        assert_eq!(failing_fields(&input), vec!["email", "message"]);
    }

    #[test]
    fn surrounding_whitespace_is_preserved() {
        let input = submission("  Sarah  ", "a@example.com", " hi ");
        assert!(input.validate().is_ok());
        assert_eq!(input.name, "  Sarah  ");
    }

    #[test]
    fn nul_characters_are_rejected_in_every_field() {
        let input = submission("Sar\0ah", "a\0@example.com", "Hello\0");
        assert_eq!(failing_fields(&input), vec!["email", "message", "name"]);
    }

    #[test]
    fn nul_error_carries_message() {
        let err = not_blank("a\0b").unwrap_err();
        assert_eq!(err.code, "nul");
        assert_eq!(err.message.as_deref(), Some("must not contain NUL characters"));
        assert!(no_nul("plain text").is_ok());
    }

    #[test]
    fn blank_error_carries_message() {
        let err = not_blank(" ").unwrap_err();
        assert_eq!(err.code, "blank");
        assert_eq!(err.message.as_deref(), Some("must not be empty"));
    }
}
