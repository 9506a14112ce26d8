//! Input validation policy shared by the record services.

use chrono::{DateTime, NaiveDateTime};

use crate::errors::ValidationError;

/// How strictly incoming records are checked before they reach storage.
///
/// `Permissive` accepts any well-typed input. `Strict` additionally rejects
/// blank text, negative amounts and unparsable timestamps.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ValidationMode {
    #[default]
    Permissive,
    Strict,
}

impl ValidationMode {
    pub fn is_strict(self) -> bool {
        matches!(self, ValidationMode::Strict)
    }
}

const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

pub(crate) fn require_text(field: &str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::MissingField(field.to_string()));
    }
    Ok(())
}

pub(crate) fn require_amount(field: &str, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() || value < 0.0 {
        return Err(ValidationError::InvalidInput(format!(
            "{} must be a non-negative number, got {}",
            field, value
        )));
    }
    Ok(())
}

pub(crate) fn require_non_negative(field: &str, value: i64) -> Result<(), ValidationError> {
    if value < 0 {
        return Err(ValidationError::InvalidInput(format!(
            "{} must not be negative, got {}",
            field, value
        )));
    }
    Ok(())
}

/// Accepts RFC 3339 and the common ISO-8601 local date-time spellings.
pub(crate) fn require_timestamp(field: &str, value: &str) -> Result<(), ValidationError> {
    let value = value.trim();
    if DateTime::parse_from_rfc3339(value).is_ok() {
        return Ok(());
    }
    if NAIVE_FORMATS
        .iter()
        .any(|fmt| NaiveDateTime::parse_from_str(value, fmt).is_ok())
    {
        return Ok(());
    }
    Err(ValidationError::InvalidInput(format!(
        "{} '{}' is not an ISO-8601 date-time",
        field, value
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_iso_timestamps() {
        for ts in [
            "2024-05-01T09:30:00Z",
            "2024-05-01T09:30:00+02:00",
            "2024-05-01T09:30",
            "2024-05-01T09:30:15",
            "2024-05-01 09:30",
        ] {
            assert!(require_timestamp("start_time", ts).is_ok(), "{ts}");
        }
    }

    #[test]
    fn rejects_free_form_timestamps() {
        for ts in ["tomorrow morning", "2024-13-01T09:00", ""] {
            assert!(require_timestamp("start_time", ts).is_err(), "{ts}");
        }
    }

    #[test]
    fn amounts_must_be_finite_and_non_negative() {
        assert!(require_amount("cost", 0.0).is_ok());
        assert!(require_amount("cost", 12.5).is_ok());
        assert!(require_amount("cost", -0.01).is_err());
        assert!(require_amount("cost", f64::NAN).is_err());
        assert!(require_amount("cost", f64::INFINITY).is_err());
    }

    #[test]
    fn blank_text_is_missing() {
        assert_eq!(
            require_text("title", "   "),
            Err(ValidationError::MissingField("title".to_string()))
        );
        assert!(require_text("title", "Louvre").is_ok());
    }
}
