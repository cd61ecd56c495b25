use chrono::DateTime;
use validator::{ValidationError, ValidationErrors, ValidationErrorsKind};

pub fn validate_rfc3339(value: &str) -> Result<(), ValidationError> {
    DateTime::parse_from_rfc3339(value)
        .map(|_| ())
        .map_err(|_| ValidationError::new("invalid_datetime").with_message("Invalid datetime".into()))
}

/// First violation as `"<field>: <message>"`, using wire (serde) field
/// names, nested paths joined with `.`.
pub fn first_error(errors: &ValidationErrors) -> String {
    collect(None, errors).unwrap_or_else(|| "Invalid payload".to_string())
}

fn collect(prefix: Option<&str>, errors: &ValidationErrors) -> Option<String> {
    for (field, kind) in errors.errors() {
        let path = match prefix {
            Some(prefix) => format!("{prefix}.{field}"),
            None => field.to_string(),
        };
        match kind {
            ValidationErrorsKind::Field(list) => {
                if let Some(err) = list.first() {
                    let message = err
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| err.code.to_string());
                    return Some(format!("{path}: {message}"));
                }
            }
            ValidationErrorsKind::Struct(inner) => {
                if let Some(found) = collect(Some(&path), inner) {
                    return Some(found);
                }
            }
            ValidationErrorsKind::List(map) => {
                for (index, inner) in map {
                    if let Some(found) = collect(Some(&format!("{path}[{index}]")), inner) {
                        return Some(found);
                    }
                }
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[derive(Validate)]
    struct Inner {
        #[validate(length(min = 1, message = "must not be empty"))]
        label: String,
    }

    #[derive(Validate)]
    struct Outer {
        #[validate(nested)]
        inner: Inner,
    }

    #[test]
    fn test_validate_rfc3339_accepts_offsets() {
        assert!(validate_rfc3339("2026-06-20T14:00:00+02:00").is_ok());
        assert!(validate_rfc3339("2026-06-20T12:00:00Z").is_ok());
    }

    #[test]
    fn test_validate_rfc3339_rejects_garbage() {
        assert!(validate_rfc3339("not-a-date").is_err());
        assert!(validate_rfc3339("2026-06-20").is_err());
        assert!(validate_rfc3339("2026-06-20T14:00:00").is_err());
        // well-formed shape, impossible calendar date
        assert!(validate_rfc3339("2026-02-30T14:00:00Z").is_err());
    }

    #[test]
    fn test_first_error_joins_nested_paths() {
        let outer = Outer {
            inner: Inner {
                label: String::new(),
            },
        };
        let errors = outer.validate().expect_err("should fail validation");
        assert_eq!(first_error(&errors), "inner.label: must not be empty");
    }
}
