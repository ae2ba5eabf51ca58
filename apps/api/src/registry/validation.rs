use crate::errors::AppError;

pub const FIELDS_REQUIRED: &str = "All fields are required";

/// Fails unless every field is non-empty after trimming.
pub fn require_fields(fields: &[(&str, &str)]) -> Result<(), AppError> {
    let missing: Vec<&str> = fields
        .iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| *name)
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(AppError::Validation(format!(
            "{FIELDS_REQUIRED} (missing: {})",
            missing.join(", ")
        )))
    }
}

/// Minimal shape check: one `@` with text on both sides and no spaces.
pub fn validate_email(email: &str) -> Result<(), AppError> {
    let email = email.trim();
    let valid = match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !email.contains(char::is_whitespace)
        }
        None => false,
    };

    if valid {
        Ok(())
    } else {
        Err(AppError::Validation(format!(
            "'{email}' is not a valid email address"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_present() {
        assert!(require_fields(&[("name", "Asha"), ("place", "Pune")]).is_ok());
    }

    #[test]
    fn test_blank_counts_as_missing() {
        match require_fields(&[("name", "Asha"), ("phone", "  "), ("place", "")]) {
            Err(AppError::Validation(msg)) => {
                assert!(msg.starts_with(FIELDS_REQUIRED));
                assert!(msg.contains("phone, place"));
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_emails() {
        assert!(validate_email("asha@school.edu").is_ok());
        assert!(validate_email(" asha@school.edu ").is_ok());
        assert!(validate_email("asha").is_err());
        assert!(validate_email("@school.edu").is_err());
        assert!(validate_email("asha@").is_err());
        assert!(validate_email("a@b@c").is_err());
        assert!(validate_email("as ha@school.edu").is_err());
    }
}
