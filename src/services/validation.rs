//! Form field validation for school registration.
//!
//! Mirrors what the add-school form enforces client-side, so the server is
//! the authority and the form is only a convenience.

use crate::error::AppError;

/// Unwraps a required text field, trimming surrounding whitespace.
///
/// A missing or blank field becomes a `400 Bad Request`.
pub fn required(field: &'static str, value: Option<String>) -> Result<String, AppError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v.trim().to_string()),
        _ => Err(AppError::BadRequest(format!("field {field} is required"))),
    }
}

/// Accepts addresses shaped like `local@domain.tld`: one `@`, a non-empty
/// local part, a dotted domain with non-empty labels, no whitespace anywhere.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = email.splitn(2, '@');
    let (Some(local), Some(domain)) = (parts.next(), parts.next()) else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && domain.split('.').all(|label| !label.is_empty())
}

/// Contact numbers are digits only and at least 10 digits long.
pub fn is_valid_contact(contact: &str) -> bool {
    contact.len() >= 10 && contact.chars().all(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_trims_and_accepts() {
        assert_eq!(required("name", Some("  Green Valley ".into())).unwrap(), "Green Valley");
    }

    #[test]
    fn required_rejects_missing_and_blank() {
        assert!(required("name", None).is_err());
        assert!(required("name", Some("   ".into())).is_err());
    }

    #[test]
    fn email_shapes() {
        assert!(is_valid_email("office@example.edu"));
        assert!(is_valid_email("a.b+c@mail.example.co.in"));
        assert!(!is_valid_email("no-at-sign.example.com"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("office@example"));
        assert!(!is_valid_email("office@.com"));
        assert!(!is_valid_email("office@example.com."));
        assert!(!is_valid_email("a@b..com"));
        assert!(!is_valid_email("off ice@example.com"));
        assert!(!is_valid_email("a@b@example.com"));
    }

    #[test]
    fn contact_numbers() {
        assert!(is_valid_contact("9876543210"));
        assert!(is_valid_contact("02212345678"));
        assert!(!is_valid_contact("12345"));
        assert!(!is_valid_contact("98765-43210"));
        assert!(!is_valid_contact("987654321O"));
    }
}
