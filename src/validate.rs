//! Declarative per-operation validation. Each function checks its fields in
//! declaration order and returns every violated rule as a field/message
//! pair; the caller decides whether to report the first or all of them.

use crate::error::FieldError;

/// Minimal syntactic email check: one `@` with non-empty local and domain
/// parts, and a dot somewhere in the domain.
pub fn is_valid_email(email: &str) -> bool {
    let mut parts = email.split('@');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => {
            !local.is_empty() && !domain.is_empty() && domain.contains('.')
        }
        _ => false,
    }
}

pub fn registration_errors(name: &str, email: &str, password: &str) -> Vec<FieldError> {
    let mut errors = Vec::new();

    if name.chars().count() < 3 {
        errors.push(FieldError::new("name", "Enter a Valid Name"));
    }
    if !is_valid_email(email) {
        errors.push(FieldError::new("email", "Enter a Valid email"));
    }
    if password.chars().count() < 5 {
        errors.push(FieldError::new("password", "Enter a Valid password.minimum of 5"));
    }

    errors
}

pub fn login_errors(email: &str, password: &str) -> Vec<FieldError> {
    let mut errors = Vec::new();

    if !is_valid_email(email) {
        errors.push(FieldError::new("email", "Enter a Valid email"));
    }
    if password.chars().count() < 5 {
        errors.push(FieldError::new(
            "password",
            "Password cannot be blank and should be minimum 5 letters",
        ));
    }

    errors
}

pub fn create_note_errors(title: &str, description: &str) -> Vec<FieldError> {
    let mut errors = Vec::new();

    if title.chars().count() < 3 {
        errors.push(FieldError::new("title", "Title must be at least 3 characters"));
    }
    if description.chars().count() < 5 {
        errors.push(FieldError::new(
            "description",
            "Description must be at least 5 characters",
        ));
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_syntax() {
        assert!(is_valid_email("alice@example.com"));
        assert!(!is_valid_email("alice"));
        assert!(!is_valid_email("alice@"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("alice@example"));
        assert!(!is_valid_email("a@b@c.com"));
    }

    #[test]
    fn registration_errors_keep_declaration_order() {
        let errors = registration_errors("ab", "bad", "1234");
        let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
        assert_eq!(fields, vec!["name", "email", "password"]);
    }

    #[test]
    fn registration_ok_is_empty() {
        assert!(registration_errors("Alice", "alice@example.com", "secret").is_empty());
    }

    #[test]
    fn login_password_rule() {
        let errors = login_errors("alice@example.com", "1234");
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "password");
    }

    #[test]
    fn note_rules() {
        assert!(create_note_errors("Groceries", "Buy milk and eggs").is_empty());
        let errors = create_note_errors("ab", "abc");
        assert_eq!(errors.len(), 2);
    }
}
