/**
 * Input Validation
 *
 * Signup and login inputs are checked here before any store access.
 *
 * # Signup rules, in order
 *
 * 1. Email and password present and non-empty
 * 2. Email has the `local@domain.tld` shape
 * 3. Password is at least 6 characters long
 *
 * Login only checks presence. It never re-checks format or length.
 */

use crate::backend::auth::{
    INVALID_EMAIL_MESSAGE, MIN_PASSWORD_LENGTH, PASSWORD_TOO_SHORT_MESSAGE, REQUIRED_FIELDS_MESSAGE,
};
use crate::shared::{LoginRequest, SignupRequest, SharedError};

/// Signup input that passed validation
#[derive(Debug, Clone, PartialEq)]
pub struct ValidSignup {
    pub email: String,
    pub password: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// Login input that passed validation
#[derive(Debug, Clone, PartialEq)]
pub struct ValidLogin {
    pub email: String,
    pub password: String,
}

/// Check an email against `^[^\s@]+@[^\s@]+\.[^\s@]+$`
///
/// The address must contain exactly one `@`, no whitespace, a non-empty
/// local part, and a domain with a `.` that has characters on both sides.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }

    // Any dot works as the separator as long as both sides are non-empty.
    domain
        .char_indices()
        .filter(|(_, c)| *c == '.')
        .any(|(i, _)| i > 0 && i + 1 < domain.len())
}

/// Whether a password meets the signup length rule
pub fn is_valid_password(password: &str) -> bool {
    password.chars().count() >= MIN_PASSWORD_LENGTH
}

/// Validate a signup request
pub fn validate_signup(request: SignupRequest) -> Result<ValidSignup, SharedError> {
    let (email, password) = require_credentials(request.email, request.password)?;

    if !is_valid_email(&email) {
        return Err(SharedError::validation("email", INVALID_EMAIL_MESSAGE));
    }

    if !is_valid_password(&password) {
        return Err(SharedError::validation("password", PASSWORD_TOO_SHORT_MESSAGE));
    }

    Ok(ValidSignup {
        email,
        password,
        first_name: normalize_name(request.first_name),
        last_name: normalize_name(request.last_name),
    })
}

/// Validate a login request (presence only)
pub fn validate_login(request: LoginRequest) -> Result<ValidLogin, SharedError> {
    let (email, password) = require_credentials(request.email, request.password)?;
    Ok(ValidLogin { email, password })
}

fn require_credentials(
    email: Option<String>,
    password: Option<String>,
) -> Result<(String, String), SharedError> {
    match (email, password) {
        (Some(email), Some(password)) if !email.is_empty() && !password.is_empty() => {
            Ok((email, password))
        }
        (email, _) => {
            let field = if email.as_deref().map_or(true, str::is_empty) {
                "email"
            } else {
                "password"
            };
            Err(SharedError::validation(field, REQUIRED_FIELDS_MESSAGE))
        }
    }
}

/// Blank names are stored as absent
fn normalize_name(name: Option<String>) -> Option<String> {
    name.filter(|n| !n.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_accepts_basic_emails() {
        assert!(is_valid_email("john@example.com"));
        assert!(is_valid_email("a@b.c"));
        assert!(is_valid_email("first.last@sub.domain.org"));
        assert!(is_valid_email("a@b..c"));
    }

    #[test]
    fn test_rejects_malformed_emails() {
        assert!(!is_valid_email("invalid-email"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("john@"));
        assert!(!is_valid_email("john@example"));
        assert!(!is_valid_email("john@.com"));
        assert!(!is_valid_email("john@example."));
        assert!(!is_valid_email("jo hn@example.com"));
        assert!(!is_valid_email("john@@example.com"));
        assert!(!is_valid_email("john@exa@mple.com"));
        assert!(!is_valid_email("john@example.com\n"));
    }

    #[test]
    fn test_password_length_counts_characters() {
        assert!(!is_valid_password("12345"));
        assert!(is_valid_password("123456"));
        assert!(is_valid_password("ééééé1"));
    }

    #[test]
    fn test_signup_requires_both_fields() {
        let err = validate_signup(SignupRequest {
            email: Some("a@b.co".into()),
            ..Default::default()
        })
        .unwrap_err();
        assert_eq!(err.message(), REQUIRED_FIELDS_MESSAGE);

        let err = validate_signup(SignupRequest::new("", "password123")).unwrap_err();
        assert_eq!(err.message(), REQUIRED_FIELDS_MESSAGE);
    }

    #[test]
    fn test_signup_presence_checked_before_format() {
        let err = validate_signup(SignupRequest::new("not-an-email", "")).unwrap_err();
        assert_eq!(err.message(), REQUIRED_FIELDS_MESSAGE);
    }

    #[test]
    fn test_signup_format_checked_before_length() {
        let err = validate_signup(SignupRequest::new("not-an-email", "123")).unwrap_err();
        assert_eq!(err.message(), INVALID_EMAIL_MESSAGE);
    }

    #[test]
    fn test_signup_short_password() {
        let err = validate_signup(SignupRequest::new("a@b.co", "12345")).unwrap_err();
        assert_eq!(err.message(), PASSWORD_TOO_SHORT_MESSAGE);
    }

    #[test]
    fn test_signup_blank_names_become_absent() {
        let valid = validate_signup(
            SignupRequest::new("a@b.co", "123456")
                .with_names(Some("  ".into()), Some("Smith".into())),
        )
        .unwrap();
        assert_eq!(valid.first_name, None);
        assert_eq!(valid.last_name.as_deref(), Some("Smith"));
    }

    #[test]
    fn test_login_skips_format_and_length() {
        let valid = validate_login(LoginRequest::new("whatever", "x")).unwrap();
        assert_eq!(valid.email, "whatever");
        assert_eq!(valid.password, "x");
    }

    #[test]
    fn test_login_requires_both_fields() {
        let err = validate_login(LoginRequest {
            email: None,
            password: Some("password123".into()),
        })
        .unwrap_err();
        assert_eq!(err.message(), REQUIRED_FIELDS_MESSAGE);
    }

    proptest! {
        #[test]
        fn prop_simple_addresses_are_valid(
            local in "[a-z0-9._%+-]{1,20}",
            domain in "[a-z0-9-]{1,20}",
            tld in "[a-z]{2,6}",
        ) {
            let email = format!("{local}@{domain}.{tld}");
            prop_assert!(is_valid_email(&email));
        }

        #[test]
        fn prop_no_at_sign_is_invalid(s in "[^@]{0,40}") {
            prop_assert!(!is_valid_email(&s));
        }

        #[test]
        fn prop_whitespace_is_invalid(
            local in "[a-z]{1,10}",
            ws in "[ \t\n]",
            domain in "[a-z]{1,10}",
        ) {
            let email = format!("{local}{ws}@{domain}.com");
            prop_assert!(!is_valid_email(&email));
        }

        #[test]
        fn prop_short_passwords_rejected(p in ".{0,5}") {
            let err = validate_signup(SignupRequest::new("a@b.co", p.clone())).unwrap_err();
            let expected = if p.is_empty() {
                REQUIRED_FIELDS_MESSAGE
            } else {
                PASSWORD_TOO_SHORT_MESSAGE
            };
            prop_assert_eq!(err.message(), expected);
        }
    }
}
