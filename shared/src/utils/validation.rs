//! Field validation utilities for registration and login input

use once_cell::sync::Lazy;
use regex::Regex;

/// Minimum accepted password length
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Required number of digits in a phone number
pub const PHONE_DIGITS: usize = 10;

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    // Pragmatic address check, not a full RFC 5322 parser
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").expect("valid email regex")
});

/// Check that an email address is well-formed
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// Check that a phone number is exactly ten ASCII digits
pub fn is_valid_phone(phone: &str) -> bool {
    phone.len() == PHONE_DIGITS && phone.chars().all(|c| c.is_ascii_digit())
}

/// Check that a password satisfies the minimum length requirement
pub fn is_valid_password(password: &str) -> bool {
    password.len() >= MIN_PASSWORD_LENGTH
}

/// Mask an email address for logging
///
/// Keeps the first character of the local part and the full domain:
/// `alice@example.com` becomes `a****@example.com`.
pub fn mask_email(email: &str) -> String {
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() => {
            let first = local.chars().next().unwrap_or('*');
            format!("{}****@{}", first, domain)
        }
        _ => "****".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_emails() {
        assert!(is_valid_email("alice@example.com"));
        assert!(is_valid_email("a.b+tag@sub.example.co"));
    }

    #[test]
    fn test_invalid_emails() {
        assert!(!is_valid_email("alice"));
        assert!(!is_valid_email("alice@"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("alice@example"));
        assert!(!is_valid_email("alice example@example.com"));
    }

    #[test]
    fn test_phone_must_be_ten_digits() {
        assert!(is_valid_phone("1234567890"));
        assert!(!is_valid_phone("123456789"));
        assert!(!is_valid_phone("12345678901"));
        assert!(!is_valid_phone("12345abcde"));
        assert!(!is_valid_phone("+123456789"));
    }

    #[test]
    fn test_password_length() {
        assert!(is_valid_password("password1"));
        assert!(is_valid_password("12345678"));
        assert!(!is_valid_password("1234567"));
    }

    #[test]
    fn test_mask_email() {
        assert_eq!(mask_email("alice@example.com"), "a****@example.com");
        assert_eq!(mask_email("not-an-email"), "****");
    }
}
