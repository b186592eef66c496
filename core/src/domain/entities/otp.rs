//! One-time-passcode entity for email-based verification.

use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Length of the verification code
pub const CODE_LENGTH: usize = 6;

/// Default expiration time for verification codes (10 minutes)
pub const DEFAULT_EXPIRY_MINUTES: i64 = 10;

/// One-time passcode issued to an email address during registration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OtpRecord {
    /// Unique identifier for the record
    pub id: Uuid,

    /// Email address this code was issued to
    pub email: String,

    /// The 6-digit verification code
    pub code: String,

    /// Timestamp when the code was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the code expires
    pub expires_at: DateTime<Utc>,

    /// Whether the code has been successfully used
    pub is_verified: bool,
}

impl OtpRecord {
    /// Creates a new code for an email with the default expiry window
    pub fn new(email: String) -> Self {
        Self::new_with_expiry(email, DEFAULT_EXPIRY_MINUTES)
    }

    /// Creates a new code with a custom expiry window in minutes
    pub fn new_with_expiry(email: String, expiry_minutes: i64) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            email,
            code: Self::generate_code(),
            created_at: now,
            expires_at: now + Duration::minutes(expiry_minutes),
            is_verified: false,
        }
    }

    /// Generates a random 6-digit code in [100000, 999999]
    ///
    /// The lower bound excludes zero-padded codes so every code renders as
    /// exactly six digits everywhere, including in plain-text email bodies.
    pub fn generate_code() -> String {
        let mut rng = rand::thread_rng();
        rng.gen_range(100_000..=999_999).to_string()
    }

    /// Checks whether the code has expired (strict, no grace window)
    pub fn is_expired(&self) -> bool {
        Utc::now() > self.expires_at
    }

    /// Marks the code as used
    pub fn mark_verified(&mut self) {
        self.is_verified = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;
    use std::time::Duration as StdDuration;

    #[test]
    fn test_new_record() {
        let record = OtpRecord::new("alice@example.com".to_string());
        assert_eq!(record.email, "alice@example.com");
        assert_eq!(record.code.len(), CODE_LENGTH);
        assert!(!record.is_verified);
        assert!(!record.is_expired());
        assert_eq!(
            record.expires_at,
            record.created_at + Duration::minutes(DEFAULT_EXPIRY_MINUTES)
        );
    }

    #[test]
    fn test_generated_codes_are_six_digits_in_range() {
        for _ in 0..500 {
            let code = OtpRecord::generate_code();
            assert_eq!(code.len(), CODE_LENGTH);
            let value: u32 = code.parse().expect("code should be numeric");
            assert!((100_000..=999_999).contains(&value));
        }
    }

    #[test]
    fn test_code_uniqueness() {
        let codes: std::collections::HashSet<String> =
            (0..100).map(|_| OtpRecord::generate_code()).collect();
        assert!(codes.len() > 1);
    }

    #[test]
    fn test_custom_expiry() {
        let record = OtpRecord::new_with_expiry("a@x.com".to_string(), 3);
        assert_eq!(record.expires_at, record.created_at + Duration::minutes(3));
    }

    #[test]
    fn test_expired_record_is_rejected() {
        let record = OtpRecord::new_with_expiry("a@x.com".to_string(), 0);
        thread::sleep(StdDuration::from_millis(10));
        assert!(record.is_expired());
    }

    #[test]
    fn test_mark_verified() {
        let mut record = OtpRecord::new("a@x.com".to_string());
        record.mark_verified();
        assert!(record.is_verified);
    }
}
