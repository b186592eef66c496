//! OTP repository trait for short-lived verification codes.

use async_trait::async_trait;

use crate::domain::entities::otp::OtpRecord;
use crate::errors::DomainError;

/// Repository trait for one-time-passcode persistence
///
/// The store keeps at most one live code per email (the issuing flow deletes
/// prior records first) and purges records whose expiry has passed. A lookup
/// must still return an expired record when it exists so the verification
/// flow can distinguish "expired" from "never issued"; purging happens on
/// write paths, not reads. A verified record stays behind after successful
/// verification so replaying the same code reports "already used".
#[async_trait]
pub trait OtpRepository: Send + Sync {
    /// Find a record matching both email and code
    async fn find_by_email_and_code(
        &self,
        email: &str,
        code: &str,
    ) -> Result<Option<OtpRecord>, DomainError>;

    /// Store a new record
    async fn create(&self, record: OtpRecord) -> Result<OtpRecord, DomainError>;

    /// Persist changes to an existing record (e.g. the verified flag)
    async fn update(&self, record: OtpRecord) -> Result<OtpRecord, DomainError>;

    /// Delete every record issued to an email; returns the number removed
    async fn delete_for_email(&self, email: &str) -> Result<u64, DomainError>;

    /// Delete the unverified records for an email, keeping verified ones;
    /// returns the number removed
    async fn delete_unverified_for_email(&self, email: &str) -> Result<u64, DomainError>;

    /// Remove expired records; returns the number purged
    async fn purge_expired(&self) -> Result<u64, DomainError>;
}
