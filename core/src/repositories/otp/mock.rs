//! Mock implementation of OtpRepository for testing

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::otp::OtpRecord;
use crate::errors::DomainError;

use super::trait_::OtpRepository;

/// In-memory OTP store for tests and local development
#[derive(Default)]
pub struct MockOtpRepository {
    records: Arc<RwLock<Vec<OtpRecord>>>,
}

impl MockOtpRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    /// The live code issued to an email, if any
    ///
    /// Test helper for driving the verification flow without intercepting
    /// outbound email.
    pub async fn code_for(&self, email: &str) -> Option<String> {
        let records = self.records.read().await;
        records
            .iter()
            .find(|r| r.email == email)
            .map(|r| r.code.clone())
    }
}

#[async_trait]
impl OtpRepository for MockOtpRepository {
    async fn find_by_email_and_code(
        &self,
        email: &str,
        code: &str,
    ) -> Result<Option<OtpRecord>, DomainError> {
        let records = self.records.read().await;
        Ok(records
            .iter()
            .find(|r| r.email == email && r.code == code)
            .cloned())
    }

    async fn create(&self, record: OtpRecord) -> Result<OtpRecord, DomainError> {
        let mut records = self.records.write().await;
        records.push(record.clone());
        Ok(record)
    }

    async fn update(&self, record: OtpRecord) -> Result<OtpRecord, DomainError> {
        let mut records = self.records.write().await;
        match records.iter_mut().find(|r| r.id == record.id) {
            Some(existing) => {
                *existing = record.clone();
                Ok(record)
            }
            None => Err(DomainError::NotFound {
                resource: "OtpRecord".to_string(),
            }),
        }
    }

    async fn delete_for_email(&self, email: &str) -> Result<u64, DomainError> {
        let mut records = self.records.write().await;
        let before = records.len();
        records.retain(|r| r.email != email);
        Ok((before - records.len()) as u64)
    }

    async fn delete_unverified_for_email(&self, email: &str) -> Result<u64, DomainError> {
        let mut records = self.records.write().await;
        let before = records.len();
        records.retain(|r| r.email != email || r.is_verified);
        Ok((before - records.len()) as u64)
    }

    async fn purge_expired(&self) -> Result<u64, DomainError> {
        let mut records = self.records.write().await;
        let before = records.len();
        records.retain(|r| !r.is_expired());
        Ok((before - records.len()) as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_find_matches_email_and_code_together() {
        let repo = MockOtpRepository::new();
        let record = repo
            .create(OtpRecord::new("a@x.com".to_string()))
            .await
            .unwrap();

        assert!(repo
            .find_by_email_and_code("a@x.com", &record.code)
            .await
            .unwrap()
            .is_some());
        assert!(repo
            .find_by_email_and_code("b@x.com", &record.code)
            .await
            .unwrap()
            .is_none());
        assert!(repo
            .find_by_email_and_code("a@x.com", "000000")
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn test_delete_for_email_removes_all_records() {
        let repo = MockOtpRepository::new();
        repo.create(OtpRecord::new("a@x.com".to_string()))
            .await
            .unwrap();
        repo.create(OtpRecord::new("a@x.com".to_string()))
            .await
            .unwrap();
        repo.create(OtpRecord::new("b@x.com".to_string()))
            .await
            .unwrap();

        assert_eq!(repo.delete_for_email("a@x.com").await.unwrap(), 2);
        assert_eq!(repo.len().await, 1);
    }

    #[tokio::test]
    async fn test_delete_unverified_keeps_verified_records() {
        let repo = MockOtpRepository::new();
        let mut verified = repo
            .create(OtpRecord::new("a@x.com".to_string()))
            .await
            .unwrap();
        verified.mark_verified();
        repo.update(verified).await.unwrap();
        repo.create(OtpRecord::new("a@x.com".to_string()))
            .await
            .unwrap();

        assert_eq!(repo.delete_unverified_for_email("a@x.com").await.unwrap(), 1);
        assert_eq!(repo.len().await, 1);
    }

    #[tokio::test]
    async fn test_purge_expired_keeps_live_records() {
        let repo = MockOtpRepository::new();
        repo.create(OtpRecord::new_with_expiry("a@x.com".to_string(), -1))
            .await
            .unwrap();
        repo.create(OtpRecord::new("b@x.com".to_string()))
            .await
            .unwrap();

        assert_eq!(repo.purge_expired().await.unwrap(), 1);
        assert_eq!(repo.len().await, 1);
    }

    #[tokio::test]
    async fn test_expired_record_still_found_by_lookup() {
        // The verification flow needs the record back to report "expired"
        let repo = MockOtpRepository::new();
        let record = repo
            .create(OtpRecord::new_with_expiry("a@x.com".to_string(), -1))
            .await
            .unwrap();

        let found = repo
            .find_by_email_and_code("a@x.com", &record.code)
            .await
            .unwrap();
        assert!(found.is_some());
        assert!(found.unwrap().is_expired());
    }
}
