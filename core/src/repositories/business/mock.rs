//! Mock implementation of BusinessRepository for testing

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::business::BusinessRecord;
use crate::errors::DomainError;

use super::trait_::BusinessRepository;

/// In-memory business store for tests and local development
#[derive(Default)]
pub struct MockBusinessRepository {
    records: Arc<RwLock<Vec<BusinessRecord>>>,
}

impl MockBusinessRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a record
    pub async fn insert(&self, record: BusinessRecord) {
        self.records.write().await.push(record);
    }
}

#[async_trait]
impl BusinessRepository for MockBusinessRepository {
    async fn find_by_vendor(&self, vendor_id: Uuid) -> Result<Vec<BusinessRecord>, DomainError> {
        let records = self.records.read().await;
        let mut matching: Vec<BusinessRecord> = records
            .iter()
            .filter(|r| r.vendor_id == vendor_id)
            .cloned()
            .collect();
        matching.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(matching)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::business::BusinessStatus;
    use chrono::{Duration, Utc};

    fn record(vendor_id: Uuid, name: &str, age_hours: i64) -> BusinessRecord {
        BusinessRecord {
            id: Uuid::new_v4(),
            vendor_id,
            business_name: name.to_string(),
            registration_number: "REG-001".to_string(),
            status: BusinessStatus::Pending,
            reviewed_by: None,
            reviewer_name: None,
            created_at: Utc::now() - Duration::hours(age_hours),
        }
    }

    #[tokio::test]
    async fn test_find_by_vendor_sorts_newest_first() {
        let repo = MockBusinessRepository::new();
        let vendor = Uuid::new_v4();
        repo.insert(record(vendor, "Older", 48)).await;
        repo.insert(record(vendor, "Newer", 1)).await;
        repo.insert(record(Uuid::new_v4(), "Other vendor", 2)).await;

        let records = repo.find_by_vendor(vendor).await.unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].business_name, "Newer");
        assert_eq!(records[1].business_name, "Older");
    }
}
