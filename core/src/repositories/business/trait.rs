//! Business repository trait for vendor KYC records.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::business::BusinessRecord;
use crate::errors::DomainError;

/// Repository trait for vendor business / KYC records
#[async_trait]
pub trait BusinessRepository: Send + Sync {
    /// All records submitted by a vendor, newest first, with reviewer
    /// identities resolved to display names
    async fn find_by_vendor(&self, vendor_id: Uuid) -> Result<Vec<BusinessRecord>, DomainError>;
}
