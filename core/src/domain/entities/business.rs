//! Vendor business / KYC entities.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Review status of a submitted business record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BusinessStatus {
    Pending,
    Approved,
    Rejected,
}

impl BusinessStatus {
    /// Database representation of the status
    pub fn as_str(&self) -> &'static str {
        match self {
            BusinessStatus::Pending => "pending",
            BusinessStatus::Approved => "approved",
            BusinessStatus::Rejected => "rejected",
        }
    }

    /// Parse a status from its string representation
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "pending" => Some(BusinessStatus::Pending),
            "approved" => Some(BusinessStatus::Approved),
            "rejected" => Some(BusinessStatus::Rejected),
            _ => None,
        }
    }
}

/// Business-verification (KYC) record submitted by a vendor
///
/// Attached to vendor login responses with the reviewer identity already
/// resolved to a display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessRecord {
    /// Unique identifier for the record
    pub id: Uuid,

    /// Vendor this record belongs to
    pub vendor_id: Uuid,

    /// Registered business name
    pub business_name: String,

    /// Government registration number
    pub registration_number: String,

    /// Review status
    pub status: BusinessStatus,

    /// Staff member who reviewed the record, if any
    pub reviewed_by: Option<Uuid>,

    /// Resolved display name of the reviewer
    pub reviewer_name: Option<String>,

    /// Timestamp when the record was submitted
    pub created_at: DateTime<Utc>,
}

impl BusinessRecord {
    /// Whether the record has passed review
    pub fn is_approved(&self) -> bool {
        self.status == BusinessStatus::Approved
    }
}
