//! MySQL implementation of the BusinessRepository trait.
//!
//! Expected schema:
//!
//! ```sql
//! CREATE TABLE businesses (
//!     id                  CHAR(36)     PRIMARY KEY,
//!     vendor_id           CHAR(36)     NOT NULL,
//!     business_name       VARCHAR(255) NOT NULL,
//!     registration_number VARCHAR(100) NOT NULL,
//!     status              VARCHAR(20)  NOT NULL DEFAULT 'pending',
//!     reviewed_by         CHAR(36)     NULL,
//!     created_at          TIMESTAMP    NOT NULL,
//!     INDEX idx_businesses_vendor (vendor_id)
//! );
//! ```
//!
//! Reviewer names are resolved with a join against `users` so the login
//! response can show who reviewed each record.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use vendora_core::domain::entities::business::{BusinessRecord, BusinessStatus};
use vendora_core::errors::DomainError;
use vendora_core::repositories::BusinessRepository;

/// MySQL implementation of BusinessRepository
pub struct MySqlBusinessRepository {
    pool: MySqlPool,
}

impl MySqlBusinessRepository {
    /// Create a new MySQL business repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_record(row: &sqlx::mysql::MySqlRow) -> Result<BusinessRecord, DomainError> {
        let id: String = row.try_get("id").map_err(|e| DomainError::Database {
            message: format!("Failed to get id: {}", e),
        })?;
        let vendor_id: String = row.try_get("vendor_id").map_err(|e| DomainError::Database {
            message: format!("Failed to get vendor_id: {}", e),
        })?;
        let status: String = row.try_get("status").map_err(|e| DomainError::Database {
            message: format!("Failed to get status: {}", e),
        })?;
        let reviewed_by: Option<String> =
            row.try_get("reviewed_by").map_err(|e| DomainError::Database {
                message: format!("Failed to get reviewed_by: {}", e),
            })?;

        Ok(BusinessRecord {
            id: Uuid::parse_str(&id).map_err(|e| DomainError::Database {
                message: format!("Invalid UUID: {}", e),
            })?,
            vendor_id: Uuid::parse_str(&vendor_id).map_err(|e| DomainError::Database {
                message: format!("Invalid UUID: {}", e),
            })?,
            business_name: row
                .try_get("business_name")
                .map_err(|e| DomainError::Database {
                    message: format!("Failed to get business_name: {}", e),
                })?,
            registration_number: row
                .try_get("registration_number")
                .map_err(|e| DomainError::Database {
                    message: format!("Failed to get registration_number: {}", e),
                })?,
            status: BusinessStatus::parse(&status).ok_or_else(|| DomainError::Database {
                message: format!("Unknown status in businesses table: {}", status),
            })?,
            reviewed_by: reviewed_by
                .map(|s| {
                    Uuid::parse_str(&s).map_err(|e| DomainError::Database {
                        message: format!("Invalid UUID: {}", e),
                    })
                })
                .transpose()?,
            reviewer_name: row
                .try_get("reviewer_name")
                .map_err(|e| DomainError::Database {
                    message: format!("Failed to get reviewer_name: {}", e),
                })?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| DomainError::Database {
                    message: format!("Failed to get created_at: {}", e),
                })?,
        })
    }
}

#[async_trait]
impl BusinessRepository for MySqlBusinessRepository {
    async fn find_by_vendor(&self, vendor_id: Uuid) -> Result<Vec<BusinessRecord>, DomainError> {
        let query = r#"
            SELECT b.id, b.vendor_id, b.business_name, b.registration_number,
                   b.status, b.reviewed_by, u.name AS reviewer_name, b.created_at
            FROM businesses b
            LEFT JOIN users u ON u.id = b.reviewed_by
            WHERE b.vendor_id = ?
            ORDER BY b.created_at DESC
        "#;

        let rows = sqlx::query(query)
            .bind(vendor_id.to_string())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Database query failed: {}", e),
            })?;

        rows.iter().map(Self::row_to_record).collect()
    }
}
