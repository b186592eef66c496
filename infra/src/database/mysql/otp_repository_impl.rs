//! MySQL implementation of the OtpRepository trait.
//!
//! Expected schema:
//!
//! ```sql
//! CREATE TABLE otps (
//!     id          CHAR(36)   PRIMARY KEY,
//!     email       VARCHAR(255) NOT NULL,
//!     code        CHAR(6)    NOT NULL,
//!     created_at  TIMESTAMP  NOT NULL,
//!     expires_at  TIMESTAMP  NOT NULL,
//!     is_verified BOOLEAN    NOT NULL DEFAULT FALSE,
//!     INDEX idx_otps_email (email)
//! );
//! ```
//!
//! Lookups deliberately return expired rows; the verification flow needs
//! them back to distinguish an expired code from one that was never
//! issued. Expired rows are removed by `purge_expired`, which the service
//! calls on its write paths. A verified row outlives its verification so a
//! replayed code is reported as already used rather than unknown.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use vendora_core::domain::entities::otp::OtpRecord;
use vendora_core::errors::DomainError;
use vendora_core::repositories::OtpRepository;

/// MySQL implementation of OtpRepository
pub struct MySqlOtpRepository {
    pool: MySqlPool,
}

impl MySqlOtpRepository {
    /// Create a new MySQL OTP repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert a database row to an OtpRecord
    fn row_to_record(row: &sqlx::mysql::MySqlRow) -> Result<OtpRecord, DomainError> {
        let id: String = row.try_get("id").map_err(|e| DomainError::Database {
            message: format!("Failed to get id: {}", e),
        })?;

        Ok(OtpRecord {
            id: Uuid::parse_str(&id).map_err(|e| DomainError::Database {
                message: format!("Invalid UUID: {}", e),
            })?,
            email: row.try_get("email").map_err(|e| DomainError::Database {
                message: format!("Failed to get email: {}", e),
            })?,
            code: row.try_get("code").map_err(|e| DomainError::Database {
                message: format!("Failed to get code: {}", e),
            })?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| DomainError::Database {
                    message: format!("Failed to get created_at: {}", e),
                })?,
            expires_at: row
                .try_get::<DateTime<Utc>, _>("expires_at")
                .map_err(|e| DomainError::Database {
                    message: format!("Failed to get expires_at: {}", e),
                })?,
            is_verified: row
                .try_get("is_verified")
                .map_err(|e| DomainError::Database {
                    message: format!("Failed to get is_verified: {}", e),
                })?,
        })
    }
}

#[async_trait]
impl OtpRepository for MySqlOtpRepository {
    async fn find_by_email_and_code(
        &self,
        email: &str,
        code: &str,
    ) -> Result<Option<OtpRecord>, DomainError> {
        let query = r#"
            SELECT id, email, code, created_at, expires_at, is_verified
            FROM otps
            WHERE email = ? AND code = ?
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(email)
            .bind(code)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Database query failed: {}", e),
            })?;

        match result {
            Some(row) => Ok(Some(Self::row_to_record(&row)?)),
            None => Ok(None),
        }
    }

    async fn create(&self, record: OtpRecord) -> Result<OtpRecord, DomainError> {
        let query = r#"
            INSERT INTO otps (id, email, code, created_at, expires_at, is_verified)
            VALUES (?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(record.id.to_string())
            .bind(&record.email)
            .bind(&record.code)
            .bind(record.created_at)
            .bind(record.expires_at)
            .bind(record.is_verified)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Failed to create OTP record: {}", e),
            })?;

        Ok(record)
    }

    async fn update(&self, record: OtpRecord) -> Result<OtpRecord, DomainError> {
        let result = sqlx::query("UPDATE otps SET is_verified = ? WHERE id = ?")
            .bind(record.is_verified)
            .bind(record.id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Failed to update OTP record: {}", e),
            })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound {
                resource: "OtpRecord".to_string(),
            });
        }

        Ok(record)
    }

    async fn delete_for_email(&self, email: &str) -> Result<u64, DomainError> {
        let result = sqlx::query("DELETE FROM otps WHERE email = ?")
            .bind(email)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Failed to delete OTP records: {}", e),
            })?;

        Ok(result.rows_affected())
    }

    async fn delete_unverified_for_email(&self, email: &str) -> Result<u64, DomainError> {
        let result = sqlx::query("DELETE FROM otps WHERE email = ? AND is_verified = FALSE")
            .bind(email)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Failed to delete OTP records: {}", e),
            })?;

        Ok(result.rows_affected())
    }

    async fn purge_expired(&self) -> Result<u64, DomainError> {
        let result = sqlx::query("DELETE FROM otps WHERE expires_at < UTC_TIMESTAMP()")
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Failed to purge expired OTP records: {}", e),
            })?;

        let purged = result.rows_affected();
        if purged > 0 {
            tracing::debug!(event = "otp_purge", purged);
        }

        Ok(purged)
    }
}
