//! User entity representing an account on the Vendora platform.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{DomainError, TokenError};

/// Role assigned to an account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// A regular shopper
    User,
    /// A seller with reviewed KYC records
    Vendor,
    /// Platform administrator
    Admin,
    /// The single platform owner account
    SuperAdmin,
    /// Sales staff provisioned by admins
    Salesperson,
}

impl UserRole {
    /// Database and claims representation of the role
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::User => "user",
            UserRole::Vendor => "vendor",
            UserRole::Admin => "admin",
            UserRole::SuperAdmin => "superadmin",
            UserRole::Salesperson => "salesperson",
        }
    }

    /// Parse a role from its string representation
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "user" => Some(UserRole::User),
            "vendor" => Some(UserRole::Vendor),
            "admin" => Some(UserRole::Admin),
            "superadmin" => Some(UserRole::SuperAdmin),
            "salesperson" => Some(UserRole::Salesperson),
            _ => None,
        }
    }

    /// Whether the role is provisioned by staff rather than self-registered
    pub fn is_staff(&self) -> bool {
        matches!(
            self,
            UserRole::Admin | UserRole::SuperAdmin | UserRole::Salesperson
        )
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// User entity representing a registered account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier for the user
    pub id: Uuid,

    /// Display name
    pub name: String,

    /// Email address (unique across the platform)
    pub email: String,

    /// Ten-digit phone number
    pub phone: String,

    /// Bcrypt hash of the password
    pub password_hash: String,

    /// Role assigned to the account
    pub role: UserRole,

    /// Whether the email address has been verified
    pub is_verified: bool,

    /// Timestamp when the user was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the user was last updated
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Creates a new User instance
    ///
    /// Self-registered users start unverified; staff-provisioned accounts
    /// are created with `is_verified` already set by the caller.
    pub fn new(
        name: String,
        email: String,
        phone: String,
        password_hash: String,
        role: UserRole,
        is_verified: bool,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name,
            email,
            phone,
            password_hash,
            role,
            is_verified,
            created_at: now,
            updated_at: now,
        }
    }

    /// Hash a plaintext password with bcrypt
    pub fn hash_password(plain: &str) -> Result<String, DomainError> {
        bcrypt::hash(plain, bcrypt::DEFAULT_COST).map_err(|e| DomainError::Internal {
            message: format!("Failed to hash password: {}", e),
        })
    }

    /// Compare a plaintext password against the stored hash
    ///
    /// Any bcrypt failure is treated as a mismatch; the login flow must not
    /// leak why a comparison failed.
    pub fn verify_password(&self, plain: &str) -> bool {
        bcrypt::verify(plain, &self.password_hash).unwrap_or(false)
    }

    /// Marks the user as verified
    pub fn verify(&mut self) {
        self.is_verified = true;
        self.updated_at = Utc::now();
    }

    /// Short display identifier derived from the user id
    ///
    /// Uses the first UUID segment, uppercased: `VEN-550E8400`.
    pub fn display_id(&self) -> String {
        let id = self.id.to_string();
        let segment = id.split('-').next().unwrap_or("").to_uppercase();
        format!("VEN-{}", segment)
    }
}

impl std::str::FromStr for UserRole {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        UserRole::parse(s).ok_or(DomainError::Token(TokenError::InvalidToken))
    }
}
