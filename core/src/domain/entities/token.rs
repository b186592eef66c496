//! Token entities for JWT-based authentication.

use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::user::UserRole;

/// JWT issuer
pub const JWT_ISSUER: &str = "vendora";

/// Claims structure for JWT payload
///
/// Both access and refresh tokens carry the user's identity and role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,

    /// Email address of the user
    pub email: String,

    /// Role of the user at issuance time
    pub role: String,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,

    /// Issuer
    pub iss: String,

    /// JWT ID (unique identifier for the token)
    pub jti: String,
}

impl Claims {
    /// Creates claims for a token expiring `ttl_seconds` from now
    pub fn new(user_id: Uuid, email: &str, role: UserRole, ttl_seconds: i64) -> Self {
        let now = Utc::now();
        let expiry = now + Duration::seconds(ttl_seconds);
        Self {
            sub: user_id.to_string(),
            email: email.to_string(),
            role: role.as_str().to_string(),
            iat: now.timestamp(),
            exp: expiry.timestamp(),
            iss: JWT_ISSUER.to_string(),
            jti: Uuid::new_v4().to_string(),
        }
    }

    /// Checks if the claims have expired
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }

    /// Gets the user ID from the claims
    pub fn user_id(&self) -> Result<Uuid, uuid::Error> {
        Uuid::parse_str(&self.sub)
    }

    /// Gets the role carried by the claims, if it parses
    pub fn user_role(&self) -> Option<UserRole> {
        UserRole::parse(&self.role)
    }
}

/// Pair of signed access and refresh tokens
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    /// Short-lived access token
    pub access_token: String,

    /// Long-lived refresh token
    pub refresh_token: String,

    /// Access token lifetime in seconds
    pub expires_in: i64,
}
