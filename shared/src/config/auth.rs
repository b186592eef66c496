//! Authentication configuration: JWT signing and OTP validity

use serde::{Deserialize, Serialize};

/// JWT authentication configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// Secret key for signing access tokens
    pub access_secret: String,

    /// Secret key for signing refresh tokens
    pub refresh_secret: String,

    /// Access token expiry time in seconds
    pub access_token_expiry: i64,

    /// Refresh token expiry time in seconds
    pub refresh_token_expiry: i64,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            access_secret: String::from("access-secret-change-in-production"),
            refresh_secret: String::from("refresh-secret-change-in-production"),
            access_token_expiry: 900,     // 15 minutes
            refresh_token_expiry: 604800, // 7 days
        }
    }
}

impl JwtConfig {
    /// Load configuration from environment variables
    ///
    /// Reads `JWT_ACCESS_SECRET`, `JWT_REFRESH_SECRET`,
    /// `JWT_ACCESS_TOKEN_EXPIRY` and `JWT_REFRESH_TOKEN_EXPIRY`.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            access_secret: std::env::var("JWT_ACCESS_SECRET").unwrap_or(defaults.access_secret),
            refresh_secret: std::env::var("JWT_REFRESH_SECRET").unwrap_or(defaults.refresh_secret),
            access_token_expiry: std::env::var("JWT_ACCESS_TOKEN_EXPIRY")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.access_token_expiry),
            refresh_token_expiry: std::env::var("JWT_REFRESH_TOKEN_EXPIRY")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.refresh_token_expiry),
        }
    }

    /// Check if the default secrets are still in use (security warning)
    pub fn is_using_default_secrets(&self) -> bool {
        self.access_secret == "access-secret-change-in-production"
            || self.refresh_secret == "refresh-secret-change-in-production"
    }
}

/// One-time-passcode configuration
#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
pub struct OtpConfig {
    /// Validity window for issued codes, in minutes
    pub expiry_minutes: i64,
}

impl Default for OtpConfig {
    fn default() -> Self {
        Self { expiry_minutes: 10 }
    }
}

impl OtpConfig {
    /// Load configuration from the `OTP_EXPIRY_MINUTES` environment variable
    pub fn from_env() -> Self {
        Self {
            expiry_minutes: std::env::var("OTP_EXPIRY_MINUTES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
        }
    }
}
