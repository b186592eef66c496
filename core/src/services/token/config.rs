//! Configuration for the token service

use vendora_shared::config::JwtConfig;

/// Configuration for the token service
///
/// Access and refresh tokens are signed with separate secrets so a
/// leaked access secret cannot be used to mint refresh tokens.
#[derive(Debug, Clone)]
pub struct TokenServiceConfig {
    /// Secret used to sign access tokens
    pub access_secret: String,
    /// Secret used to sign refresh tokens
    pub refresh_secret: String,
    /// Access token lifetime in seconds
    pub access_token_expiry_secs: i64,
    /// Refresh token lifetime in seconds
    pub refresh_token_expiry_secs: i64,
}

impl Default for TokenServiceConfig {
    fn default() -> Self {
        Self {
            access_secret: "development-access-secret-change-in-production".to_string(),
            refresh_secret: "development-refresh-secret-change-in-production".to_string(),
            access_token_expiry_secs: 15 * 60,
            refresh_token_expiry_secs: 7 * 24 * 60 * 60,
        }
    }
}

impl From<&JwtConfig> for TokenServiceConfig {
    fn from(config: &JwtConfig) -> Self {
        Self {
            access_secret: config.access_secret.clone(),
            refresh_secret: config.refresh_secret.clone(),
            access_token_expiry_secs: config.access_token_expiry,
            refresh_token_expiry_secs: config.refresh_token_expiry,
        }
    }
}
