//! Configuration for the authentication service

use vendora_shared::config::OtpConfig;

/// Configuration for the authentication service
#[derive(Debug, Clone)]
pub struct AuthServiceConfig {
    /// Validity window for issued verification codes, in minutes
    pub otp_expiry_minutes: i64,
}

impl Default for AuthServiceConfig {
    fn default() -> Self {
        Self {
            otp_expiry_minutes: 10,
        }
    }
}

impl From<&OtpConfig> for AuthServiceConfig {
    fn from(config: &OtpConfig) -> Self {
        Self {
            otp_expiry_minutes: config.expiry_minutes,
        }
    }
}
