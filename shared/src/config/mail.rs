//! Transactional-email API configuration

use serde::{Deserialize, Serialize};

/// Configuration for the external transactional-email API
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MailConfig {
    /// Base URL of the email API endpoint
    pub api_url: String,

    /// API key for authenticating with the email provider
    pub api_key: String,

    /// Sender address placed on outgoing mail
    pub sender_email: String,

    /// Display name for the sender
    pub sender_name: String,

    /// Timeout for API requests in seconds
    pub request_timeout_secs: u64,
}

impl Default for MailConfig {
    fn default() -> Self {
        Self {
            api_url: String::from("https://api.brevo.com/v3/smtp/email"),
            api_key: String::new(),
            sender_email: String::from("no-reply@vendora.shop"),
            sender_name: String::from("Vendora"),
            request_timeout_secs: 30,
        }
    }
}

impl MailConfig {
    /// Load configuration from environment variables
    ///
    /// Reads `MAIL_API_URL`, `MAIL_API_KEY`, `MAIL_SENDER_EMAIL` and
    /// `MAIL_SENDER_NAME`. The API key has no default; wiring code decides
    /// whether a missing key is fatal.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            api_url: std::env::var("MAIL_API_URL").unwrap_or(defaults.api_url),
            api_key: std::env::var("MAIL_API_KEY").unwrap_or(defaults.api_key),
            sender_email: std::env::var("MAIL_SENDER_EMAIL").unwrap_or(defaults.sender_email),
            sender_name: std::env::var("MAIL_SENDER_NAME").unwrap_or(defaults.sender_name),
            request_timeout_secs: std::env::var("MAIL_REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.request_timeout_secs),
        }
    }

    /// Whether an API key has been supplied
    pub fn has_api_key(&self) -> bool {
        !self.api_key.is_empty()
    }
}
