//! Brevo transactional email client
//!
//! Sends HTML email through Brevo's SMTP API (`POST /v3/smtp/email`,
//! authenticated with an `api-key` header).

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use vendora_core::services::mail::MailerTrait;
use vendora_shared::config::MailConfig;
use vendora_shared::utils::validation::mask_email;

use crate::InfrastructureError;

#[derive(Debug, Serialize)]
struct Party<'a> {
    name: &'a str,
    email: &'a str,
}

#[derive(Debug, Serialize)]
struct Recipient<'a> {
    email: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SendEmailRequest<'a> {
    sender: Party<'a>,
    to: Vec<Recipient<'a>>,
    subject: &'a str,
    html_content: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SendEmailResponse {
    message_id: Option<String>,
}

/// Brevo mail service implementation
pub struct BrevoMailer {
    client: reqwest::Client,
    config: MailConfig,
}

impl BrevoMailer {
    /// Create a new Brevo mailer
    pub fn new(config: MailConfig) -> Result<Self, InfrastructureError> {
        if !config.has_api_key() {
            return Err(InfrastructureError::Config(
                "MAIL_API_KEY not set".to_string(),
            ));
        }

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(InfrastructureError::Http)?;

        info!(
            event = "mailer_initialized",
            provider = "brevo",
            sender = %config.sender_email
        );

        Ok(Self { client, config })
    }

    /// Create from environment variables
    pub fn from_env() -> Result<Self, InfrastructureError> {
        Self::new(MailConfig::from_env())
    }

    async fn send_email(
        &self,
        to: &str,
        subject: &str,
        html_body: &str,
    ) -> Result<String, InfrastructureError> {
        let request = SendEmailRequest {
            sender: Party {
                name: &self.config.sender_name,
                email: &self.config.sender_email,
            },
            to: vec![Recipient { email: to }],
            subject,
            html_content: html_body,
        };

        let response = self
            .client
            .post(&self.config.api_url)
            .header("api-key", &self.config.api_key)
            .header("accept", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(InfrastructureError::Http)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(
                event = "mail_provider_rejected",
                status = %status,
                body = %body
            );
            return Err(InfrastructureError::Mail(format!(
                "Provider returned {}: {}",
                status, body
            )));
        }

        let parsed: SendEmailResponse = response.json().await.map_err(InfrastructureError::Http)?;
        let message_id = parsed.message_id.unwrap_or_default();

        info!(
            event = "mail_delivered",
            recipient = %mask_email(to),
            message_id = %message_id
        );

        Ok(message_id)
    }
}

#[async_trait]
impl MailerTrait for BrevoMailer {
    async fn send(&self, to: &str, subject: &str, html_body: &str) -> Result<String, String> {
        self.send_email(to, subject, html_body)
            .await
            .map_err(|e| e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_missing_api_key() {
        let config = MailConfig {
            api_key: String::new(),
            ..MailConfig::default()
        };
        let result = BrevoMailer::new(config);
        assert!(matches!(result, Err(InfrastructureError::Config(_))));
    }

    #[test]
    fn test_request_serializes_to_provider_shape() {
        let request = SendEmailRequest {
            sender: Party {
                name: "Vendora",
                email: "no-reply@vendora.shop",
            },
            to: vec![Recipient {
                email: "alice@example.com",
            }],
            subject: "Hello",
            html_content: "<p>Hi</p>",
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["sender"]["email"], "no-reply@vendora.shop");
        assert_eq!(json["to"][0]["email"], "alice@example.com");
        assert_eq!(json["htmlContent"], "<p>Hi</p>");
    }

    #[test]
    fn test_response_parses_message_id() {
        let parsed: SendEmailResponse =
            serde_json::from_str(r#"{"messageId":"<202408@smtp-relay>"}"#).unwrap();
        assert_eq!(parsed.message_id.as_deref(), Some("<202408@smtp-relay>"));

        let parsed: SendEmailResponse = serde_json::from_str("{}").unwrap();
        assert!(parsed.message_id.is_none());
    }
}
