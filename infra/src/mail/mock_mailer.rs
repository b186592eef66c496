//! Mock mail service implementation
//!
//! Logs outbound email instead of sending it. Used in development when no
//! mail provider API key is configured.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use vendora_core::services::mail::MailerTrait;
use vendora_shared::utils::validation::{is_valid_email, mask_email};

/// Mock mailer for development and testing
///
/// Validates the recipient address, logs the message and returns a
/// generated message id.
#[derive(Clone)]
pub struct MockMailer {
    /// Counter for tracking number of messages sent
    message_count: Arc<AtomicU64>,
    /// Whether to simulate failures (for testing)
    simulate_failure: Arc<AtomicBool>,
}

impl MockMailer {
    /// Create a new mock mailer
    pub fn new() -> Self {
        Self {
            message_count: Arc::new(AtomicU64::new(0)),
            simulate_failure: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Get the total number of messages sent
    pub fn message_count(&self) -> u64 {
        self.message_count.load(Ordering::SeqCst)
    }

    /// Enable or disable failure simulation
    pub fn set_simulate_failure(&self, simulate: bool) {
        self.simulate_failure.store(simulate, Ordering::SeqCst);
    }
}

impl Default for MockMailer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MailerTrait for MockMailer {
    async fn send(&self, to: &str, subject: &str, html_body: &str) -> Result<String, String> {
        if !is_valid_email(to) {
            return Err(format!("Invalid recipient address: {}", mask_email(to)));
        }

        if self.simulate_failure.load(Ordering::SeqCst) {
            return Err("Mock mailer simulated failure".to_string());
        }

        self.message_count.fetch_add(1, Ordering::SeqCst);
        let message_id = format!("mock-{}", Uuid::new_v4());

        info!(
            event = "mock_mail_sent",
            recipient = %mask_email(to),
            subject = subject,
            body_length = html_body.len(),
            message_id = %message_id
        );

        Ok(message_id)
    }
}
