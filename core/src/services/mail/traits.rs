//! Traits for transactional mail integration

use async_trait::async_trait;

/// How a mail failure affects the operation that sends it
///
/// Verification codes are `Required` because the recipient cannot complete
/// the flow without them. Welcome mail is `BestEffort` and never fails the
/// surrounding operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MailDelivery {
    /// Delivery failure fails the surrounding operation
    Required,
    /// Delivery failure is logged and swallowed
    BestEffort,
}

/// Trait for the outbound mail provider
#[async_trait]
pub trait MailerTrait: Send + Sync {
    /// Send an HTML email
    ///
    /// Returns the provider's message identifier on success.
    async fn send(&self, to: &str, subject: &str, html_body: &str) -> Result<String, String>;
}
