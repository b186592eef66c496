//! Mail module - transactional email providers

pub mod brevo;
pub mod mock_mailer;

pub use brevo::BrevoMailer;
pub use mock_mailer::MockMailer;
