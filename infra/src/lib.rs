//! # Infrastructure Layer
//!
//! Concrete implementations of the core repository traits and the outbound
//! mail provider for the Vendora backend.
//!
//! - **Database**: MySQL repositories using SQLx
//! - **Mail**: Brevo-style transactional email over HTTP, plus a mock
//!   mailer for development

pub mod database;
pub mod mail;

pub use database::connection::create_pool;
pub use database::mysql::{MySqlBusinessRepository, MySqlOtpRepository, MySqlUserRepository};
pub use mail::{BrevoMailer, MockMailer};

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// HTTP request error for external services
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Mail provider error
    #[error("Mail service error: {0}")]
    Mail(String),
}
