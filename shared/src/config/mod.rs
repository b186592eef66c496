//! Configuration module with business-specific sub-modules
//!
//! This module organizes configuration into logical business areas:
//! - `auth` - JWT signing and OTP validity configuration
//! - `database` - Database connection and pool configuration
//! - `mail` - Transactional-email API configuration
//! - `server` - HTTP server configuration
//!
//! All configurations can be loaded from environment variables via
//! `from_env()` and carry sensible development defaults.

pub mod auth;
pub mod database;
pub mod mail;
pub mod server;

// Re-export commonly used types
pub use auth::{JwtConfig, OtpConfig};
pub use database::DatabaseConfig;
pub use mail::MailConfig;
pub use server::ServerConfig;
