//! Shared utilities and common types for the Vendora server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types (env-driven)
//! - API response structures
//! - Validation utilities (email, phone, password)

pub mod config;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{DatabaseConfig, JwtConfig, MailConfig, OtpConfig, ServerConfig};
pub use types::ApiResponse;
pub use utils::validation;
