//! Registration, verification and login orchestration.

pub mod config;
pub mod service;

#[cfg(test)]
mod tests;

pub use config::AuthServiceConfig;
pub use service::{AuthService, RegisterInput};
