//! Business services containing domain logic and use cases.

pub mod auth;
pub mod mail;
pub mod token;

// Re-export commonly used types
pub use auth::{AuthService, AuthServiceConfig, RegisterInput};
pub use mail::{templates, MailDelivery, MailerTrait};
pub use token::{TokenService, TokenServiceConfig};
