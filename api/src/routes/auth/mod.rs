//! Authentication route handlers
//!
//! - Self-service registration and OTP verification
//! - Login
//! - Privileged account provisioning (superadmin/admin/salesperson)
//! - Token refresh

pub mod login;
pub mod privileged;
pub mod refresh;
pub mod register;
pub mod verify_otp;

use std::sync::Arc;

use vendora_core::repositories::{BusinessRepository, OtpRepository, UserRepository};
use vendora_core::services::auth::AuthService;
use vendora_core::services::mail::MailerTrait;

/// Shared application state holding the authentication service
pub struct AppState<U, O, B, M>
where
    U: UserRepository,
    O: OtpRepository,
    B: BusinessRepository,
    M: MailerTrait,
{
    pub auth_service: Arc<AuthService<U, O, B, M>>,
}
