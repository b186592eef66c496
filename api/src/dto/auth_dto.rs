//! Authentication request and response DTOs
//!
//! Request shapes carry `validator` derives for surface-level checks; the
//! service layer re-validates everything that matters.

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use vendora_core::domain::value_objects::UserProfile;
use vendora_core::services::auth::RegisterInput;

/// Body of every registration endpoint
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(equal = 10))]
    pub phone: String,
    #[validate(length(min = 8))]
    pub password: String,
    /// Confirmation copy of the password
    #[validate(length(min = 8))]
    pub cpassword: String,
}

impl RegisterRequest {
    /// Convert into the service-layer input
    pub fn into_input(self) -> RegisterInput {
        RegisterInput {
            name: self.name,
            email: self.email,
            phone: self.phone,
            password: self.password,
            confirm_password: self.cpassword,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct VerifyOtpRequest {
    #[validate(email)]
    pub email: String,
    #[validate(length(equal = 6))]
    pub otp: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RefreshTokenRequest {
    #[serde(rename = "refreshToken")]
    #[validate(length(min = 1))]
    pub refresh_token: String,
}

/// Payload of a successful registration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterData {
    pub user_id: Uuid,
}

/// Payload carrying a user profile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileData {
    pub user: UserProfile,
}

/// Payload of a successful token refresh
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessTokenData {
    pub access_token: String,
}
