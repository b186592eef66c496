//! Domain-specific error types for registration, verification and login
//!
//! The HTTP layer maps these variants onto status codes; the messages here
//! are the ones surfaced to API clients.

use thiserror::Error;

/// Authentication and account-provisioning errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum AuthError {
    /// Single message for both unknown email and wrong password, so
    /// responses cannot be used to enumerate accounts.
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Email is already registered")]
    EmailAlreadyRegistered,

    #[error("A superadmin account already exists")]
    SuperAdminAlreadyExists,

    #[error("Invalid OTP")]
    InvalidOtp,

    #[error("OTP already used")]
    OtpAlreadyUsed,

    #[error("OTP has expired")]
    OtpExpired,

    #[error("Failed to send verification email")]
    MailDeliveryFailure,
}

/// Token validation and issuance errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum TokenError {
    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid or expired token")]
    InvalidToken,

    #[error("Invalid or expired refresh token")]
    InvalidRefreshToken,

    #[error("Token generation failed")]
    TokenGenerationFailed,
}

/// Input validation errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required field: {field}")]
    RequiredField { field: String },

    #[error("Invalid email format")]
    InvalidEmail,

    #[error("Phone number must be exactly 10 digits")]
    InvalidPhone,

    #[error("Password must be at least {min} characters")]
    PasswordTooShort { min: usize },

    #[error("Password and confirm password do not match")]
    PasswordMismatch,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_credentials_message_is_uniform() {
        // The login flow relies on a single message for both failure paths
        assert_eq!(
            AuthError::InvalidCredentials.to_string(),
            "Invalid email or password"
        );
    }

    #[test]
    fn test_validation_error_names_field() {
        let error = ValidationError::RequiredField {
            field: "email".to_string(),
        };
        assert!(error.to_string().contains("email"));
    }

    #[test]
    fn test_password_too_short_carries_minimum() {
        let error = ValidationError::PasswordTooShort { min: 8 };
        assert!(error.to_string().contains('8'));
    }
}
