//! Domain-error to HTTP response mapping
//!
//! Single place where `DomainError` becomes a status code and a
//! `{success, message}` body.

use actix_web::HttpResponse;
use validator::ValidationErrors;

use vendora_core::errors::{AuthError, DomainError};
use vendora_shared::types::ApiResponse;

type EmptyResponse = ApiResponse<serde_json::Value>;

/// Convert a domain error into an HTTP response
///
/// Mapping:
/// - validation and conflicts (duplicate email, duplicate superadmin,
///   invalid/used/expired OTP) -> 400
/// - invalid credentials and token errors -> 401
/// - missing resources -> 404
/// - database, internal and mail-delivery failures -> 500 with a generic
///   message; details stay in the log
pub fn handle_domain_error(error: DomainError) -> HttpResponse {
    log::error!("Domain error: {:?}", error);

    match &error {
        DomainError::Validation(_) => {
            HttpResponse::BadRequest().json(EmptyResponse::failure(error.to_string()))
        }
        DomainError::Auth(auth_error) => match auth_error {
            AuthError::InvalidCredentials => {
                HttpResponse::Unauthorized().json(EmptyResponse::failure(error.to_string()))
            }
            AuthError::MailDeliveryFailure => HttpResponse::InternalServerError()
                .json(EmptyResponse::failure(error.to_string())),
            AuthError::EmailAlreadyRegistered
            | AuthError::SuperAdminAlreadyExists
            | AuthError::InvalidOtp
            | AuthError::OtpAlreadyUsed
            | AuthError::OtpExpired => {
                HttpResponse::BadRequest().json(EmptyResponse::failure(error.to_string()))
            }
        },
        DomainError::Token(_) => {
            HttpResponse::Unauthorized().json(EmptyResponse::failure(error.to_string()))
        }
        DomainError::NotFound { .. } => {
            HttpResponse::NotFound().json(EmptyResponse::failure(error.to_string()))
        }
        DomainError::Database { .. } | DomainError::Internal { .. } => {
            HttpResponse::InternalServerError()
                .json(EmptyResponse::failure("An internal error occurred"))
        }
    }
}

/// Convert DTO validation errors into a 400 response
pub fn validation_failure(errors: ValidationErrors) -> HttpResponse {
    log::warn!("Request validation failed: {}", errors);
    HttpResponse::BadRequest().json(EmptyResponse::failure("Invalid request data"))
}
