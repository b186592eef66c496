use actix_web::{web, HttpResponse};
use validator::Validate;

use vendora_core::repositories::{BusinessRepository, OtpRepository, UserRepository};
use vendora_core::services::mail::MailerTrait;
use vendora_shared::types::ApiResponse;

use crate::dto::auth_dto::{RegisterData, RegisterRequest};
use crate::handlers::error_handler::{handle_domain_error, validation_failure};

use super::AppState;

/// Handler for POST /api/v1/auth/register
///
/// Creates an unverified account and emails a verification code.
///
/// # Response
///
/// ## Success (201 Created)
/// ```json
/// {
///     "success": true,
///     "message": "Registration successful. Check your email for the verification code.",
///     "userId": "550e8400-e29b-41d4-a716-446655440000"
/// }
/// ```
///
/// ## Errors
/// - 400 Bad Request: validation failure or email already registered
/// - 500 Internal Server Error: persistence or email delivery failure
pub async fn register<U, O, B, M>(
    state: web::Data<AppState<U, O, B, M>>,
    request: web::Json<RegisterRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    O: OtpRepository + 'static,
    B: BusinessRepository + 'static,
    M: MailerTrait + 'static,
{
    if let Err(errors) = request.validate() {
        return validation_failure(errors);
    }

    match state
        .auth_service
        .register(request.into_inner().into_input())
        .await
    {
        Ok(user_id) => HttpResponse::Created().json(ApiResponse::ok(
            "Registration successful. Check your email for the verification code.",
            RegisterData { user_id },
        )),
        Err(error) => handle_domain_error(error),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[actix_rt::test]
    async fn test_register_request_with_mismatched_lengths_fails_validation() {
        let request = RegisterRequest {
            name: "".to_string(),
            email: "alice@example.com".to_string(),
            phone: "0412345678".to_string(),
            password: "password123".to_string(),
            cpassword: "password123".to_string(),
        };
        assert!(request.validate().is_err());
    }
}
