use actix_web::{web, HttpResponse};
use validator::Validate;

use vendora_core::repositories::{BusinessRepository, OtpRepository, UserRepository};
use vendora_core::services::mail::MailerTrait;
use vendora_shared::types::ApiResponse;

use crate::dto::auth_dto::{ProfileData, VerifyOtpRequest};
use crate::handlers::error_handler::{handle_domain_error, validation_failure};

use super::AppState;

/// Handler for POST /api/v1/auth/verify-otp
///
/// Verifies the emailed code and activates the account.
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// {
///     "success": true,
///     "message": "Account verified",
///     "user": { "id": "...", "email": "...", "displayId": "VEN-550E8400", ... }
/// }
/// ```
///
/// ## Errors
/// - 400 Bad Request: invalid, already used or expired code
/// - 404 Not Found: no account for the email
pub async fn verify_otp<U, O, B, M>(
    state: web::Data<AppState<U, O, B, M>>,
    request: web::Json<VerifyOtpRequest>,
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
        .verify_otp(&request.email, &request.otp)
        .await
    {
        Ok(user) => {
            HttpResponse::Ok().json(ApiResponse::ok("Account verified", ProfileData { user }))
        }
        Err(error) => handle_domain_error(error),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[actix_rt::test]
    async fn test_verify_otp_request_rejects_short_code() {
        let request = VerifyOtpRequest {
            email: "alice@example.com".to_string(),
            otp: "123".to_string(),
        };
        assert!(request.validate().is_err());
    }
}
