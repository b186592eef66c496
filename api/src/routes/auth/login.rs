use actix_web::{web, HttpResponse};
use validator::Validate;

use vendora_core::repositories::{BusinessRepository, OtpRepository, UserRepository};
use vendora_core::services::mail::MailerTrait;
use vendora_shared::types::ApiResponse;

use crate::dto::auth_dto::LoginRequest;
use crate::handlers::error_handler::{handle_domain_error, validation_failure};

use super::AppState;

/// Handler for POST /api/v1/auth/login
///
/// Authenticates a user and issues access and refresh tokens. Vendor
/// logins additionally carry the vendor's business records.
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// {
///     "success": true,
///     "message": "Login successful",
///     "accessToken": "eyJhbGciOiJIUzI1NiIs...",
///     "refreshToken": "eyJhbGciOiJIUzI1NiIs...",
///     "expiresIn": 900,
///     "user": { ... },
///     "businesses": [ ... ]
/// }
/// ```
///
/// ## Errors
/// - 401 Unauthorized: unknown email or wrong password (identical message)
pub async fn login<U, O, B, M>(
    state: web::Data<AppState<U, O, B, M>>,
    request: web::Json<LoginRequest>,
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
        .login(&request.email, &request.password)
        .await
    {
        Ok(response) => HttpResponse::Ok().json(ApiResponse::ok("Login successful", response)),
        Err(error) => handle_domain_error(error),
    }
}
