use actix_web::{web, HttpResponse};
use validator::Validate;

use vendora_core::repositories::{BusinessRepository, OtpRepository, UserRepository};
use vendora_core::services::mail::MailerTrait;
use vendora_shared::types::ApiResponse;

use crate::dto::auth_dto::{AccessTokenData, RefreshTokenRequest};
use crate::handlers::error_handler::{handle_domain_error, validation_failure};

use super::AppState;

/// Handler for POST /api/v1/auth/refresh-token
///
/// Exchanges a refresh token for a fresh access token. The refresh token
/// itself is not rotated.
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// {
///     "success": true,
///     "message": "Token refreshed",
///     "accessToken": "eyJhbGciOiJIUzI1NiIs..."
/// }
/// ```
///
/// ## Errors
/// - 400 Bad Request: missing token
/// - 401 Unauthorized: invalid or expired refresh token
/// - 404 Not Found: the user no longer exists
pub async fn refresh<U, O, B, M>(
    state: web::Data<AppState<U, O, B, M>>,
    request: web::Json<RefreshTokenRequest>,
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

    match state.auth_service.refresh_token(&request.refresh_token).await {
        Ok(access_token) => HttpResponse::Ok().json(ApiResponse::ok(
            "Token refreshed",
            AccessTokenData { access_token },
        )),
        Err(error) => handle_domain_error(error),
    }
}
