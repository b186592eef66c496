//! Privileged account provisioning endpoints
//!
//! The superadmin endpoint is open but enforces the one-superadmin
//! invariant in the service. The admin and salesperson endpoints are
//! gated by [`crate::middleware::RoleGuard`] in the route table.

use actix_web::{web, HttpResponse};
use validator::Validate;

use vendora_core::repositories::{BusinessRepository, OtpRepository, UserRepository};
use vendora_core::services::mail::MailerTrait;
use vendora_shared::types::ApiResponse;

use crate::dto::auth_dto::{ProfileData, RegisterRequest};
use crate::handlers::error_handler::{handle_domain_error, validation_failure};

use super::AppState;

/// Handler for POST /api/v1/auth/register/superadmin
///
/// # Errors
/// - 400 Bad Request: validation failure, duplicate email, or a
///   superadmin already exists
pub async fn register_superadmin<U, O, B, M>(
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
        .register_superadmin(request.into_inner().into_input())
        .await
    {
        Ok(user) => HttpResponse::Created().json(ApiResponse::ok(
            "Superadmin account created",
            ProfileData { user },
        )),
        Err(error) => handle_domain_error(error),
    }
}

/// Handler for POST /api/v1/auth/register/admin (superadmin only)
pub async fn register_admin<U, O, B, M>(
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
        .register_admin(request.into_inner().into_input())
        .await
    {
        Ok(user) => HttpResponse::Created().json(ApiResponse::ok(
            "Admin account created",
            ProfileData { user },
        )),
        Err(error) => handle_domain_error(error),
    }
}

/// Handler for POST /api/v1/auth/register/salesperson (superadmin or admin)
pub async fn register_salesperson<U, O, B, M>(
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
        .register_salesperson(request.into_inner().into_input())
        .await
    {
        Ok(user) => HttpResponse::Created().json(ApiResponse::ok(
            "Salesperson account created",
            ProfileData { user },
        )),
        Err(error) => handle_domain_error(error),
    }
}
