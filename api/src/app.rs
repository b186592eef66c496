//! Application factory
//!
//! Builds the Actix-web application with routes, middleware and shared
//! state.

use actix_web::{middleware::Logger, web, App, HttpResponse};

use vendora_core::domain::entities::user::UserRole;
use vendora_core::repositories::{BusinessRepository, OtpRepository, UserRepository};
use vendora_core::services::mail::MailerTrait;
use vendora_core::services::token::TokenService;
use vendora_shared::types::ApiResponse;

use crate::middleware::{create_cors, RoleGuard};
use crate::routes::auth::{
    login::login, privileged::register_admin, privileged::register_salesperson,
    privileged::register_superadmin, refresh::refresh, register::register,
    verify_otp::verify_otp, AppState,
};

/// Create and configure the application with all dependencies
pub fn create_app<U, O, B, M>(
    app_state: web::Data<AppState<U, O, B, M>>,
    token_service: web::Data<TokenService>,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    U: UserRepository + 'static,
    O: OtpRepository + 'static,
    B: BusinessRepository + 'static,
    M: MailerTrait + 'static,
{
    let cors = create_cors();

    App::new()
        .app_data(app_state)
        .app_data(token_service)
        .wrap(Logger::default())
        .wrap(cors)
        // Health check endpoint
        .route("/health", web::get().to(health_check))
        // API v1 routes
        .service(
            web::scope("/api/v1").service(
                web::scope("/auth")
                    .route("/register", web::post().to(register::<U, O, B, M>))
                    .route("/verify-otp", web::post().to(verify_otp::<U, O, B, M>))
                    .route("/login", web::post().to(login::<U, O, B, M>))
                    .route("/refresh-token", web::post().to(refresh::<U, O, B, M>))
                    // First superadmin bootstraps the platform; the service
                    // rejects any second one
                    .route(
                        "/register/superadmin",
                        web::post().to(register_superadmin::<U, O, B, M>),
                    )
                    .route(
                        "/register/admin",
                        web::post()
                            .to(register_admin::<U, O, B, M>)
                            .wrap(RoleGuard::allow(&[UserRole::SuperAdmin])),
                    )
                    .route(
                        "/register/salesperson",
                        web::post()
                            .to(register_salesperson::<U, O, B, M>)
                            .wrap(RoleGuard::allow(&[UserRole::SuperAdmin, UserRole::Admin])),
                    ),
            ),
        )
        // Default 404 handler
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "vendora-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ApiResponse::<serde_json::Value>::failure(
        "The requested resource was not found",
    ))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::{http::StatusCode, test};

    use vendora_core::repositories::{
        MockBusinessRepository, MockOtpRepository, MockUserRepository,
    };
    use vendora_core::services::auth::{AuthService, AuthServiceConfig};
    use vendora_core::services::token::{TokenService, TokenServiceConfig};
    use vendora_infra::mail::MockMailer;

    use super::*;

    fn test_state() -> (
        web::Data<AppState<MockUserRepository, MockOtpRepository, MockBusinessRepository, MockMailer>>,
        web::Data<TokenService>,
    ) {
        let token_service = Arc::new(TokenService::new(TokenServiceConfig::default()));
        let auth_service = Arc::new(AuthService::new(
            Arc::new(MockUserRepository::new()),
            Arc::new(MockOtpRepository::new()),
            Arc::new(MockBusinessRepository::new()),
            Arc::new(MockMailer::new()),
            token_service.clone(),
            AuthServiceConfig::default(),
        ));
        (
            web::Data::new(AppState { auth_service }),
            web::Data::from(token_service),
        )
    }

    #[actix_rt::test]
    async fn test_health_endpoint() {
        let (state, tokens) = test_state();
        let app = test::init_service(create_app(state, tokens)).await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[actix_rt::test]
    async fn test_unknown_route_is_404() {
        let (state, tokens) = test_state();
        let app = test::init_service(create_app(state, tokens)).await;

        let req = test::TestRequest::get().uri("/nope").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_rt::test]
    async fn test_register_flow_over_http() {
        let (state, tokens) = test_state();
        let app = test::init_service(create_app(state, tokens)).await;

        let req = test::TestRequest::post()
            .uri("/api/v1/auth/register")
            .set_json(serde_json::json!({
                "name": "Alice",
                "email": "alice@example.com",
                "phone": "0412345678",
                "password": "password123",
                "cpassword": "password123",
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], true);
        assert!(body["userId"].is_string());
    }

    #[actix_rt::test]
    async fn test_admin_provisioning_requires_token() {
        let (state, tokens) = test_state();
        let app = test::init_service(create_app(state, tokens)).await;

        let req = test::TestRequest::post()
            .uri("/api/v1/auth/register/admin")
            .set_json(serde_json::json!({
                "name": "Mallory",
                "email": "mallory@example.com",
                "phone": "0412345678",
                "password": "password123",
                "cpassword": "password123",
            }))
            .to_request();
        let resp = test::try_call_service(&app, req).await;
        match resp {
            Ok(resp) => assert_eq!(resp.status(), StatusCode::UNAUTHORIZED),
            Err(e) => assert_eq!(
                e.as_response_error().status_code(),
                StatusCode::UNAUTHORIZED
            ),
        }
    }

    #[actix_rt::test]
    async fn test_login_rejects_unknown_account() {
        let (state, tokens) = test_state();
        let app = test::init_service(create_app(state, tokens)).await;

        let req = test::TestRequest::post()
            .uri("/api/v1/auth/login")
            .set_json(serde_json::json!({
                "email": "ghost@example.com",
                "password": "password123",
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }
}
