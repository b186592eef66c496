//! JWT role-gate middleware for privileged endpoints.
//!
//! Extracts the bearer token from the Authorization header, verifies it
//! against the `TokenService` registered in app data, and rejects callers
//! whose role is not in the allowed set. The verified identity is injected
//! into request extensions as [`AuthContext`].

use std::future::{ready, Ready};
use std::rc::Rc;
use std::task::{Context, Poll};

use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::error::{ErrorForbidden, ErrorInternalServerError, ErrorUnauthorized};
use actix_web::http::header::AUTHORIZATION;
use actix_web::{web, Error, FromRequest, HttpMessage, HttpRequest};
use futures_util::future::LocalBoxFuture;
use uuid::Uuid;

use vendora_core::domain::entities::token::Claims;
use vendora_core::domain::entities::user::UserRole;
use vendora_core::services::token::TokenService;

/// Verified caller identity injected into requests
#[derive(Debug, Clone)]
pub struct AuthContext {
    /// User ID extracted from JWT claims
    pub user_id: Uuid,
    /// Email carried by the token
    pub email: String,
    /// Role carried by the token
    pub role: UserRole,
    /// JWT ID for tracking
    pub jti: String,
}

impl AuthContext {
    /// Build a context from verified claims
    fn from_claims(claims: Claims) -> Result<Self, String> {
        let user_id = claims
            .user_id()
            .map_err(|_| "Token subject is not a valid user id".to_string())?;
        let role = claims
            .user_role()
            .ok_or_else(|| "Token carries an unknown role".to_string())?;
        Ok(Self {
            user_id,
            email: claims.email,
            role,
            jti: claims.jti,
        })
    }
}

/// Middleware factory gating a route to a set of roles
pub struct RoleGuard {
    allowed: Rc<Vec<UserRole>>,
}

impl RoleGuard {
    /// Allow only callers holding one of the given roles
    pub fn allow(roles: &[UserRole]) -> Self {
        Self {
            allowed: Rc::new(roles.to_vec()),
        }
    }
}

impl<S, B> Transform<S, ServiceRequest> for RoleGuard
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = RoleGuardMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RoleGuardMiddleware {
            service: Rc::new(service),
            allowed: Rc::clone(&self.allowed),
        }))
    }
}

/// Role-gate middleware service
pub struct RoleGuardMiddleware<S> {
    service: Rc<S>,
    allowed: Rc<Vec<UserRole>>,
}

impl<S, B> Service<ServiceRequest> for RoleGuardMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let allowed = Rc::clone(&self.allowed);

        Box::pin(async move {
            let token = match extract_bearer_token(&req) {
                Some(token) => token,
                None => {
                    return Err(ErrorUnauthorized("Missing or invalid Authorization header"));
                }
            };

            let token_service = req
                .app_data::<web::Data<TokenService>>()
                .ok_or_else(|| ErrorInternalServerError("Token verification not configured"))?;

            let claims = token_service
                .verify_access_token(&token)
                .map_err(|e| ErrorUnauthorized(e.to_string()))?;

            let context = AuthContext::from_claims(claims).map_err(ErrorUnauthorized)?;

            if !allowed.contains(&context.role) {
                log::warn!(
                    "Role gate rejected user {} with role {}",
                    context.user_id,
                    context.role
                );
                return Err(ErrorForbidden("Insufficient permissions"));
            }

            req.extensions_mut().insert(context);

            service.call(req).await
        })
    }
}

/// Extracts Bearer token from the Authorization header
fn extract_bearer_token(req: &ServiceRequest) -> Option<String> {
    req.headers()
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.to_string())
}

/// Extractor for required authentication
impl FromRequest for AuthContext {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        let result = req
            .extensions()
            .get::<AuthContext>()
            .cloned()
            .ok_or_else(|| ErrorUnauthorized("Authentication required"));

        ready(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_bearer_token() {
        use actix_web::test;

        let req = test::TestRequest::default()
            .insert_header((AUTHORIZATION, "Bearer test_token_123"))
            .to_srv_request();
        assert_eq!(extract_bearer_token(&req), Some("test_token_123".to_string()));

        let req_no_bearer = test::TestRequest::default()
            .insert_header((AUTHORIZATION, "test_token_123"))
            .to_srv_request();
        assert_eq!(extract_bearer_token(&req_no_bearer), None);

        let req_no_header = test::TestRequest::default().to_srv_request();
        assert_eq!(extract_bearer_token(&req_no_header), None);
    }

    #[test]
    fn test_auth_context_from_claims() {
        let user_id = Uuid::new_v4();
        let claims = Claims::new(user_id, "admin@vendora.shop", UserRole::Admin, 900);

        let context = AuthContext::from_claims(claims).unwrap();
        assert_eq!(context.user_id, user_id);
        assert_eq!(context.role, UserRole::Admin);
        assert_eq!(context.email, "admin@vendora.shop");
    }

    #[test]
    fn test_auth_context_rejects_unknown_role() {
        let mut claims = Claims::new(Uuid::new_v4(), "a@x.com", UserRole::Admin, 900);
        claims.role = "mystery".to_string();
        assert!(AuthContext::from_claims(claims).is_err());
    }
}
