//! HTTP middleware

pub mod auth;
pub mod cors;

pub use auth::{AuthContext, RoleGuard};
pub use cors::create_cors;
