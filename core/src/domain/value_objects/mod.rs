//! Value objects returned by the authentication flows.

pub mod auth_response;

pub use auth_response::{LoginResponse, UserProfile};
