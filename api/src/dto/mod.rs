//! Request and response DTOs

pub mod auth_dto;

pub use auth_dto::{
    AccessTokenData, LoginRequest, ProfileData, RegisterData, RegisterRequest,
    RefreshTokenRequest, VerifyOtpRequest,
};
