//! Repository interfaces for data persistence.
//!
//! Concrete implementations live in the infrastructure crate; the mocks in
//! each submodule back the service tests and local development wiring.

pub mod business;
pub mod otp;
pub mod user;

pub use business::{BusinessRepository, MockBusinessRepository};
pub use otp::{MockOtpRepository, OtpRepository};
pub use user::{MockUserRepository, UserRepository};
