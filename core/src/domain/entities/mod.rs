//! Domain entities for the account and verification flows.

pub mod business;
pub mod otp;
pub mod token;
pub mod user;

pub use business::{BusinessRecord, BusinessStatus};
pub use otp::OtpRecord;
pub use token::{Claims, TokenPair};
pub use user::{User, UserRole};
