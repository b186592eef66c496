//! Transactional email abstraction and message templates.

pub mod templates;
pub mod traits;

pub use traits::{MailDelivery, MailerTrait};
