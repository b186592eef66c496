//! User repository trait defining the interface for user data persistence.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::user::{User, UserRole};
use crate::errors::DomainError;

/// Repository trait for User entity persistence operations
///
/// Implementations handle the actual database operations while keeping the
/// abstraction boundary between domain and infrastructure layers. Uniqueness
/// of the email column is ultimately enforced by the store at insert time;
/// the duplicate checks in the service layer are a fast path, not the
/// authority.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by email address
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;

    /// Find a user by their unique identifier
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError>;

    /// Create a new user
    ///
    /// Fails with `AuthError::EmailAlreadyRegistered` when the email is
    /// already taken.
    async fn create(&self, user: User) -> Result<User, DomainError>;

    /// Update an existing user
    async fn update(&self, user: User) -> Result<User, DomainError>;

    /// Delete a user; returns `true` when a row was removed
    async fn delete(&self, id: Uuid) -> Result<bool, DomainError>;

    /// Check if a user exists with the given email
    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError>;

    /// Count users holding the given role
    ///
    /// Backs the one-superadmin invariant.
    async fn count_by_role(&self, role: UserRole) -> Result<u64, DomainError>;
}
