//! Mock implementation of UserRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::user::{User, UserRole};
use crate::errors::{AuthError, DomainError};

use super::trait_::UserRepository;

/// In-memory user repository for tests and local development
#[derive(Default)]
pub struct MockUserRepository {
    users: Arc<RwLock<HashMap<Uuid, User>>>,
}

impl MockUserRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored users
    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }

    /// Whether the repository is empty
    pub async fn is_empty(&self) -> bool {
        self.users.read().await.is_empty()
    }
}

#[async_trait]
impl UserRepository for MockUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users.values().find(|u| u.email == email).cloned())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users.get(&id).cloned())
    }

    async fn create(&self, user: User) -> Result<User, DomainError> {
        let mut users = self.users.write().await;
        if users.values().any(|u| u.email == user.email) {
            return Err(DomainError::Auth(AuthError::EmailAlreadyRegistered));
        }
        users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn update(&self, user: User) -> Result<User, DomainError> {
        let mut users = self.users.write().await;
        if !users.contains_key(&user.id) {
            return Err(DomainError::NotFound {
                resource: "User".to_string(),
            });
        }
        users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let mut users = self.users.write().await;
        Ok(users.remove(&id).is_some())
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError> {
        let users = self.users.read().await;
        Ok(users.values().any(|u| u.email == email))
    }

    async fn count_by_role(&self, role: UserRole) -> Result<u64, DomainError> {
        let users = self.users.read().await;
        Ok(users.values().filter(|u| u.role == role).count() as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user(email: &str, role: UserRole) -> User {
        User::new(
            "Test".to_string(),
            email.to_string(),
            "1234567890".to_string(),
            "hash".to_string(),
            role,
            false,
        )
    }

    #[tokio::test]
    async fn test_create_rejects_duplicate_email() {
        let repo = MockUserRepository::new();
        repo.create(sample_user("a@x.com", UserRole::User))
            .await
            .unwrap();

        let result = repo.create(sample_user("a@x.com", UserRole::User)).await;
        assert!(matches!(
            result,
            Err(DomainError::Auth(AuthError::EmailAlreadyRegistered))
        ));
        assert_eq!(repo.len().await, 1);
    }

    #[tokio::test]
    async fn test_count_by_role() {
        let repo = MockUserRepository::new();
        repo.create(sample_user("a@x.com", UserRole::SuperAdmin))
            .await
            .unwrap();
        repo.create(sample_user("b@x.com", UserRole::User))
            .await
            .unwrap();

        assert_eq!(repo.count_by_role(UserRole::SuperAdmin).await.unwrap(), 1);
        assert_eq!(repo.count_by_role(UserRole::Admin).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_delete() {
        let repo = MockUserRepository::new();
        let user = repo
            .create(sample_user("a@x.com", UserRole::User))
            .await
            .unwrap();

        assert!(repo.delete(user.id).await.unwrap());
        assert!(!repo.delete(user.id).await.unwrap());
        assert!(repo.is_empty().await);
    }
}
