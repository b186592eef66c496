//! Response value objects for registration, verification and login.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::business::BusinessRecord;
use crate::domain::entities::user::{User, UserRole};

/// Public profile fields of a user
///
/// This is the only user shape ever serialized to clients; the password
/// hash never leaves the domain layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub role: UserRole,
    pub is_verified: bool,
    /// Short display identifier derived from the user id
    pub display_id: String,
}

impl From<&User> for UserProfile {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
            phone: user.phone.clone(),
            role: user.role,
            is_verified: user.is_verified,
            display_id: user.display_id(),
        }
    }
}

/// Successful login response with tokens and profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub access_token: String,
    pub refresh_token: String,
    /// Access token lifetime in seconds
    pub expires_in: i64,
    pub user: UserProfile,
    /// Vendor business records, newest first; present only for vendors
    #[serde(skip_serializing_if = "Option::is_none")]
    pub businesses: Option<Vec<BusinessRecord>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_excludes_password_hash() {
        let user = User::new(
            "Alice".to_string(),
            "alice@example.com".to_string(),
            "1234567890".to_string(),
            "hashed".to_string(),
            UserRole::User,
            true,
        );
        let profile = UserProfile::from(&user);
        let json = serde_json::to_value(&profile).unwrap();

        assert_eq!(json["email"], "alice@example.com");
        assert_eq!(json["isVerified"], true);
        assert_eq!(json["displayId"], user.display_id());
        assert!(json.get("passwordHash").is_none());
        assert!(json.get("password_hash").is_none());
    }
}
