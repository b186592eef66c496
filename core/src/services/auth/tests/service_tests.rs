//! Behavioral tests for the authentication service against in-memory mocks

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::entities::business::{BusinessRecord, BusinessStatus};
use crate::domain::entities::otp::OtpRecord;
use crate::domain::entities::user::{User, UserRole};
use crate::errors::{AuthError, DomainError, ValidationError};
use crate::repositories::{
    MockBusinessRepository, MockOtpRepository, MockUserRepository, OtpRepository, UserRepository,
};
use crate::services::auth::{AuthService, AuthServiceConfig, RegisterInput};
use crate::services::token::{TokenService, TokenServiceConfig};

use super::mocks::MockMailer;

struct TestContext {
    service: AuthService<MockUserRepository, MockOtpRepository, MockBusinessRepository, MockMailer>,
    users: Arc<MockUserRepository>,
    otps: Arc<MockOtpRepository>,
    businesses: Arc<MockBusinessRepository>,
    mailer: Arc<MockMailer>,
    tokens: Arc<TokenService>,
}

fn context() -> TestContext {
    let users = Arc::new(MockUserRepository::new());
    let otps = Arc::new(MockOtpRepository::new());
    let businesses = Arc::new(MockBusinessRepository::new());
    let mailer = Arc::new(MockMailer::new());
    let tokens = Arc::new(TokenService::new(TokenServiceConfig::default()));

    let service = AuthService::new(
        users.clone(),
        otps.clone(),
        businesses.clone(),
        mailer.clone(),
        tokens.clone(),
        AuthServiceConfig::default(),
    );

    TestContext {
        service,
        users,
        otps,
        businesses,
        mailer,
        tokens,
    }
}

fn input(email: &str) -> RegisterInput {
    RegisterInput {
        name: "Alice".to_string(),
        email: email.to_string(),
        phone: "0412345678".to_string(),
        password: "password123".to_string(),
        confirm_password: "password123".to_string(),
    }
}

#[tokio::test]
async fn test_register_creates_unverified_user_and_sends_code() {
    let ctx = context();

    let user_id = ctx.service.register(input("alice@example.com")).await.unwrap();

    let user = ctx.users.find_by_id(user_id).await.unwrap().unwrap();
    assert_eq!(user.email, "alice@example.com");
    assert_eq!(user.role, UserRole::User);
    assert!(!user.is_verified);

    let code = ctx.otps.code_for("alice@example.com").await.unwrap();
    let sent = ctx.mailer.sent().await;
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].to, "alice@example.com");
    assert!(sent[0].body.contains(&code));
}

#[tokio::test]
async fn test_register_duplicate_email_leaves_no_trace() {
    let ctx = context();
    ctx.service.register(input("alice@example.com")).await.unwrap();

    let err = ctx
        .service
        .register(input("alice@example.com"))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        DomainError::Auth(AuthError::EmailAlreadyRegistered)
    ));

    // No second user, no second code, no second email
    assert_eq!(ctx.users.len().await, 1);
    assert_eq!(ctx.otps.len().await, 1);
    assert_eq!(ctx.mailer.sent_count().await, 1);
}

#[tokio::test]
async fn test_register_validation_failures() {
    let ctx = context();

    let mut missing = input("a@x.com");
    missing.name = "  ".to_string();
    assert!(matches!(
        ctx.service.register(missing).await.unwrap_err(),
        DomainError::Validation(ValidationError::RequiredField { .. })
    ));

    let mut mismatch = input("a@x.com");
    mismatch.confirm_password = "different123".to_string();
    assert!(matches!(
        ctx.service.register(mismatch).await.unwrap_err(),
        DomainError::Validation(ValidationError::PasswordMismatch)
    ));

    let mut short = input("a@x.com");
    short.password = "short".to_string();
    short.confirm_password = "short".to_string();
    assert!(matches!(
        ctx.service.register(short).await.unwrap_err(),
        DomainError::Validation(ValidationError::PasswordTooShort { .. })
    ));

    let mut bad_phone = input("a@x.com");
    bad_phone.phone = "12345".to_string();
    assert!(matches!(
        ctx.service.register(bad_phone).await.unwrap_err(),
        DomainError::Validation(ValidationError::InvalidPhone)
    ));

    let bad_email = input("not-an-email");
    assert!(matches!(
        ctx.service.register(bad_email).await.unwrap_err(),
        DomainError::Validation(ValidationError::InvalidEmail)
    ));

    assert!(ctx.users.is_empty().await);
    assert_eq!(ctx.mailer.sent_count().await, 0);
}

#[tokio::test]
async fn test_register_mail_failure_rolls_back_user() {
    let ctx = context();
    ctx.mailer.set_fail(true);

    let err = ctx
        .service
        .register(input("alice@example.com"))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        DomainError::Auth(AuthError::MailDeliveryFailure)
    ));

    // The email must stay registrable
    assert!(ctx.users.is_empty().await);
    assert_eq!(ctx.otps.len().await, 0);

    ctx.mailer.set_fail(false);
    assert!(ctx.service.register(input("alice@example.com")).await.is_ok());
}

#[tokio::test]
async fn test_verify_otp_activates_user_and_cleans_up() {
    let ctx = context();
    let user_id = ctx.service.register(input("alice@example.com")).await.unwrap();
    let code = ctx.otps.code_for("alice@example.com").await.unwrap();

    let profile = ctx.service.verify_otp("alice@example.com", &code).await.unwrap();
    assert!(profile.is_verified);
    assert_eq!(profile.id, user_id);
    assert!(profile.display_id.starts_with("VEN-"));

    let user = ctx.users.find_by_id(user_id).await.unwrap().unwrap();
    assert!(user.is_verified);

    // Only the used record survives, marked verified
    assert_eq!(ctx.otps.len().await, 1);
    let record = ctx
        .otps
        .find_by_email_and_code("alice@example.com", &code)
        .await
        .unwrap()
        .unwrap();
    assert!(record.is_verified);

    // Welcome email follows the code email
    let sent = ctx.mailer.sent().await;
    assert_eq!(sent.len(), 2);
    assert!(sent[1].body.contains("Your chosen password"));
    assert!(sent[1].body.contains(&profile.display_id));
}

#[tokio::test]
async fn test_verify_otp_wrong_code() {
    let ctx = context();
    ctx.service.register(input("alice@example.com")).await.unwrap();

    let err = ctx
        .service
        .verify_otp("alice@example.com", "000000")
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Auth(AuthError::InvalidOtp)));

    let user = ctx.users.find_by_email("alice@example.com").await.unwrap();
    assert!(!user.unwrap().is_verified);
}

#[tokio::test]
async fn test_second_verify_with_same_code_reports_already_used() {
    let ctx = context();
    ctx.service.register(input("alice@example.com")).await.unwrap();
    let code = ctx.otps.code_for("alice@example.com").await.unwrap();

    ctx.service.verify_otp("alice@example.com", &code).await.unwrap();

    let err = ctx
        .service
        .verify_otp("alice@example.com", &code)
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Auth(AuthError::OtpAlreadyUsed)));
}

#[tokio::test]
async fn test_verify_otp_expired_code_rejected_on_exact_match() {
    let ctx = context();
    let record = ctx
        .otps
        .create(OtpRecord::new_with_expiry(
            "alice@example.com".to_string(),
            -1,
        ))
        .await
        .unwrap();

    let err = ctx
        .service
        .verify_otp("alice@example.com", &record.code)
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Auth(AuthError::OtpExpired)));
}

#[tokio::test]
async fn test_verify_otp_unknown_user_is_not_found() {
    let ctx = context();
    let record = ctx
        .otps
        .create(OtpRecord::new("ghost@example.com".to_string()))
        .await
        .unwrap();

    let err = ctx
        .service
        .verify_otp("ghost@example.com", &record.code)
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::NotFound { .. }));
}

#[tokio::test]
async fn test_welcome_mail_failure_does_not_fail_verification() {
    let ctx = context();
    ctx.service.register(input("alice@example.com")).await.unwrap();
    let code = ctx.otps.code_for("alice@example.com").await.unwrap();

    ctx.mailer.set_fail(true);
    let profile = ctx.service.verify_otp("alice@example.com", &code).await.unwrap();
    assert!(profile.is_verified);
    assert_eq!(ctx.otps.len().await, 1);
}

#[tokio::test]
async fn test_login_unknown_email_and_wrong_password_look_identical() {
    let ctx = context();
    ctx.service.register(input("alice@example.com")).await.unwrap();

    let unknown = ctx
        .service
        .login("nobody@example.com", "password123")
        .await
        .unwrap_err();
    let wrong = ctx
        .service
        .login("alice@example.com", "wrong-password")
        .await
        .unwrap_err();

    assert!(matches!(
        unknown,
        DomainError::Auth(AuthError::InvalidCredentials)
    ));
    assert!(matches!(
        wrong,
        DomainError::Auth(AuthError::InvalidCredentials)
    ));
    assert_eq!(unknown.to_string(), wrong.to_string());
}

#[tokio::test]
async fn test_login_returns_verifiable_tokens() {
    let ctx = context();
    ctx.service.register(input("alice@example.com")).await.unwrap();
    let code = ctx.otps.code_for("alice@example.com").await.unwrap();
    ctx.service.verify_otp("alice@example.com", &code).await.unwrap();

    let response = ctx
        .service
        .login("alice@example.com", "password123")
        .await
        .unwrap();

    assert_eq!(response.user.email, "alice@example.com");
    assert!(response.businesses.is_none());

    let claims = ctx.tokens.verify_access_token(&response.access_token).unwrap();
    assert_eq!(claims.user_id().unwrap(), response.user.id);
    assert_eq!(claims.user_role(), Some(UserRole::User));
    assert!(ctx
        .tokens
        .verify_refresh_token(&response.refresh_token)
        .is_ok());
}

#[tokio::test]
async fn test_vendor_login_attaches_businesses_newest_first() {
    let ctx = context();
    let password_hash = User::hash_password("password123").unwrap();
    let vendor = ctx
        .users
        .create(User::new(
            "Vera".to_string(),
            "vera@example.com".to_string(),
            "0498765432".to_string(),
            password_hash,
            UserRole::Vendor,
            true,
        ))
        .await
        .unwrap();

    let older = BusinessRecord {
        id: Uuid::new_v4(),
        vendor_id: vendor.id,
        business_name: "Vera Antiques".to_string(),
        registration_number: "REG-100".to_string(),
        status: BusinessStatus::Approved,
        reviewed_by: Some(Uuid::new_v4()),
        reviewer_name: Some("Admin Andy".to_string()),
        created_at: chrono::Utc::now() - chrono::Duration::days(2),
    };
    let newer = BusinessRecord {
        id: Uuid::new_v4(),
        vendor_id: vendor.id,
        business_name: "Vera Imports".to_string(),
        registration_number: "REG-200".to_string(),
        status: BusinessStatus::Pending,
        reviewed_by: None,
        reviewer_name: None,
        created_at: chrono::Utc::now(),
    };
    ctx.businesses.insert(older).await;
    ctx.businesses.insert(newer).await;

    let response = ctx
        .service
        .login("vera@example.com", "password123")
        .await
        .unwrap();

    let businesses = response.businesses.unwrap();
    assert_eq!(businesses.len(), 2);
    assert_eq!(businesses[0].business_name, "Vera Imports");
    assert_eq!(businesses[1].business_name, "Vera Antiques");
    assert_eq!(businesses[1].reviewer_name.as_deref(), Some("Admin Andy"));
}

#[tokio::test]
async fn test_superadmin_is_a_singleton_across_emails() {
    let ctx = context();

    let first = ctx
        .service
        .register_superadmin(input("owner@example.com"))
        .await
        .unwrap();
    assert_eq!(first.role, UserRole::SuperAdmin);
    assert!(first.is_verified);

    let err = ctx
        .service
        .register_superadmin(input("other@example.com"))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        DomainError::Auth(AuthError::SuperAdminAlreadyExists)
    ));
    assert_eq!(ctx.users.len().await, 1);
}

#[tokio::test]
async fn test_staff_accounts_are_preverified_and_mailed_credentials() {
    let ctx = context();

    let admin = ctx
        .service
        .register_admin(input("admin@example.com"))
        .await
        .unwrap();
    assert_eq!(admin.role, UserRole::Admin);
    assert!(admin.is_verified);

    let sales = ctx
        .service
        .register_salesperson(input("sales@example.com"))
        .await
        .unwrap();
    assert_eq!(sales.role, UserRole::Salesperson);

    // No verification codes for staff
    assert_eq!(ctx.otps.len().await, 0);

    let sent = ctx.mailer.sent().await;
    assert_eq!(sent.len(), 2);
    assert!(sent[0].body.contains("password123"));
    assert!(sent[0].body.contains("admin"));
    assert!(sent[1].body.contains("salesperson"));
}

#[tokio::test]
async fn test_staff_mail_failure_does_not_fail_provisioning() {
    let ctx = context();
    ctx.mailer.set_fail(true);

    let admin = ctx
        .service
        .register_admin(input("admin@example.com"))
        .await
        .unwrap();
    assert!(admin.is_verified);
    assert_eq!(ctx.users.len().await, 1);
}

#[tokio::test]
async fn test_refresh_issues_access_token_without_rotation() {
    let ctx = context();
    ctx.service.register(input("alice@example.com")).await.unwrap();
    let code = ctx.otps.code_for("alice@example.com").await.unwrap();
    ctx.service.verify_otp("alice@example.com", &code).await.unwrap();
    let response = ctx
        .service
        .login("alice@example.com", "password123")
        .await
        .unwrap();

    let access = ctx
        .service
        .refresh_token(&response.refresh_token)
        .await
        .unwrap();
    let claims = ctx.tokens.verify_access_token(&access).unwrap();
    assert_eq!(claims.user_id().unwrap(), response.user.id);

    // Same refresh token stays valid
    assert!(ctx.service.refresh_token(&response.refresh_token).await.is_ok());
}

#[tokio::test]
async fn test_refresh_for_deleted_user_is_not_found() {
    let ctx = context();
    ctx.service.register(input("alice@example.com")).await.unwrap();
    let code = ctx.otps.code_for("alice@example.com").await.unwrap();
    ctx.service.verify_otp("alice@example.com", &code).await.unwrap();
    let response = ctx
        .service
        .login("alice@example.com", "password123")
        .await
        .unwrap();

    ctx.users.delete(response.user.id).await.unwrap();

    let err = ctx
        .service
        .refresh_token(&response.refresh_token)
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::NotFound { .. }));
}

#[tokio::test]
async fn test_access_token_is_rejected_as_refresh_token() {
    let ctx = context();
    ctx.service.register(input("alice@example.com")).await.unwrap();
    let code = ctx.otps.code_for("alice@example.com").await.unwrap();
    ctx.service.verify_otp("alice@example.com", &code).await.unwrap();
    let response = ctx
        .service
        .login("alice@example.com", "password123")
        .await
        .unwrap();

    let err = ctx
        .service
        .refresh_token(&response.access_token)
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Token(_)));
}

#[tokio::test]
async fn test_full_registration_journey() {
    let ctx = context();

    let user_id = ctx.service.register(input("alice@example.com")).await.unwrap();
    let code = ctx.otps.code_for("alice@example.com").await.unwrap();

    // Wrong code first
    let wrong = if code == "123456" { "654321" } else { "123456" };
    assert!(ctx
        .service
        .verify_otp("alice@example.com", wrong)
        .await
        .is_err());
    let profile = ctx.service.verify_otp("alice@example.com", &code).await.unwrap();
    assert_eq!(profile.id, user_id);

    let response = ctx
        .service
        .login("alice@example.com", "password123")
        .await
        .unwrap();
    assert!(response.user.is_verified);
}
