//! Main authentication service implementation

use std::sync::Arc;

use uuid::Uuid;

use vendora_shared::utils::validation;

use crate::domain::entities::otp::OtpRecord;
use crate::domain::entities::user::{User, UserRole};
use crate::domain::value_objects::{LoginResponse, UserProfile};
use crate::errors::{AuthError, DomainError, DomainResult, TokenError, ValidationError};
use crate::repositories::{BusinessRepository, OtpRepository, UserRepository};
use crate::services::mail::{templates, MailDelivery, MailerTrait};
use crate::services::token::TokenService;

use super::config::AuthServiceConfig;

/// Registration input shared by the self-service and privileged flows
#[derive(Debug, Clone)]
pub struct RegisterInput {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub confirm_password: String,
}

/// Authentication service for the complete registration and login flow
pub struct AuthService<U, O, B, M>
where
    U: UserRepository,
    O: OtpRepository,
    B: BusinessRepository,
    M: MailerTrait,
{
    /// User repository for account persistence
    user_repository: Arc<U>,
    /// OTP repository for verification codes
    otp_repository: Arc<O>,
    /// Business repository for vendor KYC records
    business_repository: Arc<B>,
    /// Outbound mail provider
    mailer: Arc<M>,
    /// Token service for JWT issuance
    token_service: Arc<TokenService>,
    /// Service configuration
    config: AuthServiceConfig,
}

impl<U, O, B, M> AuthService<U, O, B, M>
where
    U: UserRepository,
    O: OtpRepository,
    B: BusinessRepository,
    M: MailerTrait,
{
    /// Create a new authentication service
    pub fn new(
        user_repository: Arc<U>,
        otp_repository: Arc<O>,
        business_repository: Arc<B>,
        mailer: Arc<M>,
        token_service: Arc<TokenService>,
        config: AuthServiceConfig,
    ) -> Self {
        Self {
            user_repository,
            otp_repository,
            business_repository,
            mailer,
            token_service,
            config,
        }
    }

    /// Register a new self-service account
    ///
    /// Creates the user unverified, issues a verification code and emails
    /// it. The code email is required: if it cannot be delivered the
    /// just-created user is deleted again so the email stays registrable.
    ///
    /// Returns the created user's id.
    pub async fn register(&self, input: RegisterInput) -> DomainResult<Uuid> {
        Self::validate_registration(&input)?;

        if self.user_repository.exists_by_email(&input.email).await? {
            return Err(AuthError::EmailAlreadyRegistered.into());
        }

        // One active code per email; stale codes from abandoned attempts
        // are dropped here rather than by a background job
        self.otp_repository.purge_expired().await?;
        self.otp_repository.delete_for_email(&input.email).await?;

        let otp = OtpRecord::new_with_expiry(input.email.clone(), self.config.otp_expiry_minutes);
        let otp = self.otp_repository.create(otp).await?;

        let password_hash = User::hash_password(&input.password)?;
        let user = User::new(
            input.name,
            input.email,
            input.phone,
            password_hash,
            UserRole::User,
            false,
        );
        let user = self.user_repository.create(user).await?;

        let body = templates::otp_email_body(&user.name, &otp.code, self.config.otp_expiry_minutes);
        if let Err(e) = self
            .dispatch_mail(
                MailDelivery::Required,
                &user.email,
                templates::OTP_SUBJECT,
                &body,
            )
            .await
        {
            // Compensating delete; without the code the account can never
            // be verified
            let _ = self.user_repository.delete(user.id).await;
            let _ = self.otp_repository.delete_for_email(&user.email).await;
            return Err(e);
        }

        tracing::info!(
            event = "user_registered",
            user_id = %user.id,
            email = %validation::mask_email(&user.email)
        );

        Ok(user.id)
    }

    /// Verify an emailed code and activate the account
    ///
    /// Returns the verified user's public profile.
    pub async fn verify_otp(&self, email: &str, code: &str) -> DomainResult<UserProfile> {
        let mut record = self
            .otp_repository
            .find_by_email_and_code(email, code)
            .await?
            .ok_or(AuthError::InvalidOtp)?;

        if record.is_verified {
            return Err(AuthError::OtpAlreadyUsed.into());
        }
        if record.is_expired() {
            return Err(AuthError::OtpExpired.into());
        }

        record.mark_verified();
        self.otp_repository.update(record).await?;

        let mut user = self
            .user_repository
            .find_by_email(email)
            .await?
            .ok_or_else(|| DomainError::NotFound {
                resource: "User".to_string(),
            })?;
        user.verify();
        let user = self.user_repository.update(user).await?;

        let body = templates::welcome_email_body(&user.name, &user.display_id());
        self.dispatch_mail(
            MailDelivery::BestEffort,
            &user.email,
            templates::WELCOME_SUBJECT,
            &body,
        )
        .await?;

        // The verified record stays behind; replaying the same code must
        // report "already used", not "invalid"
        self.otp_repository.delete_unverified_for_email(email).await?;

        tracing::info!(
            event = "user_verified",
            user_id = %user.id,
            email = %validation::mask_email(&user.email)
        );

        Ok(UserProfile::from(&user))
    }

    /// Authenticate a user and issue a token pair
    ///
    /// Unknown email and wrong password fail with the identical error so
    /// the endpoint cannot be used to enumerate accounts. Vendor logins
    /// carry the vendor's business records, newest first.
    pub async fn login(&self, email: &str, password: &str) -> DomainResult<LoginResponse> {
        let user = match self.user_repository.find_by_email(email).await? {
            Some(user) if user.verify_password(password) => user,
            _ => {
                tracing::warn!(
                    event = "login_failed",
                    email = %validation::mask_email(email)
                );
                return Err(AuthError::InvalidCredentials.into());
            }
        };

        let tokens = self.token_service.generate_token_pair(&user)?;

        let businesses = if user.role == UserRole::Vendor {
            Some(self.business_repository.find_by_vendor(user.id).await?)
        } else {
            None
        };

        tracing::info!(
            event = "login_succeeded",
            user_id = %user.id,
            role = %user.role
        );

        Ok(LoginResponse {
            access_token: tokens.access_token,
            refresh_token: tokens.refresh_token,
            expires_in: tokens.expires_in,
            user: UserProfile::from(&user),
            businesses,
        })
    }

    /// Provision the platform owner account
    ///
    /// At most one superadmin may exist; checked here, enforced
    /// ultimately by whoever exposes this operation.
    pub async fn register_superadmin(&self, input: RegisterInput) -> DomainResult<UserProfile> {
        if self
            .user_repository
            .count_by_role(UserRole::SuperAdmin)
            .await?
            > 0
        {
            return Err(AuthError::SuperAdminAlreadyExists.into());
        }
        self.register_privileged(input, UserRole::SuperAdmin).await
    }

    /// Provision an administrator account
    pub async fn register_admin(&self, input: RegisterInput) -> DomainResult<UserProfile> {
        self.register_privileged(input, UserRole::Admin).await
    }

    /// Provision a salesperson account
    pub async fn register_salesperson(&self, input: RegisterInput) -> DomainResult<UserProfile> {
        self.register_privileged(input, UserRole::Salesperson).await
    }

    /// Exchange a refresh token for a fresh access token
    ///
    /// The refresh token is not rotated. The user is re-fetched so the new
    /// access token carries their current role.
    pub async fn refresh_token(&self, refresh_token: &str) -> DomainResult<String> {
        let claims = self.token_service.verify_refresh_token(refresh_token)?;
        let user_id = claims
            .user_id()
            .map_err(|_| DomainError::Token(TokenError::InvalidRefreshToken))?;

        let user = self
            .user_repository
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| DomainError::NotFound {
                resource: "User".to_string(),
            })?;

        self.token_service.generate_access_token(&user)
    }

    /// Shared path for staff account creation
    ///
    /// No verification code; staff accounts are created already verified.
    /// The welcome mail carries the initial password and is best effort.
    async fn register_privileged(
        &self,
        input: RegisterInput,
        role: UserRole,
    ) -> DomainResult<UserProfile> {
        Self::validate_registration(&input)?;

        if self.user_repository.exists_by_email(&input.email).await? {
            return Err(AuthError::EmailAlreadyRegistered.into());
        }

        let password_hash = User::hash_password(&input.password)?;
        let user = User::new(
            input.name,
            input.email,
            input.phone,
            password_hash,
            role,
            true,
        );
        let user = self.user_repository.create(user).await?;

        let body = templates::staff_welcome_email_body(
            &user.name,
            &user.email,
            &input.password,
            role.as_str(),
        );
        self.dispatch_mail(
            MailDelivery::BestEffort,
            &user.email,
            templates::STAFF_WELCOME_SUBJECT,
            &body,
        )
        .await?;

        tracing::info!(
            event = "staff_account_created",
            user_id = %user.id,
            role = %role
        );

        Ok(UserProfile::from(&user))
    }

    /// Field checks shared by every registration path
    fn validate_registration(input: &RegisterInput) -> DomainResult<()> {
        for (field, value) in [
            ("name", &input.name),
            ("email", &input.email),
            ("phone", &input.phone),
            ("password", &input.password),
            ("cpassword", &input.confirm_password),
        ] {
            if value.trim().is_empty() {
                return Err(ValidationError::RequiredField {
                    field: field.to_string(),
                }
                .into());
            }
        }

        if input.password != input.confirm_password {
            return Err(ValidationError::PasswordMismatch.into());
        }
        if !validation::is_valid_password(&input.password) {
            return Err(ValidationError::PasswordTooShort {
                min: validation::MIN_PASSWORD_LENGTH,
            }
            .into());
        }
        if !validation::is_valid_phone(&input.phone) {
            return Err(ValidationError::InvalidPhone.into());
        }
        if !validation::is_valid_email(&input.email) {
            return Err(ValidationError::InvalidEmail.into());
        }

        Ok(())
    }

    /// Send an email with the given delivery semantics
    ///
    /// Required failures surface as `MailDeliveryFailure`; best-effort
    /// failures are logged and swallowed.
    async fn dispatch_mail(
        &self,
        delivery: MailDelivery,
        to: &str,
        subject: &str,
        html_body: &str,
    ) -> DomainResult<()> {
        match self.mailer.send(to, subject, html_body).await {
            Ok(message_id) => {
                tracing::info!(
                    event = "mail_sent",
                    recipient = %validation::mask_email(to),
                    subject = subject,
                    message_id = %message_id
                );
                Ok(())
            }
            Err(error) => match delivery {
                MailDelivery::Required => {
                    tracing::error!(
                        event = "mail_send_failed",
                        recipient = %validation::mask_email(to),
                        subject = subject,
                        error = %error
                    );
                    Err(AuthError::MailDeliveryFailure.into())
                }
                MailDelivery::BestEffort => {
                    tracing::warn!(
                        event = "mail_send_failed",
                        recipient = %validation::mask_email(to),
                        subject = subject,
                        error = %error
                    );
                    Ok(())
                }
            },
        }
    }
}
