//! Main token service implementation

use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::domain::entities::token::{Claims, TokenPair, JWT_ISSUER};
use crate::domain::entities::user::User;
use crate::errors::{DomainError, TokenError};

use super::config::TokenServiceConfig;

/// Service for issuing and verifying JWT access and refresh tokens
///
/// Tokens are stateless. The refresh token is a signed JWT with its own
/// secret and lifetime, so refreshing never touches the database.
pub struct TokenService {
    config: TokenServiceConfig,
    access_encoding_key: EncodingKey,
    access_decoding_key: DecodingKey,
    refresh_encoding_key: EncodingKey,
    refresh_decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenService {
    /// Creates a new token service instance
    pub fn new(config: TokenServiceConfig) -> Self {
        let access_encoding_key = EncodingKey::from_secret(config.access_secret.as_bytes());
        let access_decoding_key = DecodingKey::from_secret(config.access_secret.as_bytes());
        let refresh_encoding_key = EncodingKey::from_secret(config.refresh_secret.as_bytes());
        let refresh_decoding_key = DecodingKey::from_secret(config.refresh_secret.as_bytes());

        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[JWT_ISSUER]);
        validation.validate_exp = true;

        Self {
            config,
            access_encoding_key,
            access_decoding_key,
            refresh_encoding_key,
            refresh_decoding_key,
            validation,
        }
    }

    /// Issues an access and refresh token pair for a user
    pub fn generate_token_pair(&self, user: &User) -> Result<TokenPair, DomainError> {
        let access_token = self.generate_access_token(user)?;

        let refresh_claims = Claims::new(
            user.id,
            &user.email,
            user.role,
            self.config.refresh_token_expiry_secs,
        );
        let refresh_token = self.encode(&refresh_claims, &self.refresh_encoding_key)?;

        Ok(TokenPair {
            access_token,
            refresh_token,
            expires_in: self.config.access_token_expiry_secs,
        })
    }

    /// Issues a short-lived access token for a user
    pub fn generate_access_token(&self, user: &User) -> Result<String, DomainError> {
        let claims = Claims::new(
            user.id,
            &user.email,
            user.role,
            self.config.access_token_expiry_secs,
        );
        self.encode(&claims, &self.access_encoding_key)
    }

    /// Verifies an access token and returns its claims
    pub fn verify_access_token(&self, token: &str) -> Result<Claims, DomainError> {
        self.decode(token, &self.access_decoding_key, TokenError::InvalidToken)
    }

    /// Verifies a refresh token and returns its claims
    pub fn verify_refresh_token(&self, token: &str) -> Result<Claims, DomainError> {
        self.decode(
            token,
            &self.refresh_decoding_key,
            TokenError::InvalidRefreshToken,
        )
    }

    fn encode(&self, claims: &Claims, key: &EncodingKey) -> Result<String, DomainError> {
        encode(&Header::new(Algorithm::HS256), claims, key)
            .map_err(|_| TokenError::TokenGenerationFailed.into())
    }

    fn decode(
        &self,
        token: &str,
        key: &DecodingKey,
        invalid: TokenError,
    ) -> Result<Claims, DomainError> {
        decode::<Claims>(token, key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                    TokenError::TokenExpired.into()
                }
                _ => invalid.into(),
            })
    }
}
