use std::sync::Arc;

use async_trait::async_trait;
use auth::TokenPayload;
use chrono::Utc;

use crate::domain::authentication::errors::AuthError;
use crate::domain::authentication::models::Credentials;
use crate::domain::authentication::models::TokenPair;
use crate::domain::authentication::models::ACCESS_TOKEN_MINUTES_TO_LIVE;
use crate::domain::authentication::models::REFRESH_TOKEN_MINUTES_TO_LIVE;
use crate::domain::authentication::ports::AuthServicePort;
use crate::domain::authentication::ports::PasswordVerifier;
use crate::domain::authentication::ports::TokenCodec;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::models::UserWithPassword;
use crate::user::ports::UserRepository;

/// Domain service implementation for authentication operations.
///
/// Stateless: every call reads the user store at most once and talks to the
/// token codec once or twice.
pub struct AuthService<UR, TC, PV>
where
    UR: UserRepository,
    TC: TokenCodec,
    PV: PasswordVerifier,
{
    repository: Arc<UR>,
    token_codec: Arc<TC>,
    password_verifier: Arc<PV>,
}

impl<UR, TC, PV> AuthService<UR, TC, PV>
where
    UR: UserRepository,
    TC: TokenCodec,
    PV: PasswordVerifier,
{
    /// Create a new authentication service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - User store
    /// * `token_codec` - Token signing and verification
    /// * `password_verifier` - Password hash comparison
    pub fn new(repository: Arc<UR>, token_codec: Arc<TC>, password_verifier: Arc<PV>) -> Self {
        Self {
            repository,
            token_codec,
            password_verifier,
        }
    }

    /// Sign a token for `user` that lives for `minutes_to_live` minutes.
    pub fn create_jwt(&self, user: &User, minutes_to_live: i64) -> Result<String, AuthError> {
        self.token_codec
            .sign(&user.id.to_string(), minutes_to_live * 60)
            .map_err(AuthError::TokenSigning)
    }

    /// Resolve the subject of a verified token, hiding whether it exists.
    async fn resolve_user(&self, payload: &TokenPayload) -> Result<User, AuthError> {
        let user_id = UserId::from_string(&payload.user_id).map_err(|e| {
            tracing::warn!(error = %e, "Token subject is not a valid user id");
            AuthError::Unauthorized
        })?;

        self.repository
            .find_by_id(&user_id)
            .await?
            .ok_or_else(|| {
                tracing::warn!(user_id = %user_id, "Token subject no longer exists");
                AuthError::Unauthorized
            })
    }
}

#[async_trait]
impl<UR, TC, PV> AuthServicePort for AuthService<UR, TC, PV>
where
    UR: UserRepository,
    TC: TokenCodec,
    PV: PasswordVerifier,
{
    async fn check_credentials(&self, credentials: Credentials) -> Result<TokenPair, AuthError> {
        let UserWithPassword {
            user,
            password_hash,
        } = self
            .repository
            .find_by_email_with_password(&credentials.email)
            .await?
            .ok_or_else(|| {
                tracing::warn!(email = %credentials.email, "Login attempt for unknown email");
                AuthError::NotFound
            })?;

        let is_valid = self
            .password_verifier
            .verify(&credentials.password, &password_hash)?;

        if !is_valid {
            tracing::warn!(user_id = %user.id, "Login rejected: password mismatch");
            return Err(AuthError::Unauthorized);
        }

        let token_pair = TokenPair {
            access: self.create_jwt(&user, ACCESS_TOKEN_MINUTES_TO_LIVE)?,
            refresh: self.create_jwt(&user, REFRESH_TOKEN_MINUTES_TO_LIVE)?,
        };

        tracing::info!(user_id = %user.id, "User logged in");
        Ok(token_pair)
    }

    async fn check_refresh_token(&self, token: &str) -> Result<String, AuthError> {
        let now = Utc::now().timestamp();

        let payload = self.token_codec.verify(token).map_err(|e| {
            tracing::warn!(error = %e, "Refresh token rejected by codec");
            AuthError::Unauthorized
        })?;

        // Expiry is enforced here too, independent of any codec leeway.
        if payload.is_expired(now) {
            tracing::warn!(user_id = %payload.user_id, exp = payload.exp, "Refresh token expired");
            return Err(AuthError::Unauthorized);
        }

        let user = self.resolve_user(&payload).await?;
        let access = self.create_jwt(&user, ACCESS_TOKEN_MINUTES_TO_LIVE)?;

        tracing::info!(user_id = %user.id, "Access token refreshed");
        Ok(access)
    }

    async fn validate_user(&self, payload: &TokenPayload) -> Result<User, AuthError> {
        self.resolve_user(payload).await
    }
}
