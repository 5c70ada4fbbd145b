use async_trait::async_trait;
use auth::JwtError;
use auth::PasswordError;
use auth::TokenPayload;

use crate::domain::authentication::errors::AuthError;
use crate::domain::authentication::models::Credentials;
use crate::domain::authentication::models::TokenPair;
use crate::domain::user::models::User;

/// Port for authentication operations.
#[async_trait]
pub trait AuthServicePort: Send + Sync + 'static {
    /// Verify credentials and issue an access/refresh token pair.
    ///
    /// # Arguments
    /// * `credentials` - Email and plaintext password
    ///
    /// # Returns
    /// Access token (10 minutes) and refresh token (1 year)
    ///
    /// # Errors
    /// * `NotFound` - No user with this email
    /// * `Unauthorized` - Password does not match
    async fn check_credentials(&self, credentials: Credentials) -> Result<TokenPair, AuthError>;

    /// Exchange a refresh token for a new access token.
    ///
    /// The refresh token is left untouched and stays usable until it expires.
    ///
    /// # Arguments
    /// * `token` - Previously issued refresh token
    ///
    /// # Returns
    /// New access token for the same user
    ///
    /// # Errors
    /// * `Unauthorized` - Token is malformed, badly signed, expired, or its user no longer exists
    async fn check_refresh_token(&self, token: &str) -> Result<String, AuthError>;

    /// Resolve the user a verified token was issued for.
    ///
    /// # Errors
    /// * `Unauthorized` - User no longer exists
    async fn validate_user(&self, payload: &TokenPayload) -> Result<User, AuthError>;
}

/// Signs and verifies bearer tokens.
pub trait TokenCodec: Send + Sync + 'static {
    /// Sign a token for `user_id` expiring `ttl_seconds` from now.
    fn sign(&self, user_id: &str, ttl_seconds: i64) -> Result<String, JwtError>;

    /// Verify signature, structure and expiry of `token` and return its payload.
    fn verify(&self, token: &str) -> Result<TokenPayload, JwtError>;
}

/// One-way password verification.
pub trait PasswordVerifier: Send + Sync + 'static {
    /// Compare `password` against a stored `hash` in constant time.
    ///
    /// # Errors
    /// * `VerificationFailed` - Stored hash cannot be parsed
    fn verify(&self, password: &str, hash: &str) -> Result<bool, PasswordError>;
}
