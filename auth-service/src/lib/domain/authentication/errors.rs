use auth::JwtError;
use auth::PasswordError;
use thiserror::Error;

use crate::user::errors::UserError;

/// Error for authentication operations.
///
/// `NotFound` and `Unauthorized` are the only outcomes a caller is expected to
/// handle; the remaining variants carry collaborator faults unchanged.
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    /// No account exists for the supplied email (login only)
    #[error("User not found")]
    NotFound,

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Token signing failed: {0}")]
    TokenSigning(JwtError),

    #[error("Password error: {0}")]
    Password(#[from] PasswordError),

    #[error("User store error: {0}")]
    User(#[from] UserError),
}
