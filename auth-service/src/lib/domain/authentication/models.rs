use std::fmt;

use crate::domain::user::models::EmailAddress;

/// Lifetime of an access token.
pub const ACCESS_TOKEN_MINUTES_TO_LIVE: i64 = 10;

/// Lifetime of a refresh token (one non-leap year).
pub const REFRESH_TOKEN_MINUTES_TO_LIVE: i64 = 525_600;

/// Login credentials.
///
/// The plaintext password is never persisted; `Debug` output redacts it.
#[derive(Clone)]
pub struct Credentials {
    pub email: EmailAddress,
    pub password: String,
}

impl Credentials {
    pub fn new(email: EmailAddress, password: String) -> Self {
        Self { email, password }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Access and refresh tokens issued together on login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenPair {
    pub access: String,
    pub refresh: String,
}
