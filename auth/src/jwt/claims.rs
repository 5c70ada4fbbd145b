use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Payload carried by access and refresh tokens.
///
/// The wire shape is exactly `{ "user_id": ..., "exp": ... }`. Tokens issued
/// elsewhere may carry additional registered claims (such as `iat`); those are
/// ignored when decoding.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenPayload {
    /// Identifier of the user the token was issued for
    pub user_id: String,

    /// Expiration time (Unix timestamp, seconds)
    pub exp: i64,
}

impl TokenPayload {
    /// Create a payload with an explicit expiration timestamp.
    pub fn new(user_id: impl ToString, exp: i64) -> Self {
        Self {
            user_id: user_id.to_string(),
            exp,
        }
    }

    /// Create a payload expiring `ttl_seconds` from now.
    ///
    /// # Arguments
    /// * `user_id` - Unique user identifier
    /// * `ttl_seconds` - Seconds until the token expires
    pub fn for_user(user_id: impl ToString, ttl_seconds: i64) -> Self {
        Self::new(user_id, Utc::now().timestamp() + ttl_seconds)
    }

    /// Check if the payload is expired at `current_timestamp`.
    ///
    /// A payload stays valid up to and including its `exp` second.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        current_timestamp > self.exp
    }
}
