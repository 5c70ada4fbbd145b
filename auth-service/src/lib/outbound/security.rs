use auth::JwtError;
use auth::JwtHandler;
use auth::PasswordError;
use auth::PasswordHasher;
use auth::TokenPayload;

use crate::domain::authentication::ports::PasswordVerifier;
use crate::domain::authentication::ports::TokenCodec;

impl TokenCodec for JwtHandler {
    fn sign(&self, user_id: &str, ttl_seconds: i64) -> Result<String, JwtError> {
        JwtHandler::sign(self, user_id, ttl_seconds)
    }

    fn verify(&self, token: &str) -> Result<TokenPayload, JwtError> {
        JwtHandler::verify(self, token)
    }
}

impl PasswordVerifier for PasswordHasher {
    fn verify(&self, password: &str, hash: &str) -> Result<bool, PasswordError> {
        PasswordHasher::verify(self, password, hash)
    }
}
