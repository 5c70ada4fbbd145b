//! Authentication utilities library
//!
//! Provides the token and password primitives used by the authentication service:
//! - Password verification against stored bcrypt or Argon2 hashes, plus Argon2id hashing
//! - JWT signing and verification of `{ user_id, exp }` payloads
//!
//! Services define their own ports and adapt these implementations to them.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! let is_valid = hasher.verify("my_password", &hash).unwrap();
//! assert!(is_valid);
//! ```
//!
//! ## JWT Tokens
//! ```
//! use auth::JwtHandler;
//!
//! let handler = JwtHandler::new(b"secret_key_at_least_32_bytes_long!");
//! let token = handler.sign("user123", 600).unwrap();
//! let payload = handler.verify(&token).unwrap();
//! assert_eq!(payload.user_id, "user123");
//! ```

pub mod jwt;
pub mod password;

// Re-export commonly used items
pub use jwt::JwtError;
pub use jwt::JwtHandler;
pub use jwt::TokenPayload;
pub use password::PasswordError;
pub use password::PasswordHasher;
