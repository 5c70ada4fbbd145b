use async_trait::async_trait;

use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::models::UserWithPassword;
use crate::user::errors::UserError;

/// Read access to user records.
///
/// The password hash is excluded from every lookup except
/// [`find_by_email_with_password`](UserRepository::find_by_email_with_password).
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Retrieve user by identifier.
    ///
    /// # Arguments
    /// * `id` - User ID
    ///
    /// # Returns
    /// Optional user entity (None if not found)
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError>;

    /// Retrieve user by exact email match, including the stored password hash.
    ///
    /// # Arguments
    /// * `email` - Email address
    ///
    /// # Returns
    /// Optional user projection with password (None if not found)
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_email_with_password(
        &self,
        email: &EmailAddress,
    ) -> Result<Option<UserWithPassword>, UserError>;
}
