//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use crate::domain::entity::user::User;
use crate::domain::value_object::email::Email;
use crate::error::AuthResult;

/// Read access to the `users` table
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Find the user whose email equals `email` exactly
    ///
    /// ## Errors
    /// - [`AuthError::UserNotFound`](crate::error::AuthError::UserNotFound) when no row matches
    /// - [`AuthError::Database`](crate::error::AuthError::Database) when the store cannot be queried
    /// - [`AuthError::Internal`](crate::error::AuthError::Internal) when the row holds an unreadable hash
    async fn find_by_email(&self, email: &Email) -> AuthResult<User>;
}
