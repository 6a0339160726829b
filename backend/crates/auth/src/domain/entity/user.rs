//! User Entity
//!
//! A row of the `users` table. The table belongs to account management;
//! this crate only reads it.

use crate::domain::entity::identity::Identity;
use crate::domain::value_object::{email::Email, user_id::UserId, user_password::UserPassword};

/// User entity, including the stored password hash
///
/// Deliberately not `Serialize`: only [`Identity`] leaves the crate.
#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub email: Email,
    pub name: String,
    pub password: UserPassword,
}

impl User {
    pub fn new(id: UserId, email: Email, name: impl Into<String>, password: UserPassword) -> Self {
        Self {
            id,
            email,
            name: name.into(),
            password,
        }
    }

    /// Reduce to the principal handed to the session layer
    pub fn into_identity(self) -> Identity {
        Identity {
            id: self.id,
            email: self.email,
            name: self.name,
        }
    }
}
