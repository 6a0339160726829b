//! PostgreSQL Repository Implementations

use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{
    email::Email, user_id::UserId, user_password::UserPassword,
};
use crate::error::{AuthError, AuthResult};

/// PostgreSQL-backed user repository
///
/// Expects a `users` table with `id UUID, email TEXT, name TEXT, password TEXT`.
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// ============================================================================
// User Repository Implementation
// ============================================================================

impl UserRepository for PgUserRepository {
    async fn find_by_email(&self, email: &Email) -> AuthResult<User> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT
                id,
                email,
                name,
                password
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await?;

        row.ok_or(AuthError::UserNotFound)?.into_user()
    }
}

// ============================================================================
// Row Types
// ============================================================================

#[derive(sqlx::FromRow)]
struct UserRow {
    id: Uuid,
    email: String,
    name: String,
    password: String,
}

impl UserRow {
    fn into_user(self) -> AuthResult<User> {
        Ok(User::new(
            UserId::from_uuid(self.id),
            Email::from_db(self.email),
            self.name,
            UserPassword::from_stored(self.password)?,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_object::user_password::RawPassword;

    #[test]
    fn test_row_into_user() {
        let raw = RawPassword::new("secret1".to_string()).unwrap();
        let hash = UserPassword::from_raw(&raw, None).unwrap();
        let id = Uuid::new_v4();

        let user = UserRow {
            id,
            email: "a@b.com".to_string(),
            name: "A".to_string(),
            password: hash.as_str().to_string(),
        }
        .into_user()
        .unwrap();

        assert_eq!(user.id.as_uuid(), &id);
        assert_eq!(user.email.as_str(), "a@b.com");
        assert!(user.password.verify(&raw, None));
    }

    #[test]
    fn test_row_with_unreadable_hash() {
        let result = UserRow {
            id: Uuid::new_v4(),
            email: "a@b.com".to_string(),
            name: "A".to_string(),
            password: "hunter22".to_string(),
        }
        .into_user();

        assert!(matches!(result, Err(AuthError::Internal(_))));
    }
}
