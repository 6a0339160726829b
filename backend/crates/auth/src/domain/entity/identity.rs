//! Identity
//!
//! The verified principal returned on a successful login.

use serde::Serialize;

use crate::domain::value_object::{email::Email, user_id::UserId};

/// `{id, email, name}` of an authenticated user
///
/// Has no password field, so nothing secret can be serialized from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Identity {
    pub id: UserId,
    pub email: Email,
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_serialized_fields() {
        let identity = Identity {
            id: UserId::from_uuid(Uuid::nil()),
            email: Email::from_db("a@b.com"),
            name: "A".to_string(),
        };

        let json = serde_json::to_value(&identity).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": "00000000-0000-0000-0000-000000000000",
                "email": "a@b.com",
                "name": "A",
            })
        );
    }
}
