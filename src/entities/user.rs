//! Back-office user identity

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Role attached to a back-office user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Manager,
    Staff,
}

/// A signed-in user.
///
/// This is the flat record persisted verbatim under the session key and
/// deserialized on process start.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: Role,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_serializes_flat() {
        let user = User {
            id: Uuid::nil(),
            name: "Taro Tanaka".to_string(),
            email: "admin@example.com".to_string(),
            role: Role::Admin,
        };

        let json = serde_json::to_value(&user).expect("serializable");
        assert_eq!(json["role"], "admin");
        assert_eq!(json["email"], "admin@example.com");

        let back: User = serde_json::from_value(json).expect("deserializable");
        assert_eq!(back, user);
    }
}
