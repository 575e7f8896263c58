use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// User roles
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    User,
    Premium,
    Admin,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::User => write!(f, "user"),
            Role::Premium => write!(f, "premium"),
            Role::Admin => write!(f, "admin"),
        }
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "user" => Ok(Role::User),
            "premium" => Ok(Role::Premium),
            "admin" => Ok(Role::Admin),
            _ => Err(format!("Unknown role: {}", s)),
        }
    }
}

/// User entity - represents a user stored in MongoDB
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier (stored as _id in MongoDB)
    #[serde(rename = "_id", alias = "id")]
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    /// User email (unique)
    pub email: String,
    pub age: Option<i32>,
    /// Password hash (never exposed in outward DTOs)
    #[serde(skip_serializing)]
    #[serde(default)]
    pub password_hash: String,
    /// Reference to the user's cart, if one has been created
    pub cart: Option<Uuid>,
    /// User role
    #[serde(default)]
    pub role: Role,
    /// Timestamp of the most recent authenticated request
    pub last_connection: DateTime<Utc>,
}

/// Lean user view - what the admin panel and session endpoints see
///
/// Deliberately omits the password hash and cart reference.
#[derive(Debug, Clone, Serialize)]
pub struct UserSummary {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub age: Option<i32>,
    pub role: Role,
    pub last_connection: DateTime<Utc>,
}

impl From<User> for UserSummary {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            first_name: user.first_name,
            last_name: user.last_name,
            email: user.email,
            age: user.age,
            role: user.role,
            last_connection: user.last_connection,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn user(email: &str, role: Role) -> User {
        User {
            id: Uuid::now_v7(),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: email.to_string(),
            age: Some(36),
            password_hash: "$argon2id$v=19$m=65536".to_string(),
            cart: None,
            role,
            last_connection: Utc::now(),
        }
    }

    #[test]
    fn test_role_round_trip() {
        for role in [Role::User, Role::Premium, Role::Admin] {
            assert_eq!(Role::from_str(&role.to_string()).unwrap(), role);
        }
        assert!(Role::from_str("superuser").is_err());
    }

    #[test]
    fn test_summary_carries_profile_fields() {
        let u = user("ada@example.com", Role::Premium);
        let id = u.id;

        let summary = UserSummary::from(u);
        assert_eq!(summary.id, id);
        assert_eq!(summary.email, "ada@example.com");
        assert_eq!(summary.role, Role::Premium);
    }

    #[test]
    fn test_user_serialization_skips_password_hash() {
        let u = user("ada@example.com", Role::User);
        let json = serde_json::to_value(&u).unwrap();

        assert!(json.get("password_hash").is_none());
        assert_eq!(json.get("email").unwrap(), "ada@example.com");
    }
}
