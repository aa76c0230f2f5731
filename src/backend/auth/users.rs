/**
 * User Model
 *
 * This module defines the stored user record and the public projection that
 * is the only user shape ever serialized into a response.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// User struct representing a user in the database
///
/// Deliberately not `Serialize`: the password hash must never reach a
/// response body. Convert to [`PublicUser`] first.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    /// Unique user ID (UUID)
    pub id: Uuid,
    /// Display name
    pub name: String,
    /// User email address (unique, compared exactly as stored)
    pub email: String,
    /// Hashed password (bcrypt)
    pub password_hash: String,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
}

/// Fields needed to create a user
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
}

impl User {
    /// Build a user record from creation input
    pub fn from_new(new_user: NewUser) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: new_user.name,
            email: new_user.email,
            password_hash: new_user.password_hash,
            created_at: Utc::now(),
        }
    }

    /// Public identity of this user
    pub fn public(&self) -> PublicUser {
        PublicUser {
            id: self.id,
            name: self.name.clone(),
            email: self.email.clone(),
        }
    }
}

/// User information that is safe to return to clients
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PublicUser {
    pub id: Uuid,
    pub name: String,
    pub email: String,
}

impl From<User> for PublicUser {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_user_has_no_password() {
        let user = User::from_new(NewUser {
            name: "Ann".into(),
            email: "ann@x.com".into(),
            password_hash: "$2b$04$hash".into(),
        });
        let json = serde_json::to_value(user.public()).unwrap();
        assert_eq!(json["name"], "Ann");
        assert_eq!(json["email"], "ann@x.com");
        assert_eq!(json["id"], user.id.to_string());
        assert_eq!(json.as_object().unwrap().len(), 3);
    }
}
