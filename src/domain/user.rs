//! User domain entity and related types.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{Password, Record};
use crate::config::USER_ID_PREFIX;

/// User domain entity.
///
/// Serializes with its password so stores can persist it; use
/// [`UserResponse`] for anything sent to a client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub username: String,
    pub email: String,
    pub password: Password,
}

impl Record for User {
    const ID_PREFIX: &'static str = USER_ID_PREFIX;
    const ENTITY: &'static str = "User";

    fn id(&self) -> &str {
        &self.id
    }
}

impl User {
    /// Whether this user already holds the given username or email.
    pub fn collides_with(&self, username: &str, email: &str) -> bool {
        self.username == username || self.email == email
    }
}

/// User registration data, before an id is attached.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password: Password,
}

impl NewUser {
    pub fn with_id(self, id: String) -> User {
        User {
            id,
            username: self.username,
            email: self.email,
            password: self.password,
        }
    }
}

/// User response (safe to return to client)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct UserResponse {
    #[schema(example = "u001")]
    pub id: String,
    #[schema(example = "chef_anna")]
    pub username: String,
    #[schema(example = "anna@example.com")]
    pub email: String,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            username: user.username.clone(),
            email: user.email.clone(),
        }
    }
}
