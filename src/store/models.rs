use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Identity record. The password field holds a bcrypt hash and never leaves
/// the server; clients only ever see [`UserPublic`].
#[derive(Clone)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub password: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    #[must_use]
    pub fn public(&self) -> UserPublic {
        UserPublic {
            id: self.id,
            username: self.username.clone(),
            email: self.email.clone(),
        }
    }
}

impl std::fmt::Debug for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password", &"***")
            .finish()
    }
}

/// The client-facing projection of a user.
#[derive(ToSchema, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct UserPublic {
    pub id: Uuid,
    pub username: String,
    pub email: String,
}

/// A reply embedded within exactly one question. Immutable once appended.
#[derive(ToSchema, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Answer {
    pub id: Uuid,
    pub body: String,
    /// Display-name snapshot of the author at creation time.
    pub created_by: String,
    pub author_id: Uuid,
    pub created_at: DateTime<Utc>,
}

/// A top-level post with zero or more embedded answers, ordered newest-last.
#[derive(ToSchema, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub id: Uuid,
    pub title: String,
    pub body: String,
    /// Display-name snapshot of the author at creation time.
    pub created_by: String,
    pub author_id: Uuid,
    pub answers: Vec<Answer>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
