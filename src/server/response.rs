//! HTTP response types for the tracker API.

use serde::Serialize;

use crate::model::{Session, User, UserId};

/// Response body for user creation.
#[derive(Debug, Serialize)]
pub struct UserCreated {
    pub username: String,
    #[serde(rename = "_id")]
    pub id: UserId,
}

impl From<User> for UserCreated {
    fn from(user: User) -> Self {
        Self {
            username: user.username,
            id: user.id,
        }
    }
}

/// Response body for an appended exercise.
///
/// `date` is the long-form rendering (`"Mon Jan 01 2024"`), not the stored
/// `YYYY-MM-DD` shape.
#[derive(Debug, Serialize)]
pub struct ExerciseAdded {
    #[serde(rename = "_id")]
    pub id: UserId,
    pub username: String,
    pub date: String,
    pub description: String,
    pub duration: i64,
}

impl ExerciseAdded {
    /// Builds the response for `session` freshly appended to `user`.
    pub fn new(user: &User, session: &Session) -> Self {
        Self {
            id: user.id.clone(),
            username: user.username.clone(),
            date: session.long_date(),
            description: session.description.clone(),
            duration: session.duration,
        }
    }
}

/// Response body for a log retrieval.
///
/// `log` holds the filtered and truncated view; `count` is its length,
/// not the size of the full stored log.
#[derive(Debug, Serialize)]
pub struct UserLog {
    #[serde(rename = "_id")]
    pub id: UserId,
    pub username: String,
    pub log: Vec<Session>,
    pub count: usize,
}

impl UserLog {
    pub fn new(id: UserId, username: String, log: Vec<Session>) -> Self {
        Self {
            id,
            username,
            count: log.len(),
            log,
        }
    }
}
