//! Core data types for the tracker.
//!
//! A [`User`] owns an ordered log of [`Session`] entries. Sessions have no
//! identity of their own: they exist only embedded in exactly one user's
//! log and are immutable once appended.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Opaque identifier assigned to a user by the store on creation.
pub type UserId = String;

/// One logged exercise occurrence.
///
/// `duration` is an integer in caller-defined units; the service does not
/// interpret it. `date` is serialized in `YYYY-MM-DD` form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub description: String,
    pub duration: i64,
    pub date: NaiveDate,
}

impl Session {
    /// Renders the session date in long form, e.g. `"Mon Jan 01 2024"`.
    ///
    /// The append response reports the date this way instead of the stored
    /// `YYYY-MM-DD` shape.
    pub fn long_date(&self) -> String {
        self.date.format("%a %b %d %Y").to_string()
    }
}

/// A user record with its exercise log.
///
/// The log preserves insertion order, which is the order sessions were
/// created in — not necessarily sorted by session date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: UserId,
    pub username: String,
    pub log: Vec<Session>,
}

impl User {
    /// Creates a user with an empty log.
    pub fn new(id: UserId, username: String) -> Self {
        Self {
            id,
            username,
            log: Vec::new(),
        }
    }
}
