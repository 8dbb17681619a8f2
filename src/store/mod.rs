//! The document store holding users and their embedded sessions.
//!
//! The store is an external collaborator as far as the service is
//! concerned: handlers see only the [`UserStore`] trait, which covers the
//! four operations the API needs. Backends are selected through
//! [`StoreConfig`] by the [`create_store`] factory.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::InMemoryStore;

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::model::{Session, User};

/// Store backend configuration.
///
/// Defaults to a file-backed store under `data/users.json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type")]
pub enum StoreConfig {
    /// Volatile in-memory store (useful for testing and development).
    InMemory,

    /// JSON-file-backed store.
    File(FileStoreConfig),
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig::File(FileStoreConfig {
            path: "data/users.json".to_string(),
        })
    }
}

/// File store configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FileStoreConfig {
    /// Path of the JSON file holding all user records.
    pub path: String,
}

/// Async interface to the document store.
///
/// The store assigns identifiers on insert. A read-then-append sequence is
/// not atomic across calls; each individual operation is consistent under
/// the store's own locking.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Inserts a new user with an empty log, returning it with its
    /// assigned id.
    async fn insert_user(&self, username: String) -> Result<User>;

    /// Returns all users in creation order, logs included.
    async fn list_users(&self) -> Result<Vec<User>>;

    /// Looks up a single user by id.
    async fn find_user(&self, id: &str) -> Result<Option<User>>;

    /// Appends a session to the identified user's log, preserving order.
    ///
    /// Returns the updated user, or `None` if the id is unknown.
    async fn append_session(&self, id: &str, session: Session) -> Result<Option<User>>;
}

/// Creates a store instance based on the provided configuration.
pub async fn create_store(config: &StoreConfig) -> Result<Arc<dyn UserStore>> {
    match config {
        StoreConfig::InMemory => Ok(Arc::new(InMemoryStore::new())),
        StoreConfig::File(file_config) => {
            let store = FileStore::open(&file_config.path).await?;
            Ok(Arc::new(store))
        }
    }
}
