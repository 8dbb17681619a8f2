//! JSON-file-backed store.
//!
//! The full user set is held in memory and the backing file is rewritten
//! on every mutation. The file is a JSON array of user records, the same
//! shape the list endpoint serves.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::{Error, Result};
use crate::model::{Session, User};

use super::UserStore;

/// File-backed implementation of [`UserStore`].
pub struct FileStore {
    path: PathBuf,
    users: RwLock<Vec<User>>,
}

impl FileStore {
    /// Opens a store backed by the given file, creating parent directories
    /// as needed. A missing file starts the store empty.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await.map_err(|e| {
                    Error::Store(format!(
                        "Failed to create store directory '{}': {}",
                        parent.display(),
                        e
                    ))
                })?;
            }
        }

        let users = match tokio::fs::read(&path).await {
            Ok(bytes) => serde_json::from_slice(&bytes).map_err(|e| {
                Error::Store(format!(
                    "Failed to parse store file '{}': {}",
                    path.display(),
                    e
                ))
            })?,
            Err(e) if e.kind() == ErrorKind::NotFound => Vec::new(),
            Err(e) => {
                return Err(Error::Store(format!(
                    "Failed to read store file '{}': {}",
                    path.display(),
                    e
                )));
            }
        };

        Ok(Self {
            path,
            users: RwLock::new(users),
        })
    }

    /// Rewrites the backing file with the current user set.
    ///
    /// Called with the write lock held so mutations persist in the order
    /// they were applied.
    async fn persist(&self, users: &[User]) -> Result<()> {
        let bytes = serde_json::to_vec_pretty(users)
            .map_err(|e| Error::Store(format!("Failed to encode store contents: {}", e)))?;
        tokio::fs::write(&self.path, bytes).await.map_err(|e| {
            Error::Store(format!(
                "Failed to write store file '{}': {}",
                self.path.display(),
                e
            ))
        })
    }
}

#[async_trait]
impl UserStore for FileStore {
    async fn insert_user(&self, username: String) -> Result<User> {
        let user = User::new(Uuid::new_v4().to_string(), username);
        let mut users = self.users.write().await;
        users.push(user.clone());
        self.persist(&users).await?;
        Ok(user)
    }

    async fn list_users(&self) -> Result<Vec<User>> {
        Ok(self.users.read().await.clone())
    }

    async fn find_user(&self, id: &str) -> Result<Option<User>> {
        Ok(self
            .users
            .read()
            .await
            .iter()
            .find(|user| user.id == id)
            .cloned())
    }

    async fn append_session(&self, id: &str, session: Session) -> Result<Option<User>> {
        let mut users = self.users.write().await;
        let updated = match users.iter_mut().find(|user| user.id == id) {
            Some(user) => {
                user.log.push(session);
                user.clone()
            }
            None => return Ok(None),
        };
        self.persist(&users).await?;
        Ok(Some(updated))
    }
}
