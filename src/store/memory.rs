//! Volatile in-memory store.

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::Result;
use crate::model::{Session, User};

use super::UserStore;

/// In-memory implementation of [`UserStore`].
///
/// Users live in a vector in creation order behind an async lock. Nothing
/// survives process restart.
pub struct InMemoryStore {
    users: RwLock<Vec<User>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self {
            users: RwLock::new(Vec::new()),
        }
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserStore for InMemoryStore {
    async fn insert_user(&self, username: String) -> Result<User> {
        let user = User::new(Uuid::new_v4().to_string(), username);
        self.users.write().await.push(user.clone());
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
        match users.iter_mut().find(|user| user.id == id) {
            Some(user) => {
                user.log.push(session);
                Ok(Some(user.clone()))
            }
            None => Ok(None),
        }
    }
}
