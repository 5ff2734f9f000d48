use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::{UserError, UserResult};
use crate::models::User;

/// Storage for [`User`] records.
///
/// Implementations keep at most one record per id.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> UserResult<Option<User>>;

    /// Every record, in store order.
    async fn find_all(&self) -> UserResult<Vec<User>>;

    /// Adds a record. Fails with [`UserError::DuplicateId`] if the id is taken.
    async fn insert(&self, user: User) -> UserResult<User>;

    /// Atomically swaps the record with `user.id` for `user`.
    ///
    /// Returns `None`, leaving the store untouched, when no such record exists.
    async fn replace(&self, user: User) -> UserResult<Option<User>>;

    /// Removes and returns the record, or `None` if it was not there.
    async fn remove(&self, id: Uuid) -> UserResult<Option<User>>;
}

/// Process-local store; contents are lost on restart.
///
/// Records keep insertion order. A replaced record moves to the end.
#[derive(Debug, Default, Clone)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<Vec<User>>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Position of the single record with `id`.
    fn position(users: &[User], id: Uuid) -> UserResult<Option<usize>> {
        let mut matches = users
            .iter()
            .enumerate()
            .filter(|(_, u)| u.id == id)
            .map(|(i, _)| i);

        let first = matches.next();
        if matches.next().is_some() {
            return Err(UserError::Internal(format!(
                "more than one user stored with id {id}"
            )));
        }
        Ok(first)
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_id(&self, id: Uuid) -> UserResult<Option<User>> {
        let users = self.users.read().await;
        Ok(Self::position(&users, id)?.map(|i| users[i].clone()))
    }

    async fn find_all(&self) -> UserResult<Vec<User>> {
        Ok(self.users.read().await.clone())
    }

    async fn insert(&self, user: User) -> UserResult<User> {
        let mut users = self.users.write().await;

        if Self::position(&users, user.id)?.is_some() {
            return Err(UserError::DuplicateId(user.id));
        }
        users.push(user.clone());

        tracing::info!(user_id = %user.id, "Created user");
        Ok(user)
    }

    async fn replace(&self, user: User) -> UserResult<Option<User>> {
        let mut users = self.users.write().await;

        let Some(index) = Self::position(&users, user.id)? else {
            return Ok(None);
        };
        users.remove(index);
        users.push(user.clone());

        tracing::info!(user_id = %user.id, "Replaced user");
        Ok(Some(user))
    }

    async fn remove(&self, id: Uuid) -> UserResult<Option<User>> {
        let mut users = self.users.write().await;

        let removed = Self::position(&users, id)?.map(|index| users.remove(index));
        if removed.is_some() {
            tracing::info!(user_id = %id, "Deleted user");
        }
        Ok(removed)
    }
}
