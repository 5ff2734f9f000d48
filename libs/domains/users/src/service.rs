use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

use crate::error::{UserError, UserResult};
use crate::models::{CreateUser, IdPolicy, UpdateUser, User};
use crate::repository::UserRepository;

/// User directory operations over any [`UserRepository`].
#[derive(Clone)]
pub struct UserService<R: UserRepository> {
    repository: Arc<R>,
    id_policy: IdPolicy,
}

impl<R: UserRepository> UserService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
            id_policy: IdPolicy::default(),
        }
    }

    pub fn with_id_policy(mut self, id_policy: IdPolicy) -> Self {
        self.id_policy = id_policy;
        self
    }

    pub fn id_policy(&self) -> IdPolicy {
        self.id_policy
    }

    pub async fn list_users(&self) -> UserResult<Vec<User>> {
        self.repository.find_all().await
    }

    pub async fn get_user(&self, id: Uuid) -> UserResult<User> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(UserError::NotFound(id))
    }

    /// Validates `input`, assigns an id per the configured [`IdPolicy`] and stores it.
    pub async fn create_user(&self, input: CreateUser) -> UserResult<User> {
        input.validate()?;

        let id = self.id_policy.resolve(input.id);
        self.repository.insert(User::from_create(id, input)).await
    }

    /// Replaces every field of user `id` with `input`.
    ///
    /// The record is looked up before validation, and the swap itself is a
    /// single atomic `replace`, so a failed update never drops the record.
    pub async fn update_user(&self, id: Uuid, input: Option<UpdateUser>) -> UserResult<User> {
        let input = input.ok_or(UserError::MissingPayload)?;

        if self.repository.find_by_id(id).await?.is_none() {
            return Err(UserError::NotFound(id));
        }
        input.validate()?;

        self.repository
            .replace(User::from_update(id, input))
            .await?
            .ok_or(UserError::NotFound(id))
    }

    /// Deletes user `id` and returns a confirmation naming its email.
    pub async fn delete_user(&self, id: Uuid) -> UserResult<String> {
        let removed = self
            .repository
            .remove(id)
            .await?
            .ok_or(UserError::NotFound(id))?;

        Ok(format!("User {} deleted", removed.email))
    }
}
