use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, QueryOrder, SqlErr,
    TransactionTrait,
};
use uuid::Uuid;

use crate::{
    entity,
    error::{UserError, UserResult},
    models::User,
    repository::UserRepository,
};

/// [`UserRepository`] over the `users` table.
///
/// Listing is ordered by `created_at`, then `id`.
#[derive(Debug, Clone)]
pub struct PgUserRepository {
    db: DatabaseConnection,
}

impl PgUserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn insert_error(id: Uuid, err: DbErr) -> UserError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => UserError::DuplicateId(id),
        _ => UserError::Database(err),
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn find_by_id(&self, id: Uuid) -> UserResult<Option<User>> {
        let model = entity::Entity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(Into::into))
    }

    async fn find_all(&self) -> UserResult<Vec<User>> {
        let models = entity::Entity::find()
            .order_by_asc(entity::Column::CreatedAt)
            .order_by_asc(entity::Column::Id)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn insert(&self, user: User) -> UserResult<User> {
        let id = user.id;
        let active: entity::ActiveModel = user.into();
        let model = active
            .insert(&self.db)
            .await
            .map_err(|e| insert_error(id, e))?;

        tracing::info!(user_id = %model.id, "Created user");
        Ok(model.into())
    }

    async fn replace(&self, user: User) -> UserResult<Option<User>> {
        let id = user.id;
        let txn = self.db.begin().await?;

        let deleted = entity::Entity::delete_by_id(id).exec(&txn).await?;
        if deleted.rows_affected == 0 {
            txn.rollback().await?;
            return Ok(None);
        }

        let active: entity::ActiveModel = user.into();
        let model = active.insert(&txn).await?;
        txn.commit().await?;

        tracing::info!(user_id = %id, "Replaced user");
        Ok(Some(model.into()))
    }

    async fn remove(&self, id: Uuid) -> UserResult<Option<User>> {
        let txn = self.db.begin().await?;

        let Some(model) = entity::Entity::find_by_id(id).one(&txn).await? else {
            txn.rollback().await?;
            return Ok(None);
        };
        // A concurrent delete may have won since the read.
        let deleted = entity::Entity::delete_by_id(id).exec(&txn).await?;
        if deleted.rows_affected == 0 {
            txn.rollback().await?;
            return Ok(None);
        }
        txn.commit().await?;

        tracing::info!(user_id = %id, "Deleted user");
        Ok(Some(model.into()))
    }
}
