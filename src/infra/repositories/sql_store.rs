//! SQL record store (SeaORM).
//!
//! One connection pool serves both entity types. Uniqueness of ids,
//! usernames and emails is enforced by the schema; a violated constraint
//! surfaces as `Conflict`.

use async_trait::async_trait;
use chrono::{Duration, Utc};
use sea_orm::{
    ConnectionTrait, DatabaseConnection, DbErr, EntityTrait, QueryOrder, SqlErr, Statement,
    TransactionTrait,
};

use super::base::{duplicate_id, ensure_unique_ids, RecordBuilder, RecordStore};
use super::entities::{recipe, user};
use crate::domain::{Recipe, Record, User};
use crate::errors::{AppError, AppResult};

/// Record store over a SeaORM connection
#[derive(Clone)]
pub struct SqlStore {
    db: DatabaseConnection,
}

impl SqlStore {
    /// Create new store instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn select_one(&self) -> AppResult<()> {
        self.db
            .execute(Statement::from_string(
                self.db.get_database_backend(),
                "SELECT 1".to_string(),
            ))
            .await?;
        Ok(())
    }
}

/// Map a unique-constraint violation to `conflict()`, anything else to `Database`.
fn insert_error(err: DbErr, conflict: impl FnOnce() -> AppError) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(detail)) => {
            tracing::debug!(%detail, "Unique constraint violated");
            conflict()
        }
        _ => AppError::Database(err),
    }
}

/// Users have three unique columns; the violated one is not reported.
fn user_conflict() -> AppError {
    AppError::conflict(User::ENTITY)
}

#[async_trait]
impl RecordStore<Recipe> for SqlStore {
    async fn list(&self) -> AppResult<Vec<Recipe>> {
        recipe::Entity::find()
            .order_by_asc(recipe::Column::CreatedAt)
            .order_by_asc(recipe::Column::Id)
            .all(&self.db)
            .await?
            .into_iter()
            .map(Recipe::try_from)
            .collect()
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Recipe>> {
        recipe::Entity::find_by_id(id.to_string())
            .one(&self.db)
            .await?
            .map(Recipe::try_from)
            .transpose()
    }

    async fn insert_with(&self, build: RecordBuilder<Recipe>) -> AppResult<Recipe> {
        let snapshot = RecordStore::<Recipe>::list(self).await?;
        let record = build(snapshot.as_slice())?;

        recipe::Entity::insert(recipe::active_model(record.clone(), Utc::now()))
            .exec_without_returning(&self.db)
            .await
            .map_err(|e| insert_error(e, duplicate_id::<Recipe>))?;

        tracing::debug!(store = "recipes", record_id = %record.id, "Record inserted");
        Ok(record)
    }

    async fn delete_by_id(&self, id: &str) -> AppResult<Option<Recipe>> {
        let Some(found) = RecordStore::<Recipe>::find_by_id(self, id).await? else {
            return Ok(None);
        };

        let result = recipe::Entity::delete_by_id(id.to_string())
            .exec(&self.db)
            .await?;
        // A concurrent delete removed the row after our lookup
        if result.rows_affected == 0 {
            return Ok(None);
        }

        tracing::debug!(store = "recipes", record_id = id, "Record deleted");
        Ok(Some(found))
    }

    async fn replace_all(&self, records: Vec<Recipe>) -> AppResult<usize> {
        ensure_unique_ids(&records)?;
        let total = records.len();
        let base = Utc::now();

        let txn = self.db.begin().await?;
        recipe::Entity::delete_many().exec(&txn).await?;
        if !records.is_empty() {
            let rows = records
                .into_iter()
                .enumerate()
                .map(|(i, r)| recipe::active_model(r, base + Duration::microseconds(i as i64)));
            recipe::Entity::insert_many(rows)
                .exec_without_returning(&txn)
                .await?;
        }
        txn.commit().await?;

        tracing::debug!(store = "recipes", total, "Record set replaced");
        Ok(total)
    }

    async fn ping(&self) -> AppResult<()> {
        self.select_one().await
    }
}

#[async_trait]
impl RecordStore<User> for SqlStore {
    async fn list(&self) -> AppResult<Vec<User>> {
        let models = user::Entity::find()
            .order_by_asc(user::Column::CreatedAt)
            .order_by_asc(user::Column::Id)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(User::from).collect())
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<User>> {
        let model = user::Entity::find_by_id(id.to_string())
            .one(&self.db)
            .await?;

        Ok(model.map(User::from))
    }

    async fn insert_with(&self, build: RecordBuilder<User>) -> AppResult<User> {
        let snapshot = RecordStore::<User>::list(self).await?;
        let record = build(snapshot.as_slice())?;

        user::Entity::insert(user::active_model(record.clone(), Utc::now()))
            .exec_without_returning(&self.db)
            .await
            .map_err(|e| insert_error(e, user_conflict))?;

        tracing::debug!(store = "users", record_id = %record.id, "Record inserted");
        Ok(record)
    }

    async fn delete_by_id(&self, id: &str) -> AppResult<Option<User>> {
        let Some(found) = RecordStore::<User>::find_by_id(self, id).await? else {
            return Ok(None);
        };

        let result = user::Entity::delete_by_id(id.to_string())
            .exec(&self.db)
            .await?;
        // A concurrent delete removed the row after our lookup
        if result.rows_affected == 0 {
            return Ok(None);
        }

        tracing::debug!(store = "users", record_id = id, "Record deleted");
        Ok(Some(found))
    }

    async fn replace_all(&self, records: Vec<User>) -> AppResult<usize> {
        ensure_unique_ids(&records)?;
        let total = records.len();
        let base = Utc::now();

        let txn = self.db.begin().await?;
        user::Entity::delete_many().exec(&txn).await?;
        if !records.is_empty() {
            let rows = records
                .into_iter()
                .enumerate()
                .map(|(i, u)| user::active_model(u, base + Duration::microseconds(i as i64)));
            user::Entity::insert_many(rows)
                .exec_without_returning(&txn)
                .await
                .map_err(|e| insert_error(e, user_conflict))?;
        }
        txn.commit().await?;

        tracing::debug!(store = "users", total, "Record set replaced");
        Ok(total)
    }

    async fn ping(&self) -> AppResult<()> {
        self.select_one().await
    }
}
