//! Creditor repository implementation.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, QueryOrder};
use std::sync::Arc;

use super::entities::creditor::{self, ActiveModel, Entity as CreditorEntity};
use crate::domain::{Creditor, NewCreditor};
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Creditor repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait CreditorRepository: Send + Sync {
    /// Find creditor by ID
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Creditor>>;

    /// List all creditors ordered by ID
    async fn list(&self) -> AppResult<Vec<Creditor>>;

    /// Insert a new creditor with a generated ID
    async fn create(&self, new: NewCreditor) -> AppResult<Creditor>;

    /// Replace all fields; `None` if no creditor has this ID
    async fn update(&self, id: i64, new: NewCreditor) -> AppResult<Option<Creditor>>;

    /// Delete by ID; `false` if no creditor has this ID
    async fn delete(&self, id: i64) -> AppResult<bool>;
}

/// Concrete implementation of CreditorRepository
pub struct CreditorStore {
    db: Arc<DatabaseConnection>,
}

impl CreditorStore {
    /// Create new repository instance
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CreditorRepository for CreditorStore {
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Creditor>> {
        let result = CreditorEntity::find_by_id(id)
            .one(self.db.as_ref())
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Creditor::from))
    }

    async fn list(&self) -> AppResult<Vec<Creditor>> {
        let models = CreditorEntity::find()
            .order_by_asc(creditor::Column::Id)
            .all(self.db.as_ref())
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Creditor::from).collect())
    }

    async fn create(&self, new: NewCreditor) -> AppResult<Creditor> {
        let model = ActiveModel::from_new(new)
            .insert(self.db.as_ref())
            .await
            .map_err(AppError::from)?;

        Ok(Creditor::from(model))
    }

    async fn update(&self, id: i64, new: NewCreditor) -> AppResult<Option<Creditor>> {
        match ActiveModel::replace(id, new).update(self.db.as_ref()).await {
            Ok(model) => Ok(Some(Creditor::from(model))),
            Err(DbErr::RecordNotUpdated) => Ok(None),
            Err(e) => Err(AppError::from(e)),
        }
    }

    async fn delete(&self, id: i64) -> AppResult<bool> {
        let result = CreditorEntity::delete_by_id(id)
            .exec(self.db.as_ref())
            .await
            .map_err(AppError::from)?;

        Ok(result.rows_affected > 0)
    }
}
