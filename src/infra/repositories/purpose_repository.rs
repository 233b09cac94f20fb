//! Purpose repository implementation.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, QueryOrder};
use std::sync::Arc;

use super::entities::purpose::{self, ActiveModel, Entity as PurposeEntity};
use crate::domain::{NewPurpose, Purpose};
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Purpose repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait PurposeRepository: Send + Sync {
    /// Find purpose by ID
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Purpose>>;

    /// List all purposes ordered by ID
    async fn list(&self) -> AppResult<Vec<Purpose>>;

    /// Insert a new purpose with a generated ID
    async fn create(&self, new: NewPurpose) -> AppResult<Purpose>;

    /// Replace all fields; `None` if no purpose has this ID
    async fn update(&self, id: i64, new: NewPurpose) -> AppResult<Option<Purpose>>;

    /// Delete by ID; `false` if no purpose has this ID
    async fn delete(&self, id: i64) -> AppResult<bool>;
}

/// Concrete implementation of PurposeRepository
pub struct PurposeStore {
    db: Arc<DatabaseConnection>,
}

impl PurposeStore {
    /// Create new repository instance
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PurposeRepository for PurposeStore {
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Purpose>> {
        let result = PurposeEntity::find_by_id(id)
            .one(self.db.as_ref())
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Purpose::from))
    }

    async fn list(&self) -> AppResult<Vec<Purpose>> {
        let models = PurposeEntity::find()
            .order_by_asc(purpose::Column::Id)
            .all(self.db.as_ref())
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Purpose::from).collect())
    }

    async fn create(&self, new: NewPurpose) -> AppResult<Purpose> {
        let model = ActiveModel::from_new(new)
            .insert(self.db.as_ref())
            .await
            .map_err(AppError::from)?;

        Ok(Purpose::from(model))
    }

    async fn update(&self, id: i64, new: NewPurpose) -> AppResult<Option<Purpose>> {
        match ActiveModel::replace(id, new).update(self.db.as_ref()).await {
            Ok(model) => Ok(Some(Purpose::from(model))),
            Err(DbErr::RecordNotUpdated) => Ok(None),
            Err(e) => Err(AppError::from(e)),
        }
    }

    async fn delete(&self, id: i64) -> AppResult<bool> {
        let result = PurposeEntity::delete_by_id(id)
            .exec(self.db.as_ref())
            .await
            .map_err(AppError::from)?;

        Ok(result.rows_affected > 0)
    }
}
