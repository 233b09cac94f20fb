//! Donor repository implementation.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, QueryOrder};
use std::sync::Arc;

use super::entities::donor::{self, ActiveModel, Entity as DonorEntity};
use crate::domain::{Donor, NewDonor};
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Donor repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait DonorRepository: Send + Sync {
    /// Find donor by ID
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Donor>>;

    /// List all donors ordered by ID
    async fn list(&self) -> AppResult<Vec<Donor>>;

    /// Insert a new donor with a generated ID
    async fn create(&self, new: NewDonor) -> AppResult<Donor>;

    /// Replace all fields; `None` if no donor has this ID
    async fn update(&self, id: i64, new: NewDonor) -> AppResult<Option<Donor>>;

    /// Delete by ID; `false` if no donor has this ID
    async fn delete(&self, id: i64) -> AppResult<bool>;
}

/// Concrete implementation of DonorRepository
pub struct DonorStore {
    db: Arc<DatabaseConnection>,
}

impl DonorStore {
    /// Create new repository instance
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl DonorRepository for DonorStore {
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Donor>> {
        let result = DonorEntity::find_by_id(id)
            .one(self.db.as_ref())
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Donor::from))
    }

    async fn list(&self) -> AppResult<Vec<Donor>> {
        let models = DonorEntity::find()
            .order_by_asc(donor::Column::Id)
            .all(self.db.as_ref())
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Donor::from).collect())
    }

    async fn create(&self, new: NewDonor) -> AppResult<Donor> {
        let model = ActiveModel::from_new(new)
            .insert(self.db.as_ref())
            .await
            .map_err(AppError::from)?;

        Ok(Donor::from(model))
    }

    async fn update(&self, id: i64, new: NewDonor) -> AppResult<Option<Donor>> {
        match ActiveModel::replace(id, new).update(self.db.as_ref()).await {
            Ok(model) => Ok(Some(Donor::from(model))),
            Err(DbErr::RecordNotUpdated) => Ok(None),
            Err(e) => Err(AppError::from(e)),
        }
    }

    async fn delete(&self, id: i64) -> AppResult<bool> {
        let result = DonorEntity::delete_by_id(id)
            .exec(self.db.as_ref())
            .await
            .map_err(AppError::from)?;

        Ok(result.rows_affected > 0)
    }
}
