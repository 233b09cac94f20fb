//! Receipt repository implementation.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
};
use std::sync::Arc;

use super::entities::receipt::{self, ActiveModel, Entity as ReceiptEntity};
use crate::domain::{NewReceipt, Receipt};
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Receipt repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait ReceiptRepository: Send + Sync {
    /// Find receipt by ID
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Receipt>>;

    /// List all receipts ordered by ID
    async fn list(&self) -> AppResult<Vec<Receipt>>;

    /// List the receipts issued to one donor ordered by start date
    async fn list_by_donor(&self, donor_id: i64) -> AppResult<Vec<Receipt>>;

    /// Insert a new receipt with a generated ID
    async fn create(&self, new: NewReceipt) -> AppResult<Receipt>;

    /// Replace all fields; `None` if no receipt has this ID
    async fn update(&self, id: i64, new: NewReceipt) -> AppResult<Option<Receipt>>;

    /// Delete by ID; `false` if no receipt has this ID
    async fn delete(&self, id: i64) -> AppResult<bool>;
}

/// Concrete implementation of ReceiptRepository
pub struct ReceiptStore {
    db: Arc<DatabaseConnection>,
}

impl ReceiptStore {
    /// Create new repository instance
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ReceiptRepository for ReceiptStore {
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Receipt>> {
        let result = ReceiptEntity::find_by_id(id)
            .one(self.db.as_ref())
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Receipt::from))
    }

    async fn list(&self) -> AppResult<Vec<Receipt>> {
        let models = ReceiptEntity::find()
            .order_by_asc(receipt::Column::Id)
            .all(self.db.as_ref())
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Receipt::from).collect())
    }

    async fn list_by_donor(&self, donor_id: i64) -> AppResult<Vec<Receipt>> {
        let models = ReceiptEntity::find()
            .filter(receipt::Column::DonorId.eq(donor_id))
            .order_by_asc(receipt::Column::StartDate)
            .all(self.db.as_ref())
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Receipt::from).collect())
    }

    async fn create(&self, new: NewReceipt) -> AppResult<Receipt> {
        let model = ActiveModel::from_new(new)
            .insert(self.db.as_ref())
            .await
            .map_err(AppError::from)?;

        Ok(Receipt::from(model))
    }

    async fn update(&self, id: i64, new: NewReceipt) -> AppResult<Option<Receipt>> {
        match ActiveModel::replace(id, new).update(self.db.as_ref()).await {
            Ok(model) => Ok(Some(Receipt::from(model))),
            Err(DbErr::RecordNotUpdated) => Ok(None),
            Err(e) => Err(AppError::from(e)),
        }
    }

    async fn delete(&self, id: i64) -> AppResult<bool> {
        let result = ReceiptEntity::delete_by_id(id)
            .exec(self.db.as_ref())
            .await
            .map_err(AppError::from)?;

        Ok(result.rows_affected > 0)
    }
}
