//! Role repository implementation.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, QueryOrder};
use std::sync::Arc;

use super::entities::role::{self, ActiveModel, Entity as RoleEntity};
use crate::domain::{NewRole, Role};
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Role repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait RoleRepository: Send + Sync {
    /// Find role by ID
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Role>>;

    /// List all roles ordered by ID
    async fn list(&self) -> AppResult<Vec<Role>>;

    /// Insert a new role with a generated ID
    async fn create(&self, new: NewRole) -> AppResult<Role>;

    /// Replace all fields; `None` if no role has this ID
    async fn update(&self, id: i64, new: NewRole) -> AppResult<Option<Role>>;

    /// Delete by ID; `false` if no role has this ID
    async fn delete(&self, id: i64) -> AppResult<bool>;
}

/// Concrete implementation of RoleRepository
pub struct RoleStore {
    db: Arc<DatabaseConnection>,
}

impl RoleStore {
    /// Create new repository instance
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl RoleRepository for RoleStore {
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Role>> {
        let result = RoleEntity::find_by_id(id)
            .one(self.db.as_ref())
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Role::from))
    }

    async fn list(&self) -> AppResult<Vec<Role>> {
        let models = RoleEntity::find()
            .order_by_asc(role::Column::Id)
            .all(self.db.as_ref())
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Role::from).collect())
    }

    async fn create(&self, new: NewRole) -> AppResult<Role> {
        let model = ActiveModel::from_new(new)
            .insert(self.db.as_ref())
            .await
            .map_err(AppError::from)?;

        Ok(Role::from(model))
    }

    async fn update(&self, id: i64, new: NewRole) -> AppResult<Option<Role>> {
        match ActiveModel::replace(id, new).update(self.db.as_ref()).await {
            Ok(model) => Ok(Some(Role::from(model))),
            Err(DbErr::RecordNotUpdated) => Ok(None),
            Err(e) => Err(AppError::from(e)),
        }
    }

    async fn delete(&self, id: i64) -> AppResult<bool> {
        let result = RoleEntity::delete_by_id(id)
            .exec(self.db.as_ref())
            .await
            .map_err(AppError::from)?;

        Ok(result.rows_affected > 0)
    }
}
