//! Template repository implementation.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, QueryOrder};
use std::sync::Arc;

use super::entities::template::{self, ActiveModel, Entity as TemplateEntity};
use crate::domain::{NewTemplate, Template};
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Template repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait TemplateRepository: Send + Sync {
    /// Find template by ID
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Template>>;

    /// List all templates ordered by ID
    async fn list(&self) -> AppResult<Vec<Template>>;

    /// Insert a new template with a generated ID
    async fn create(&self, new: NewTemplate) -> AppResult<Template>;

    /// Replace all fields; `None` if no template has this ID
    async fn update(&self, id: i64, new: NewTemplate) -> AppResult<Option<Template>>;

    /// Delete by ID; `false` if no template has this ID
    async fn delete(&self, id: i64) -> AppResult<bool>;
}

/// Concrete implementation of TemplateRepository
pub struct TemplateStore {
    db: Arc<DatabaseConnection>,
}

impl TemplateStore {
    /// Create new repository instance
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TemplateRepository for TemplateStore {
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Template>> {
        let result = TemplateEntity::find_by_id(id)
            .one(self.db.as_ref())
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Template::from))
    }

    async fn list(&self) -> AppResult<Vec<Template>> {
        let models = TemplateEntity::find()
            .order_by_asc(template::Column::Id)
            .all(self.db.as_ref())
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Template::from).collect())
    }

    async fn create(&self, new: NewTemplate) -> AppResult<Template> {
        let model = ActiveModel::from_new(new)
            .insert(self.db.as_ref())
            .await
            .map_err(AppError::from)?;

        Ok(Template::from(model))
    }

    async fn update(&self, id: i64, new: NewTemplate) -> AppResult<Option<Template>> {
        match ActiveModel::replace(id, new).update(self.db.as_ref()).await {
            Ok(model) => Ok(Some(Template::from(model))),
            Err(DbErr::RecordNotUpdated) => Ok(None),
            Err(e) => Err(AppError::from(e)),
        }
    }

    async fn delete(&self, id: i64) -> AppResult<bool> {
        let result = TemplateEntity::delete_by_id(id)
            .exec(self.db.as_ref())
            .await
            .map_err(AppError::from)?;

        Ok(result.rows_affected > 0)
    }
}
