//! Mapping repository implementation.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, QueryOrder};
use std::sync::Arc;

use super::entities::mapping::{self, ActiveModel, Entity as MappingEntity};
use crate::domain::{Mapping, NewMapping};
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Mapping repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait MappingRepository: Send + Sync {
    /// Find mapping by ID
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Mapping>>;

    /// List all mappings ordered by ID
    async fn list(&self) -> AppResult<Vec<Mapping>>;

    /// Insert a new mapping with a generated ID
    async fn create(&self, new: NewMapping) -> AppResult<Mapping>;

    /// Replace all fields; `None` if no mapping has this ID
    async fn update(&self, id: i64, new: NewMapping) -> AppResult<Option<Mapping>>;

    /// Delete by ID; `false` if no mapping has this ID
    async fn delete(&self, id: i64) -> AppResult<bool>;
}

/// Concrete implementation of MappingRepository
pub struct MappingStore {
    db: Arc<DatabaseConnection>,
}

impl MappingStore {
    /// Create new repository instance
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl MappingRepository for MappingStore {
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Mapping>> {
        MappingEntity::find_by_id(id)
            .one(self.db.as_ref())
            .await
            .map_err(AppError::from)?
            .map(Mapping::try_from)
            .transpose()
    }

    async fn list(&self) -> AppResult<Vec<Mapping>> {
        MappingEntity::find()
            .order_by_asc(mapping::Column::Id)
            .all(self.db.as_ref())
            .await
            .map_err(AppError::from)?
            .into_iter()
            .map(Mapping::try_from)
            .collect()
    }

    async fn create(&self, new: NewMapping) -> AppResult<Mapping> {
        let model = ActiveModel::from_new(new)
            .insert(self.db.as_ref())
            .await
            .map_err(AppError::from)?;

        Mapping::try_from(model)
    }

    async fn update(&self, id: i64, new: NewMapping) -> AppResult<Option<Mapping>> {
        match ActiveModel::replace(id, new).update(self.db.as_ref()).await {
            Ok(model) => Mapping::try_from(model).map(Some),
            Err(DbErr::RecordNotUpdated) => Ok(None),
            Err(e) => Err(AppError::from(e)),
        }
    }

    async fn delete(&self, id: i64) -> AppResult<bool> {
        let result = MappingEntity::delete_by_id(id)
            .exec(self.db.as_ref())
            .await
            .map_err(AppError::from)?;

        Ok(result.rows_affected > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Reference;
    use sea_orm::{DatabaseBackend, MockDatabase};

    fn row(creditor_id: Option<i64>, donor_id: Option<i64>) -> mapping::Model {
        mapping::Model {
            id: 5,
            pattern: "RENT".to_string(),
            purpose_id: Some(1),
            area_id: None,
            creditor_id,
            donor_id,
            member_id: None,
        }
    }

    fn store(rows: Vec<mapping::Model>) -> MappingStore {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([rows])
            .into_connection();
        MappingStore::new(Arc::new(db))
    }

    #[tokio::test]
    async fn test_find_reads_reference_from_its_column() {
        let mapping = store(vec![row(Some(8), None)])
            .find_by_id(5)
            .await
            .unwrap()
            .unwrap();

        assert_eq!(mapping.reference, Some(Reference::Creditor { id: 8 }));
        assert_eq!(mapping.purpose_id, Some(1));
    }

    #[tokio::test]
    async fn test_find_rejects_row_with_two_references() {
        let result = store(vec![row(Some(8), Some(9))]).find_by_id(5).await;
        assert!(matches!(result, Err(AppError::Internal(_))));
    }

    #[tokio::test]
    async fn test_find_missing_mapping() {
        assert_eq!(store(Vec::new()).find_by_id(5).await.unwrap(), None);
    }
}
