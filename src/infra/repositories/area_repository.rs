//! Area repository implementation.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, QueryOrder};
use std::sync::Arc;

use super::entities::area::{self, ActiveModel, Entity as AreaEntity};
use crate::domain::{Area, NewArea};
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Area repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait AreaRepository: Send + Sync {
    /// Find area by ID
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Area>>;

    /// List all areas ordered by ID
    async fn list(&self) -> AppResult<Vec<Area>>;

    /// Insert a new area with a generated ID
    async fn create(&self, new: NewArea) -> AppResult<Area>;

    /// Replace all fields; `None` if no area has this ID
    async fn update(&self, id: i64, new: NewArea) -> AppResult<Option<Area>>;

    /// Delete by ID; `false` if no area has this ID
    async fn delete(&self, id: i64) -> AppResult<bool>;
}

/// Concrete implementation of AreaRepository
pub struct AreaStore {
    db: Arc<DatabaseConnection>,
}

impl AreaStore {
    /// Create new repository instance
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AreaRepository for AreaStore {
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Area>> {
        let result = AreaEntity::find_by_id(id)
            .one(self.db.as_ref())
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Area::from))
    }

    async fn list(&self) -> AppResult<Vec<Area>> {
        let models = AreaEntity::find()
            .order_by_asc(area::Column::Id)
            .all(self.db.as_ref())
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Area::from).collect())
    }

    async fn create(&self, new: NewArea) -> AppResult<Area> {
        let model = ActiveModel::from_new(new)
            .insert(self.db.as_ref())
            .await
            .map_err(AppError::from)?;

        Ok(Area::from(model))
    }

    async fn update(&self, id: i64, new: NewArea) -> AppResult<Option<Area>> {
        match ActiveModel::replace(id, new).update(self.db.as_ref()).await {
            Ok(model) => Ok(Some(Area::from(model))),
            Err(DbErr::RecordNotUpdated) => Ok(None),
            Err(e) => Err(AppError::from(e)),
        }
    }

    async fn delete(&self, id: i64) -> AppResult<bool> {
        let result = AreaEntity::delete_by_id(id)
            .exec(self.db.as_ref())
            .await
            .map_err(AppError::from)?;

        Ok(result.rows_affected > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    fn youth(id: i64) -> area::Model {
        area::Model {
            id,
            name: "Youth".to_string(),
            description: Some("Under 18".to_string()),
        }
    }

    fn store(db: MockDatabase) -> AreaStore {
        AreaStore::new(Arc::new(db.into_connection()))
    }

    #[tokio::test]
    async fn test_create_then_find_returns_same_fields() {
        let store = store(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([vec![youth(1)]])
                .append_query_results([vec![youth(1)]]),
        );

        let created = store
            .create(NewArea {
                name: "Youth".to_string(),
                description: Some("Under 18".to_string()),
            })
            .await
            .unwrap();
        let found = store.find_by_id(created.id).await.unwrap();

        assert_eq!(created.id, 1);
        assert_eq!(found, Some(created));
    }

    #[tokio::test]
    async fn test_list_is_ordered_by_id() {
        let store = store(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([vec![youth(1), youth(2)]]),
        );

        let areas = store.list().await.unwrap();
        assert_eq!(areas.iter().map(|a| a.id).collect::<Vec<_>>(), vec![1, 2]);

        let db = Arc::try_unwrap(store.db)
            .ok()
            .expect("connection is not shared");
        let log = db.into_transaction_log();
        assert!(log[0].statements()[0]
            .sql
            .ends_with(r#"ORDER BY "areas"."id" ASC"#));
    }

    #[tokio::test]
    async fn test_update_replaces_all_fields() {
        let store = store(MockDatabase::new(DatabaseBackend::Postgres).append_query_results([
            vec![area::Model {
                id: 1,
                name: "Seniors".to_string(),
                description: None,
            }],
        ]));

        let updated = store
            .update(
                1,
                NewArea {
                    name: "Seniors".to_string(),
                    description: None,
                },
            )
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.name, "Seniors");
        assert_eq!(updated.description, None);
    }

    #[tokio::test]
    async fn test_update_missing_area_returns_none() {
        let store = store(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([Vec::<area::Model>::new()]),
        );

        let updated = store
            .update(
                42,
                NewArea {
                    name: "Seniors".to_string(),
                    description: None,
                },
            )
            .await
            .unwrap();
        assert_eq!(updated, None);
    }

    #[tokio::test]
    async fn test_delete_reports_whether_a_row_was_removed() {
        let store = store(MockDatabase::new(DatabaseBackend::Postgres).append_exec_results([
            MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            },
            MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            },
        ]));

        assert!(store.delete(1).await.unwrap());
        assert!(!store.delete(1).await.unwrap());
    }
}
