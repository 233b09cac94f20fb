//! Area service - CRUD use cases for areas.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{Area, NewArea};
use crate::errors::{AppError, AppResult, EntityKind, OptionExt};
use crate::infra::AreaRepository;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Area service trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait AreaService: Send + Sync {
    /// Get area by ID
    async fn get(&self, id: i64) -> AppResult<Area>;

    /// List all areas
    async fn list(&self) -> AppResult<Vec<Area>>;

    /// Create a new area
    async fn create(&self, new: NewArea) -> AppResult<Area>;

    /// Replace all fields of an area
    async fn update(&self, id: i64, new: NewArea) -> AppResult<Area>;

    /// Delete an area
    async fn delete(&self, id: i64) -> AppResult<()>;
}

/// Concrete implementation of AreaService.
pub struct AreaManager {
    areas: Arc<dyn AreaRepository>,
}

impl AreaManager {
    /// Create new area service instance
    pub fn new(areas: Arc<dyn AreaRepository>) -> Self {
        Self { areas }
    }
}

#[async_trait]
impl AreaService for AreaManager {
    async fn get(&self, id: i64) -> AppResult<Area> {
        self.areas
            .find_by_id(id)
            .await?
            .ok_or_not_found(EntityKind::Area)
    }

    async fn list(&self) -> AppResult<Vec<Area>> {
        self.areas.list().await
    }

    async fn create(&self, new: NewArea) -> AppResult<Area> {
        self.areas.create(new).await
    }

    async fn update(&self, id: i64, new: NewArea) -> AppResult<Area> {
        self.areas
            .update(id, new)
            .await?
            .ok_or_not_found(EntityKind::Area)
    }

    async fn delete(&self, id: i64) -> AppResult<()> {
        if self.areas.delete(id).await? {
            Ok(())
        } else {
            Err(AppError::not_found(EntityKind::Area))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::MockAreaRepository;
    use mockall::predicate::eq;

    fn youth() -> NewArea {
        NewArea {
            name: "Youth".to_string(),
            description: None,
        }
    }

    #[tokio::test]
    async fn test_create_then_get_returns_same_fields() {
        let mut repo = MockAreaRepository::new();
        repo.expect_create().times(1).returning(|new| {
            Ok(Area {
                id: 1,
                name: new.name,
                description: new.description,
            })
        });
        repo.expect_find_by_id().with(eq(1)).returning(|id| {
            Ok(Some(Area {
                id,
                name: "Youth".to_string(),
                description: None,
            }))
        });

        let service = AreaManager::new(Arc::new(repo));
        let created = service.create(youth()).await.unwrap();
        let fetched = service.get(created.id).await.unwrap();

        assert_eq!(created, fetched);
    }

    #[tokio::test]
    async fn test_get_missing_area() {
        let mut repo = MockAreaRepository::new();
        repo.expect_find_by_id().returning(|_| Ok(None));

        let service = AreaManager::new(Arc::new(repo));
        let result = service.get(42).await;

        assert!(matches!(result, Err(AppError::NotFound(EntityKind::Area))));
    }

    #[tokio::test]
    async fn test_update_missing_area() {
        let mut repo = MockAreaRepository::new();
        repo.expect_update().returning(|_, _| Ok(None));

        let service = AreaManager::new(Arc::new(repo));
        let result = service.update(42, youth()).await;

        assert!(matches!(result, Err(AppError::NotFound(EntityKind::Area))));
    }

    #[tokio::test]
    async fn test_delete() {
        let mut repo = MockAreaRepository::new();
        repo.expect_delete().with(eq(1)).returning(|_| Ok(true));
        repo.expect_delete().with(eq(2)).returning(|_| Ok(false));

        let service = AreaManager::new(Arc::new(repo));

        tokio_test::assert_ok!(service.delete(1).await);
        let err = tokio_test::assert_err!(service.delete(2).await);
        assert!(matches!(err, AppError::NotFound(EntityKind::Area)));
    }
}
