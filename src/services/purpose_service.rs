//! Purpose service - CRUD use cases for purposes.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{NewPurpose, Purpose};
use crate::errors::{AppError, AppResult, EntityKind, OptionExt};
use crate::infra::PurposeRepository;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Purpose service trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait PurposeService: Send + Sync {
    /// Get purpose by ID
    async fn get(&self, id: i64) -> AppResult<Purpose>;

    /// List all purposes
    async fn list(&self) -> AppResult<Vec<Purpose>>;

    /// Create a new purpose
    async fn create(&self, new: NewPurpose) -> AppResult<Purpose>;

    /// Replace all fields of a purpose
    async fn update(&self, id: i64, new: NewPurpose) -> AppResult<Purpose>;

    /// Delete a purpose
    async fn delete(&self, id: i64) -> AppResult<()>;
}

/// Concrete implementation of PurposeService.
pub struct PurposeManager {
    purposes: Arc<dyn PurposeRepository>,
}

impl PurposeManager {
    /// Create new purpose service instance
    pub fn new(purposes: Arc<dyn PurposeRepository>) -> Self {
        Self { purposes }
    }
}

#[async_trait]
impl PurposeService for PurposeManager {
    async fn get(&self, id: i64) -> AppResult<Purpose> {
        self.purposes
            .find_by_id(id)
            .await?
            .ok_or_not_found(EntityKind::Purpose)
    }

    async fn list(&self) -> AppResult<Vec<Purpose>> {
        self.purposes.list().await
    }

    async fn create(&self, new: NewPurpose) -> AppResult<Purpose> {
        self.purposes.create(new).await
    }

    async fn update(&self, id: i64, new: NewPurpose) -> AppResult<Purpose> {
        self.purposes
            .update(id, new)
            .await?
            .ok_or_not_found(EntityKind::Purpose)
    }

    async fn delete(&self, id: i64) -> AppResult<()> {
        if self.purposes.delete(id).await? {
            Ok(())
        } else {
            Err(AppError::not_found(EntityKind::Purpose))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::MockPurposeRepository;

    #[tokio::test]
    async fn test_get_missing_purpose() {
        let mut repo = MockPurposeRepository::new();
        repo.expect_find_by_id().returning(|_| Ok(None));

        let result = PurposeManager::new(Arc::new(repo)).get(4).await;
        assert!(matches!(result, Err(AppError::NotFound(EntityKind::Purpose))));
    }

    #[tokio::test]
    async fn test_update_replaces_description() {
        let mut repo = MockPurposeRepository::new();
        repo.expect_update()
            .withf(|_, new| new.description.is_none())
            .returning(|id, new| {
                Ok(Some(Purpose {
                    id,
                    name: new.name,
                    description: new.description,
                }))
            });

        let new = NewPurpose {
            name: "Membership fees".to_string(),
            description: None,
        };

        let purpose = PurposeManager::new(Arc::new(repo))
            .update(4, new)
            .await
            .unwrap();
        assert_eq!(purpose.id, 4);
        assert_eq!(purpose.description, None);
    }

    #[tokio::test]
    async fn test_repository_errors_propagate() {
        let mut repo = MockPurposeRepository::new();
        repo.expect_list()
            .returning(|| Err(AppError::internal("connection reset")));

        let result = PurposeManager::new(Arc::new(repo)).list().await;
        assert!(matches!(result, Err(AppError::Internal(_))));
    }
}
