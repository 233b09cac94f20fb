//! Donor service - CRUD use cases for donors.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{Donor, NewDonor};
use crate::errors::{AppError, AppResult, EntityKind, OptionExt};
use crate::infra::DonorRepository;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Donor service trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait DonorService: Send + Sync {
    /// Get donor by ID
    async fn get(&self, id: i64) -> AppResult<Donor>;

    /// List all donors
    async fn list(&self) -> AppResult<Vec<Donor>>;

    /// Create a new donor
    async fn create(&self, new: NewDonor) -> AppResult<Donor>;

    /// Replace all fields of a donor
    async fn update(&self, id: i64, new: NewDonor) -> AppResult<Donor>;

    /// Delete a donor
    async fn delete(&self, id: i64) -> AppResult<()>;
}

/// Concrete implementation of DonorService.
pub struct DonorManager {
    donors: Arc<dyn DonorRepository>,
}

impl DonorManager {
    /// Create new donor service instance
    pub fn new(donors: Arc<dyn DonorRepository>) -> Self {
        Self { donors }
    }
}

#[async_trait]
impl DonorService for DonorManager {
    async fn get(&self, id: i64) -> AppResult<Donor> {
        self.donors
            .find_by_id(id)
            .await?
            .ok_or_not_found(EntityKind::Donor)
    }

    async fn list(&self) -> AppResult<Vec<Donor>> {
        self.donors.list().await
    }

    async fn create(&self, new: NewDonor) -> AppResult<Donor> {
        self.donors.create(new).await
    }

    async fn update(&self, id: i64, new: NewDonor) -> AppResult<Donor> {
        self.donors
            .update(id, new)
            .await?
            .ok_or_not_found(EntityKind::Donor)
    }

    async fn delete(&self, id: i64) -> AppResult<()> {
        if self.donors.delete(id).await? {
            tracing::info!(donor_id = id, "Donor deleted together with its receipts");
            Ok(())
        } else {
            Err(AppError::not_found(EntityKind::Donor))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::MockDonorRepository;

    fn donor(id: i64) -> Donor {
        Donor {
            id,
            first_name: "Grace".to_string(),
            last_name: "Hopper".to_string(),
            email: None,
            street: None,
            zip_code: None,
            city: None,
        }
    }

    #[tokio::test]
    async fn test_list_passes_repository_order_through() {
        let mut repo = MockDonorRepository::new();
        repo.expect_list()
            .returning(|| Ok(vec![donor(1), donor(2), donor(5)]));

        let donors = DonorManager::new(Arc::new(repo)).list().await.unwrap();
        assert_eq!(donors.iter().map(|d| d.id).collect::<Vec<_>>(), vec![1, 2, 5]);
    }

    #[tokio::test]
    async fn test_update_missing_donor() {
        let mut repo = MockDonorRepository::new();
        repo.expect_update().returning(|_, _| Ok(None));

        let new = NewDonor {
            first_name: "Grace".to_string(),
            last_name: "Hopper".to_string(),
            email: None,
            street: None,
            zip_code: None,
            city: None,
        };

        let result = DonorManager::new(Arc::new(repo)).update(7, new).await;
        assert!(matches!(result, Err(AppError::NotFound(EntityKind::Donor))));
    }

    #[tokio::test]
    async fn test_delete_missing_donor() {
        let mut repo = MockDonorRepository::new();
        repo.expect_delete().returning(|_| Ok(false));

        let result = DonorManager::new(Arc::new(repo)).delete(7).await;
        assert!(matches!(result, Err(AppError::NotFound(EntityKind::Donor))));
    }
}
