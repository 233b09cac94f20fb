//! Mapping service - Booking mappings and their referenced records.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{Mapping, NewMapping, Reference};
use crate::errors::{AppError, AppResult, EntityKind, OptionExt};
use crate::infra::{
    AreaRepository, CreditorRepository, DonorRepository, MappingRepository, MemberRepository,
    PurposeRepository,
};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Mapping service trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait MappingService: Send + Sync {
    /// Get mapping by ID
    async fn get(&self, id: i64) -> AppResult<Mapping>;

    /// List all mappings
    async fn list(&self) -> AppResult<Vec<Mapping>>;

    /// Create a mapping
    async fn create(&self, new: NewMapping) -> AppResult<Mapping>;

    /// Replace all fields of a mapping
    async fn update(&self, id: i64, new: NewMapping) -> AppResult<Mapping>;

    /// Delete a mapping
    async fn delete(&self, id: i64) -> AppResult<()>;
}

/// Repositories of every record a mapping can point at.
pub struct MappingTargets {
    pub purposes: Arc<dyn PurposeRepository>,
    pub areas: Arc<dyn AreaRepository>,
    pub creditors: Arc<dyn CreditorRepository>,
    pub donors: Arc<dyn DonorRepository>,
    pub members: Arc<dyn MemberRepository>,
}

/// Concrete implementation of MappingService.
pub struct MappingManager {
    mappings: Arc<dyn MappingRepository>,
    targets: MappingTargets,
}

impl MappingManager {
    /// Create new mapping service instance
    pub fn new(mappings: Arc<dyn MappingRepository>, targets: MappingTargets) -> Self {
        Self { mappings, targets }
    }

    async fn check_targets(&self, new: &NewMapping) -> AppResult<()> {
        if let Some(id) = new.purpose_id {
            self.targets
                .purposes
                .find_by_id(id)
                .await?
                .ok_or_not_found(EntityKind::Purpose)?;
        }

        if let Some(id) = new.area_id {
            self.targets
                .areas
                .find_by_id(id)
                .await?
                .ok_or_not_found(EntityKind::Area)?;
        }

        match new.reference {
            Some(Reference::Creditor { id }) => {
                self.targets
                    .creditors
                    .find_by_id(id)
                    .await?
                    .ok_or_not_found(EntityKind::Creditor)?;
            }
            Some(Reference::Donor { id }) => {
                self.targets
                    .donors
                    .find_by_id(id)
                    .await?
                    .ok_or_not_found(EntityKind::Donor)?;
            }
            Some(Reference::Member { id }) => {
                self.targets
                    .members
                    .find_by_id(id)
                    .await?
                    .ok_or_not_found(EntityKind::Member)?;
            }
            None => {}
        }

        Ok(())
    }
}

#[async_trait]
impl MappingService for MappingManager {
    async fn get(&self, id: i64) -> AppResult<Mapping> {
        self.mappings
            .find_by_id(id)
            .await?
            .ok_or_not_found(EntityKind::Mapping)
    }

    async fn list(&self) -> AppResult<Vec<Mapping>> {
        self.mappings.list().await
    }

    async fn create(&self, new: NewMapping) -> AppResult<Mapping> {
        self.check_targets(&new).await?;
        self.mappings.create(new).await
    }

    async fn update(&self, id: i64, new: NewMapping) -> AppResult<Mapping> {
        self.get(id).await?;
        self.check_targets(&new).await?;
        self.mappings
            .update(id, new)
            .await?
            .ok_or_not_found(EntityKind::Mapping)
    }

    async fn delete(&self, id: i64) -> AppResult<()> {
        if self.mappings.delete(id).await? {
            Ok(())
        } else {
            Err(AppError::not_found(EntityKind::Mapping))
        }
    }
}
