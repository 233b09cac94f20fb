//! Creditor service - CRUD use cases for creditors.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{Creditor, NewCreditor};
use crate::errors::{AppError, AppResult, EntityKind, OptionExt};
use crate::infra::CreditorRepository;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Creditor service trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait CreditorService: Send + Sync {
    /// Get creditor by ID
    async fn get(&self, id: i64) -> AppResult<Creditor>;

    /// List all creditors
    async fn list(&self) -> AppResult<Vec<Creditor>>;

    /// Create a new creditor
    async fn create(&self, new: NewCreditor) -> AppResult<Creditor>;

    /// Replace all fields of a creditor
    async fn update(&self, id: i64, new: NewCreditor) -> AppResult<Creditor>;

    /// Delete a creditor
    async fn delete(&self, id: i64) -> AppResult<()>;
}

/// Concrete implementation of CreditorService.
pub struct CreditorManager {
    creditors: Arc<dyn CreditorRepository>,
}

impl CreditorManager {
    /// Create new creditor service instance
    pub fn new(creditors: Arc<dyn CreditorRepository>) -> Self {
        Self { creditors }
    }
}

#[async_trait]
impl CreditorService for CreditorManager {
    async fn get(&self, id: i64) -> AppResult<Creditor> {
        self.creditors
            .find_by_id(id)
            .await?
            .ok_or_not_found(EntityKind::Creditor)
    }

    async fn list(&self) -> AppResult<Vec<Creditor>> {
        self.creditors.list().await
    }

    async fn create(&self, new: NewCreditor) -> AppResult<Creditor> {
        self.creditors.create(new).await
    }

    async fn update(&self, id: i64, new: NewCreditor) -> AppResult<Creditor> {
        self.creditors
            .update(id, new)
            .await?
            .ok_or_not_found(EntityKind::Creditor)
    }

    async fn delete(&self, id: i64) -> AppResult<()> {
        if self.creditors.delete(id).await? {
            Ok(())
        } else {
            Err(AppError::not_found(EntityKind::Creditor))
        }
    }
}
