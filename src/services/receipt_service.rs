//! Receipt service - Donation receipts and the no-overlap rule.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{NewReceipt, Receipt};
use crate::errors::{AppError, AppResult, EntityKind, OptionExt};
use crate::infra::{DonorRepository, ReceiptRepository};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Receipt service trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait ReceiptService: Send + Sync {
    /// Get receipt by ID
    async fn get(&self, id: i64) -> AppResult<Receipt>;

    /// List all receipts
    async fn list(&self) -> AppResult<Vec<Receipt>>;

    /// Issue a receipt to a donor
    async fn create(&self, new: NewReceipt) -> AppResult<Receipt>;

    /// Replace all fields of a receipt
    async fn update(&self, id: i64, new: NewReceipt) -> AppResult<Receipt>;

    /// Delete a receipt
    async fn delete(&self, id: i64) -> AppResult<()>;
}

/// Concrete implementation of ReceiptService.
pub struct ReceiptManager {
    receipts: Arc<dyn ReceiptRepository>,
    donors: Arc<dyn DonorRepository>,
}

impl ReceiptManager {
    /// Create new receipt service instance
    pub fn new(receipts: Arc<dyn ReceiptRepository>, donors: Arc<dyn DonorRepository>) -> Self {
        Self { receipts, donors }
    }

    /// Reject periods that share a day with another receipt of the donor.
    async fn check_period(&self, new: &NewReceipt, exclude: Option<i64>) -> AppResult<()> {
        self.donors
            .find_by_id(new.donor_id)
            .await?
            .ok_or_not_found(EntityKind::Donor)?;

        let conflict = self
            .receipts
            .list_by_donor(new.donor_id)
            .await?
            .into_iter()
            .filter(|receipt| Some(receipt.id) != exclude)
            .find(|receipt| receipt.overlaps(new.start_date, new.end_date));

        match conflict {
            Some(receipt) => {
                tracing::debug!(
                    donor_id = new.donor_id,
                    conflicting_receipt = receipt.id,
                    "Receipt period overlaps"
                );
                Err(AppError::OverlappingReceipt)
            }
            None => Ok(()),
        }
    }
}

#[async_trait]
impl ReceiptService for ReceiptManager {
    async fn get(&self, id: i64) -> AppResult<Receipt> {
        self.receipts
            .find_by_id(id)
            .await?
            .ok_or_not_found(EntityKind::Receipt)
    }

    async fn list(&self) -> AppResult<Vec<Receipt>> {
        self.receipts.list().await
    }

    async fn create(&self, new: NewReceipt) -> AppResult<Receipt> {
        self.check_period(&new, None).await?;
        self.receipts.create(new).await
    }

    async fn update(&self, id: i64, new: NewReceipt) -> AppResult<Receipt> {
        self.get(id).await?;
        self.check_period(&new, Some(id)).await?;

        self.receipts
            .update(id, new)
            .await?
            .ok_or_not_found(EntityKind::Receipt)
    }

    async fn delete(&self, id: i64) -> AppResult<()> {
        if self.receipts.delete(id).await? {
            Ok(())
        } else {
            Err(AppError::not_found(EntityKind::Receipt))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Donor;
    use crate::infra::{MockDonorRepository, MockReceiptRepository};
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn donors() -> MockDonorRepository {
        let mut repo = MockDonorRepository::new();
        repo.expect_find_by_id().returning(|id| {
            Ok(Some(Donor {
                id,
                first_name: "Grace".to_string(),
                last_name: "Hopper".to_string(),
                email: None,
                street: None,
                zip_code: None,
                city: None,
            }))
        });
        repo
    }

    fn first_half_2024(id: i64) -> Receipt {
        Receipt {
            id,
            donor_id: 1,
            start_date: date(2024, 1, 1),
            end_date: date(2024, 6, 30),
            amount_cents: 5000,
            issued_on: date(2024, 7, 5),
        }
    }

    fn new_receipt(start: NaiveDate, end: NaiveDate) -> NewReceipt {
        NewReceipt {
            donor_id: 1,
            start_date: start,
            end_date: end,
            amount_cents: 2500,
            issued_on: end,
        }
    }

    fn stored_from(id: i64, new: NewReceipt) -> Receipt {
        Receipt {
            id,
            donor_id: new.donor_id,
            start_date: new.start_date,
            end_date: new.end_date,
            amount_cents: new.amount_cents,
            issued_on: new.issued_on,
        }
    }

    #[tokio::test]
    async fn test_overlapping_receipt_is_rejected() {
        let mut receipts = MockReceiptRepository::new();
        receipts
            .expect_list_by_donor()
            .returning(|_| Ok(vec![first_half_2024(1)]));
        receipts.expect_create().never();

        let service = ReceiptManager::new(Arc::new(receipts), Arc::new(donors()));
        let result = service
            .create(new_receipt(date(2024, 6, 30), date(2024, 12, 31)))
            .await;

        assert!(matches!(result, Err(AppError::OverlappingReceipt)));
    }

    #[tokio::test]
    async fn test_adjacent_receipt_is_accepted() {
        let mut receipts = MockReceiptRepository::new();
        receipts
            .expect_list_by_donor()
            .returning(|_| Ok(vec![first_half_2024(1)]));
        receipts
            .expect_create()
            .times(1)
            .returning(|new| Ok(stored_from(2, new)));

        let service = ReceiptManager::new(Arc::new(receipts), Arc::new(donors()));
        let receipt = service
            .create(new_receipt(date(2024, 7, 1), date(2024, 12, 31)))
            .await
            .unwrap();

        assert_eq!(receipt.id, 2);
    }

    #[tokio::test]
    async fn test_update_ignores_its_own_period() {
        let mut receipts = MockReceiptRepository::new();
        receipts
            .expect_find_by_id()
            .returning(|id| Ok(Some(first_half_2024(id))));
        receipts
            .expect_list_by_donor()
            .returning(|_| Ok(vec![first_half_2024(1)]));
        receipts
            .expect_update()
            .returning(|id, new| Ok(Some(stored_from(id, new))));

        let service = ReceiptManager::new(Arc::new(receipts), Arc::new(donors()));
        let receipt = service
            .update(1, new_receipt(date(2024, 1, 1), date(2024, 5, 31)))
            .await
            .unwrap();

        assert_eq!(receipt.end_date, date(2024, 5, 31));
    }

    #[tokio::test]
    async fn test_unknown_donor() {
        let mut donors = MockDonorRepository::new();
        donors.expect_find_by_id().returning(|_| Ok(None));

        let service = ReceiptManager::new(Arc::new(MockReceiptRepository::new()), Arc::new(donors));
        let result = service
            .create(new_receipt(date(2024, 1, 1), date(2024, 1, 31)))
            .await;

        assert!(matches!(result, Err(AppError::NotFound(EntityKind::Donor))));
    }
}
