//! Donation receipt domain entity.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

/// Donation receipt covering all donations of a donor within a period
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    #[schema(example = 1)]
    pub id: i64,
    pub donor_id: i64,
    #[schema(example = "2024-01-01")]
    pub start_date: NaiveDate,
    #[schema(example = "2024-12-31")]
    pub end_date: NaiveDate,
    /// Total amount in cents
    #[schema(example = 15000)]
    pub amount_cents: i64,
    pub issued_on: NaiveDate,
}

impl Receipt {
    /// Check if the receipt period shares at least one day with `[start, end]`
    pub fn overlaps(&self, start: NaiveDate, end: NaiveDate) -> bool {
        self.start_date <= end && start <= self.end_date
    }
}

/// Receipt creation / replacement data
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_period"))]
pub struct NewReceipt {
    pub donor_id: i64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[validate(range(min = 0, message = "Amount must not be negative"))]
    pub amount_cents: i64,
    pub issued_on: NaiveDate,
}

fn validate_period(receipt: &NewReceipt) -> Result<(), ValidationError> {
    if receipt.end_date < receipt.start_date {
        let mut err = ValidationError::new("period");
        err.message = Some("End date must not be before start date".into());
        return Err(err);
    }
    Ok(())
}
