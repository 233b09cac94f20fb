//! Creditor domain entity.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// A party the club pays money to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Creditor {
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "City Sports Hall Ltd.")]
    pub name: String,
    #[schema(example = "DE89370400440532013000")]
    pub iban: Option<String>,
    pub street: Option<String>,
    pub zip_code: Option<String>,
    pub city: Option<String>,
}

/// Creditor creation / replacement data
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewCreditor {
    #[validate(length(min = 1, max = 255, message = "Name is required"))]
    #[schema(example = "City Sports Hall Ltd.")]
    pub name: String,
    #[validate(length(min = 15, max = 34, message = "IBAN must have 15 to 34 characters"))]
    pub iban: Option<String>,
    pub street: Option<String>,
    pub zip_code: Option<String>,
    pub city: Option<String>,
}
