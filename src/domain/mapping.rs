//! Booking mapping domain entity.
//!
//! A mapping attributes bank transactions whose text matches `pattern` to a
//! purpose, an area and a reference.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::Reference;

/// Mapping domain entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Mapping {
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "MEMBERSHIP FEE")]
    pub pattern: String,
    pub purpose_id: Option<i64>,
    pub area_id: Option<i64>,
    pub reference: Option<Reference>,
}

/// Mapping creation / replacement data
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewMapping {
    #[validate(length(min = 1, max = 255, message = "Pattern is required"))]
    pub pattern: String,
    pub purpose_id: Option<i64>,
    pub area_id: Option<i64>,
    pub reference: Option<Reference>,
}
