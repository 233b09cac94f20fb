//! Purpose domain entity.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Booking purpose (what money was spent on or received for)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Purpose {
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "Membership fee")]
    pub name: String,
    pub description: Option<String>,
}

/// Purpose creation / replacement data
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewPurpose {
    #[validate(length(min = 1, max = 255, message = "Name is required"))]
    #[schema(example = "Membership fee")]
    pub name: String,
    pub description: Option<String>,
}
