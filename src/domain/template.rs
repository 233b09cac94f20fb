//! Document template domain entity.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Named text template (letters, receipts, ...)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "Donation receipt")]
    pub name: String,
    pub content: String,
}

/// Template creation / replacement data
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewTemplate {
    #[validate(length(min = 1, max = 255, message = "Name is required"))]
    pub name: String,
    pub content: String,
}
