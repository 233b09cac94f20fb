//! Area domain entity.
//!
//! An area is an organizational section of the club that bookings can be
//! attributed to (e.g. a sports division).

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Area domain entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Area {
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "Youth")]
    pub name: String,
    pub description: Option<String>,
}

/// Area creation / replacement data
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewArea {
    #[validate(length(min = 1, max = 255, message = "Name is required"))]
    #[schema(example = "Youth")]
    pub name: String,
    pub description: Option<String>,
}
