//! Organizational role and the permissions attached to it.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Organizational role (chair, treasurer, ...)
///
/// The name is mirrored as a realm role at the identity provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Role {
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "treasurer")]
    pub name: String,
    pub description: Option<String>,
}

/// Role creation / replacement data
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewRole {
    #[validate(length(min = 1, max = 255, message = "Name is required"))]
    #[schema(example = "treasurer")]
    pub name: String,
    pub description: Option<String>,
}

/// Permission that can be attached to a role
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Permission {
    #[schema(example = "receipts:write")]
    pub name: String,
    pub description: Option<String>,
}
