//! Centralized error handling.
//!
//! Provides a unified error type for the entire application,
//! with automatic HTTP response conversion.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Kinds of records that can be looked up by id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Area,
    Creditor,
    Donor,
    Election,
    Mapping,
    Member,
    Permission,
    Purpose,
    Receipt,
    Role,
    Template,
}

impl EntityKind {
    fn name(&self) -> &'static str {
        match self {
            EntityKind::Area => "Area",
            EntityKind::Creditor => "Creditor",
            EntityKind::Donor => "Donor",
            EntityKind::Election => "Election",
            EntityKind::Mapping => "Mapping",
            EntityKind::Member => "Member",
            EntityKind::Permission => "Permission",
            EntityKind::Purpose => "Purpose",
            EntityKind::Receipt => "Receipt",
            EntityKind::Role => "Role",
            EntityKind::Template => "Template",
        }
    }

    fn not_found_code(&self) -> &'static str {
        match self {
            EntityKind::Area => "AREA_NOT_FOUND",
            EntityKind::Creditor => "CREDITOR_NOT_FOUND",
            EntityKind::Donor => "DONOR_NOT_FOUND",
            EntityKind::Election => "ELECTION_NOT_FOUND",
            EntityKind::Mapping => "MAPPING_NOT_FOUND",
            EntityKind::Member => "MEMBER_NOT_FOUND",
            EntityKind::Permission => "PERMISSION_NOT_FOUND",
            EntityKind::Purpose => "PURPOSE_NOT_FOUND",
            EntityKind::Receipt => "RECEIPT_NOT_FOUND",
            EntityKind::Role => "ROLE_NOT_FOUND",
            EntityKind::Template => "TEMPLATE_NOT_FOUND",
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Resource errors
    #[error("{0} not found")]
    NotFound(EntityKind),

    #[error("Receipt overlaps an existing receipt of the same donor")]
    OverlappingReceipt,

    // Validation
    #[error("{0}")]
    Validation(String),

    // External service errors
    #[error("Database error")]
    Database(#[from] sea_orm::DbErr),

    #[error("Identity provider error: {0}")]
    IdentityProvider(String),

    // Internal
    #[error("Internal server error")]
    Internal(String),
}

/// Error response body
#[derive(Debug, Serialize)]
struct ErrorResponse {
    code: &'static str,
    message: String,
}

impl AppError {
    /// Get error code for client
    pub fn code(&self) -> &'static str {
        match self {
            AppError::NotFound(kind) => kind.not_found_code(),
            AppError::OverlappingReceipt => "OVERLAPPING_RECEIPT",
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::Database(_) | AppError::IdentityProvider(_) | AppError::Internal(_) => {
                "INTERNAL_ERROR"
            }
        }
    }

    /// Get HTTP status code
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::OverlappingReceipt => StatusCode::CONFLICT,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Database(_) | AppError::IdentityProvider(_) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get user-facing message (hides internal details)
    fn user_message(&self) -> String {
        match self {
            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                "An internal error occurred".to_string()
            }
            AppError::IdentityProvider(msg) => {
                tracing::error!("Identity provider error: {}", msg);
                "An internal error occurred".to_string()
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                "An internal error occurred".to_string()
            }
            _ => self.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorResponse {
            code: self.code(),
            message: self.user_message(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        AppError::IdentityProvider(e.to_string())
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Extension trait for Option -> AppError conversion
pub trait OptionExt<T> {
    fn ok_or_not_found(self, kind: EntityKind) -> AppResult<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_not_found(self, kind: EntityKind) -> AppResult<T> {
        self.ok_or(AppError::NotFound(kind))
    }
}

/// Convenience constructors
impl AppError {
    pub fn not_found(kind: EntityKind) -> Self {
        AppError::NotFound(kind)
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn identity_provider(msg: impl Into<String>) -> Self {
        AppError::IdentityProvider(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_codes_per_kind() {
        let err = AppError::not_found(EntityKind::Member);
        assert_eq!(err.code(), "MEMBER_NOT_FOUND");
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "Member not found");

        let err = AppError::not_found(EntityKind::Receipt);
        assert_eq!(err.code(), "RECEIPT_NOT_FOUND");
    }

    #[test]
    fn test_overlapping_receipt_is_conflict() {
        let err = AppError::OverlappingReceipt;
        assert_eq!(err.status(), StatusCode::CONFLICT);
        assert_eq!(err.code(), "OVERLAPPING_RECEIPT");
    }

    #[test]
    fn test_internal_errors_hide_details() {
        let err = AppError::internal("connection pool exhausted");
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.code(), "INTERNAL_ERROR");
        assert_eq!(err.user_message(), "An internal error occurred");

        let err = AppError::identity_provider("401 from token endpoint");
        assert_eq!(err.user_message(), "An internal error occurred");
    }

    #[test]
    fn test_option_ext() {
        let missing: Option<i32> = None;
        let err = missing.ok_or_not_found(EntityKind::Area).unwrap_err();
        assert!(matches!(err, AppError::NotFound(EntityKind::Area)));
        assert_eq!(Some(3).ok_or_not_found(EntityKind::Area).unwrap(), 3);
    }
}
