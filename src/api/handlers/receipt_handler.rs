//! Receipt handlers.

use axum::{
    extract::{Path, State},
    response::Json,
    routing::get,
    Router,
};

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::config::API_PREFIX;
use crate::domain::{NewReceipt, Receipt};
use crate::errors::AppResult;
use crate::types::{Created, NoContent};

/// Create receipt routes
pub fn receipt_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_receipts).post(create_receipt))
        .route("/:id", get(get_receipt).put(update_receipt).delete(delete_receipt))
}

/// List all receipts
#[utoipa::path(
    get,
    path = "/api/receipts",
    tag = "Receipts",
    responses(
        (status = 200, description = "List of all receipts", body = Vec<Receipt>)
    )
)]
pub async fn list_receipts(State(state): State<AppState>) -> AppResult<Json<Vec<Receipt>>> {
    let receipts = state.services.receipts().list().await?;
    Ok(Json(receipts))
}

/// Get receipt by ID
#[utoipa::path(
    get,
    path = "/api/receipts/{id}",
    tag = "Receipts",
    params(
        ("id" = i64, Path, description = "Receipt ID")
    ),
    responses(
        (status = 200, description = "Receipt", body = Receipt),
        (status = 404, description = "Receipt not found")
    )
)]
pub async fn get_receipt(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Receipt>> {
    let receipt = state.services.receipts().get(id).await?;
    Ok(Json(receipt))
}

/// Create a new receipt
#[utoipa::path(
    post,
    path = "/api/receipts",
    tag = "Receipts",
    request_body = NewReceipt,
    responses(
        (status = 201, description = "Receipt created", body = Receipt),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Donor not found"),
        (status = 409, description = "Period overlaps another receipt of the donor")
    )
)]
pub async fn create_receipt(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<NewReceipt>,
) -> AppResult<Created<Receipt>> {
    let receipt = state.services.receipts().create(payload).await?;
    Ok(Created::at(format!("{}/receipts/{}", API_PREFIX, receipt.id), receipt))
}

/// Replace a receipt
#[utoipa::path(
    put,
    path = "/api/receipts/{id}",
    tag = "Receipts",
    params(
        ("id" = i64, Path, description = "Receipt ID")
    ),
    request_body = NewReceipt,
    responses(
        (status = 204, description = "Receipt updated"),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Receipt or donor not found"),
        (status = 409, description = "Period overlaps another receipt of the donor")
    )
)]
pub async fn update_receipt(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    ValidatedJson(payload): ValidatedJson<NewReceipt>,
) -> AppResult<NoContent> {
    state.services.receipts().update(id, payload).await?;
    Ok(NoContent)
}

/// Delete a receipt
#[utoipa::path(
    delete,
    path = "/api/receipts/{id}",
    tag = "Receipts",
    params(
        ("id" = i64, Path, description = "Receipt ID")
    ),
    responses(
        (status = 204, description = "Receipt deleted"),
        (status = 404, description = "Receipt not found")
    )
)]
pub async fn delete_receipt(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<NoContent> {
    state.services.receipts().delete(id).await?;
    Ok(NoContent)
}
