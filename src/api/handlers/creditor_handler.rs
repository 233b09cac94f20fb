//! Creditor handlers.

use axum::{
    extract::{Path, State},
    response::Json,
    routing::get,
    Router,
};

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::config::API_PREFIX;
use crate::domain::{Creditor, NewCreditor};
use crate::errors::AppResult;
use crate::types::{Created, NoContent};

/// Create creditor routes
pub fn creditor_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_creditors).post(create_creditor))
        .route("/:id", get(get_creditor).put(update_creditor).delete(delete_creditor))
}

/// List all creditors
#[utoipa::path(
    get,
    path = "/api/creditors",
    tag = "Creditors",
    responses(
        (status = 200, description = "List of all creditors", body = Vec<Creditor>)
    )
)]
pub async fn list_creditors(State(state): State<AppState>) -> AppResult<Json<Vec<Creditor>>> {
    let creditors = state.services.creditors().list().await?;
    Ok(Json(creditors))
}

/// Get creditor by ID
#[utoipa::path(
    get,
    path = "/api/creditors/{id}",
    tag = "Creditors",
    params(
        ("id" = i64, Path, description = "Creditor ID")
    ),
    responses(
        (status = 200, description = "Creditor", body = Creditor),
        (status = 404, description = "Creditor not found")
    )
)]
pub async fn get_creditor(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Creditor>> {
    let creditor = state.services.creditors().get(id).await?;
    Ok(Json(creditor))
}

/// Create a new creditor
#[utoipa::path(
    post,
    path = "/api/creditors",
    tag = "Creditors",
    request_body = NewCreditor,
    responses(
        (status = 201, description = "Creditor created", body = Creditor),
        (status = 400, description = "Validation error")
    )
)]
pub async fn create_creditor(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<NewCreditor>,
) -> AppResult<Created<Creditor>> {
    let creditor = state.services.creditors().create(payload).await?;
    Ok(Created::at(format!("{}/creditors/{}", API_PREFIX, creditor.id), creditor))
}

/// Replace a creditor
#[utoipa::path(
    put,
    path = "/api/creditors/{id}",
    tag = "Creditors",
    params(
        ("id" = i64, Path, description = "Creditor ID")
    ),
    request_body = NewCreditor,
    responses(
        (status = 204, description = "Creditor updated"),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Creditor not found")
    )
)]
pub async fn update_creditor(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    ValidatedJson(payload): ValidatedJson<NewCreditor>,
) -> AppResult<NoContent> {
    state.services.creditors().update(id, payload).await?;
    Ok(NoContent)
}

/// Delete a creditor
#[utoipa::path(
    delete,
    path = "/api/creditors/{id}",
    tag = "Creditors",
    params(
        ("id" = i64, Path, description = "Creditor ID")
    ),
    responses(
        (status = 204, description = "Creditor deleted"),
        (status = 404, description = "Creditor not found")
    )
)]
pub async fn delete_creditor(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<NoContent> {
    state.services.creditors().delete(id).await?;
    Ok(NoContent)
}
