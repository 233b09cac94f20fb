//! Purpose handlers.

use axum::{
    extract::{Path, State},
    response::Json,
    routing::get,
    Router,
};

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::config::API_PREFIX;
use crate::domain::{NewPurpose, Purpose};
use crate::errors::AppResult;
use crate::types::{Created, NoContent};

/// Create purpose routes
pub fn purpose_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_purposes).post(create_purpose))
        .route("/:id", get(get_purpose).put(update_purpose).delete(delete_purpose))
}

/// List all purposes
#[utoipa::path(
    get,
    path = "/api/purposes",
    tag = "Purposes",
    responses(
        (status = 200, description = "List of all purposes", body = Vec<Purpose>)
    )
)]
pub async fn list_purposes(State(state): State<AppState>) -> AppResult<Json<Vec<Purpose>>> {
    let purposes = state.services.purposes().list().await?;
    Ok(Json(purposes))
}

/// Get purpose by ID
#[utoipa::path(
    get,
    path = "/api/purposes/{id}",
    tag = "Purposes",
    params(
        ("id" = i64, Path, description = "Purpose ID")
    ),
    responses(
        (status = 200, description = "Purpose", body = Purpose),
        (status = 404, description = "Purpose not found")
    )
)]
pub async fn get_purpose(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Purpose>> {
    let purpose = state.services.purposes().get(id).await?;
    Ok(Json(purpose))
}

/// Create a new purpose
#[utoipa::path(
    post,
    path = "/api/purposes",
    tag = "Purposes",
    request_body = NewPurpose,
    responses(
        (status = 201, description = "Purpose created", body = Purpose),
        (status = 400, description = "Validation error")
    )
)]
pub async fn create_purpose(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<NewPurpose>,
) -> AppResult<Created<Purpose>> {
    let purpose = state.services.purposes().create(payload).await?;
    Ok(Created::at(format!("{}/purposes/{}", API_PREFIX, purpose.id), purpose))
}

/// Replace a purpose
#[utoipa::path(
    put,
    path = "/api/purposes/{id}",
    tag = "Purposes",
    params(
        ("id" = i64, Path, description = "Purpose ID")
    ),
    request_body = NewPurpose,
    responses(
        (status = 204, description = "Purpose updated"),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Purpose not found")
    )
)]
pub async fn update_purpose(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    ValidatedJson(payload): ValidatedJson<NewPurpose>,
) -> AppResult<NoContent> {
    state.services.purposes().update(id, payload).await?;
    Ok(NoContent)
}

/// Delete a purpose
#[utoipa::path(
    delete,
    path = "/api/purposes/{id}",
    tag = "Purposes",
    params(
        ("id" = i64, Path, description = "Purpose ID")
    ),
    responses(
        (status = 204, description = "Purpose deleted"),
        (status = 404, description = "Purpose not found")
    )
)]
pub async fn delete_purpose(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<NoContent> {
    state.services.purposes().delete(id).await?;
    Ok(NoContent)
}
