//! Mapping handlers.

use axum::{
    extract::{Path, State},
    response::Json,
    routing::get,
    Router,
};

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::config::API_PREFIX;
use crate::domain::{Mapping, NewMapping};
use crate::errors::AppResult;
use crate::types::{Created, NoContent};

/// Create mapping routes
pub fn mapping_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_mappings).post(create_mapping))
        .route("/:id", get(get_mapping).put(update_mapping).delete(delete_mapping))
}

/// List all mappings
#[utoipa::path(
    get,
    path = "/api/mappings",
    tag = "Mappings",
    responses(
        (status = 200, description = "List of all mappings", body = Vec<Mapping>)
    )
)]
pub async fn list_mappings(State(state): State<AppState>) -> AppResult<Json<Vec<Mapping>>> {
    let mappings = state.services.mappings().list().await?;
    Ok(Json(mappings))
}

/// Get mapping by ID
#[utoipa::path(
    get,
    path = "/api/mappings/{id}",
    tag = "Mappings",
    params(
        ("id" = i64, Path, description = "Mapping ID")
    ),
    responses(
        (status = 200, description = "Mapping", body = Mapping),
        (status = 404, description = "Mapping not found")
    )
)]
pub async fn get_mapping(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Mapping>> {
    let mapping = state.services.mappings().get(id).await?;
    Ok(Json(mapping))
}

/// Create a new mapping
#[utoipa::path(
    post,
    path = "/api/mappings",
    tag = "Mappings",
    request_body = NewMapping,
    responses(
        (status = 201, description = "Mapping created", body = Mapping),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Referenced purpose, area or record not found")
    )
)]
pub async fn create_mapping(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<NewMapping>,
) -> AppResult<Created<Mapping>> {
    let mapping = state.services.mappings().create(payload).await?;
    Ok(Created::at(format!("{}/mappings/{}", API_PREFIX, mapping.id), mapping))
}

/// Replace a mapping
#[utoipa::path(
    put,
    path = "/api/mappings/{id}",
    tag = "Mappings",
    params(
        ("id" = i64, Path, description = "Mapping ID")
    ),
    request_body = NewMapping,
    responses(
        (status = 204, description = "Mapping updated"),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Mapping not found")
    )
)]
pub async fn update_mapping(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    ValidatedJson(payload): ValidatedJson<NewMapping>,
) -> AppResult<NoContent> {
    state.services.mappings().update(id, payload).await?;
    Ok(NoContent)
}

/// Delete a mapping
#[utoipa::path(
    delete,
    path = "/api/mappings/{id}",
    tag = "Mappings",
    params(
        ("id" = i64, Path, description = "Mapping ID")
    ),
    responses(
        (status = 204, description = "Mapping deleted"),
        (status = 404, description = "Mapping not found")
    )
)]
pub async fn delete_mapping(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<NoContent> {
    state.services.mappings().delete(id).await?;
    Ok(NoContent)
}
