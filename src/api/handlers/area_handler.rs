//! Area handlers.

use axum::{
    extract::{Path, State},
    response::Json,
    routing::get,
    Router,
};

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::config::API_PREFIX;
use crate::domain::{Area, NewArea};
use crate::errors::AppResult;
use crate::types::{Created, NoContent};

/// Create area routes
pub fn area_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_areas).post(create_area))
        .route("/:id", get(get_area).put(update_area).delete(delete_area))
}

/// List all areas
#[utoipa::path(
    get,
    path = "/api/areas",
    tag = "Areas",
    responses(
        (status = 200, description = "List of all areas", body = Vec<Area>)
    )
)]
pub async fn list_areas(State(state): State<AppState>) -> AppResult<Json<Vec<Area>>> {
    let areas = state.services.areas().list().await?;
    Ok(Json(areas))
}

/// Get area by ID
#[utoipa::path(
    get,
    path = "/api/areas/{id}",
    tag = "Areas",
    params(
        ("id" = i64, Path, description = "Area ID")
    ),
    responses(
        (status = 200, description = "Area", body = Area),
        (status = 404, description = "Area not found")
    )
)]
pub async fn get_area(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Area>> {
    let area = state.services.areas().get(id).await?;
    Ok(Json(area))
}

/// Create a new area
#[utoipa::path(
    post,
    path = "/api/areas",
    tag = "Areas",
    request_body = NewArea,
    responses(
        (status = 201, description = "Area created", body = Area),
        (status = 400, description = "Validation error")
    )
)]
pub async fn create_area(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<NewArea>,
) -> AppResult<Created<Area>> {
    let area = state.services.areas().create(payload).await?;
    Ok(Created::at(format!("{}/areas/{}", API_PREFIX, area.id), area))
}

/// Replace an area
#[utoipa::path(
    put,
    path = "/api/areas/{id}",
    tag = "Areas",
    params(
        ("id" = i64, Path, description = "Area ID")
    ),
    request_body = NewArea,
    responses(
        (status = 204, description = "Area updated"),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Area not found")
    )
)]
pub async fn update_area(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    ValidatedJson(payload): ValidatedJson<NewArea>,
) -> AppResult<NoContent> {
    state.services.areas().update(id, payload).await?;
    Ok(NoContent)
}

/// Delete an area
#[utoipa::path(
    delete,
    path = "/api/areas/{id}",
    tag = "Areas",
    params(
        ("id" = i64, Path, description = "Area ID")
    ),
    responses(
        (status = 204, description = "Area deleted"),
        (status = 404, description = "Area not found")
    )
)]
pub async fn delete_area(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<NoContent> {
    state.services.areas().delete(id).await?;
    Ok(NoContent)
}
