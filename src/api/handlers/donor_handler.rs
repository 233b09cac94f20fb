//! Donor handlers.

use axum::{
    extract::{Path, State},
    response::Json,
    routing::get,
    Router,
};

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::config::API_PREFIX;
use crate::domain::{Donor, NewDonor};
use crate::errors::AppResult;
use crate::types::{Created, NoContent};

/// Create donor routes
pub fn donor_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_donors).post(create_donor))
        .route("/:id", get(get_donor).put(update_donor).delete(delete_donor))
}

/// List all donors
#[utoipa::path(
    get,
    path = "/api/donors",
    tag = "Donors",
    responses(
        (status = 200, description = "List of all donors", body = Vec<Donor>)
    )
)]
pub async fn list_donors(State(state): State<AppState>) -> AppResult<Json<Vec<Donor>>> {
    let donors = state.services.donors().list().await?;
    Ok(Json(donors))
}

/// Get donor by ID
#[utoipa::path(
    get,
    path = "/api/donors/{id}",
    tag = "Donors",
    params(
        ("id" = i64, Path, description = "Donor ID")
    ),
    responses(
        (status = 200, description = "Donor", body = Donor),
        (status = 404, description = "Donor not found")
    )
)]
pub async fn get_donor(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Donor>> {
    let donor = state.services.donors().get(id).await?;
    Ok(Json(donor))
}

/// Create a new donor
#[utoipa::path(
    post,
    path = "/api/donors",
    tag = "Donors",
    request_body = NewDonor,
    responses(
        (status = 201, description = "Donor created", body = Donor),
        (status = 400, description = "Validation error")
    )
)]
pub async fn create_donor(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<NewDonor>,
) -> AppResult<Created<Donor>> {
    let donor = state.services.donors().create(payload).await?;
    Ok(Created::at(format!("{}/donors/{}", API_PREFIX, donor.id), donor))
}

/// Replace a donor
#[utoipa::path(
    put,
    path = "/api/donors/{id}",
    tag = "Donors",
    params(
        ("id" = i64, Path, description = "Donor ID")
    ),
    request_body = NewDonor,
    responses(
        (status = 204, description = "Donor updated"),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Donor not found")
    )
)]
pub async fn update_donor(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    ValidatedJson(payload): ValidatedJson<NewDonor>,
) -> AppResult<NoContent> {
    state.services.donors().update(id, payload).await?;
    Ok(NoContent)
}

/// Delete a donor
#[utoipa::path(
    delete,
    path = "/api/donors/{id}",
    tag = "Donors",
    params(
        ("id" = i64, Path, description = "Donor ID")
    ),
    responses(
        (status = 204, description = "Donor deleted"),
        (status = 404, description = "Donor not found")
    )
)]
pub async fn delete_donor(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<NoContent> {
    state.services.donors().delete(id).await?;
    Ok(NoContent)
}
