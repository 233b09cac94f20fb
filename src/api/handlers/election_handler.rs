//! Election handlers.

use axum::{
    extract::{Path, State},
    response::Json,
    routing::get,
    Router,
};

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::config::API_PREFIX;
use crate::domain::{Election, NewElection};
use crate::errors::AppResult;
use crate::types::{Created, NoContent};

/// Create election routes
pub fn election_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_elections).post(create_election))
        .route("/:id", get(get_election).put(update_election).delete(delete_election))
}

/// List all elections
#[utoipa::path(
    get,
    path = "/api/elections",
    tag = "Elections",
    responses(
        (status = 200, description = "List of all elections", body = Vec<Election>)
    )
)]
pub async fn list_elections(State(state): State<AppState>) -> AppResult<Json<Vec<Election>>> {
    let elections = state.services.elections().list().await?;
    Ok(Json(elections))
}

/// Get election by ID
#[utoipa::path(
    get,
    path = "/api/elections/{id}",
    tag = "Elections",
    params(
        ("id" = i64, Path, description = "Election ID")
    ),
    responses(
        (status = 200, description = "Election", body = Election),
        (status = 404, description = "Election not found")
    )
)]
pub async fn get_election(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Election>> {
    let election = state.services.elections().get(id).await?;
    Ok(Json(election))
}

/// Create a new election
#[utoipa::path(
    post,
    path = "/api/elections",
    tag = "Elections",
    request_body = NewElection,
    responses(
        (status = 201, description = "Election created", body = Election),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Role or member not found")
    )
)]
pub async fn create_election(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<NewElection>,
) -> AppResult<Created<Election>> {
    let election = state.services.elections().create(payload).await?;
    Ok(Created::at(format!("{}/elections/{}", API_PREFIX, election.id), election))
}

/// Replace an election
#[utoipa::path(
    put,
    path = "/api/elections/{id}",
    tag = "Elections",
    params(
        ("id" = i64, Path, description = "Election ID")
    ),
    request_body = NewElection,
    responses(
        (status = 204, description = "Election updated"),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Election not found")
    )
)]
pub async fn update_election(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    ValidatedJson(payload): ValidatedJson<NewElection>,
) -> AppResult<NoContent> {
    state.services.elections().update(id, payload).await?;
    Ok(NoContent)
}

/// Delete an election
#[utoipa::path(
    delete,
    path = "/api/elections/{id}",
    tag = "Elections",
    params(
        ("id" = i64, Path, description = "Election ID")
    ),
    responses(
        (status = 204, description = "Election deleted"),
        (status = 404, description = "Election not found")
    )
)]
pub async fn delete_election(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<NoContent> {
    state.services.elections().delete(id).await?;
    Ok(NoContent)
}
