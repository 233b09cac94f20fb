//! Role handlers.

use axum::{
    extract::{Path, State},
    response::Json,
    routing::{get, post, put},
    Router,
};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::config::API_PREFIX;
use crate::domain::{Election, NewRole, Permission, Role};
use crate::errors::AppResult;
use crate::types::{Created, NoContent};

/// Election request
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ElectRequest {
    /// Member taking over the role
    #[validate(range(min = 1, message = "Member ID must be positive"))]
    #[schema(example = 7)]
    pub member_id: i64,
}

/// Create role routes
pub fn role_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_roles).post(create_role))
        .route("/:id", get(get_role).put(update_role).delete(delete_role))
        .route("/:id/permissions", get(list_role_permissions))
        .route(
            "/:id/permissions/:name",
            put(attach_permission).delete(detach_permission),
        )
        .route("/:id/elect", post(elect))
        .route("/:id/finish", post(finish_term))
        .route("/:id/election", get(current_election))
        .route("/:id/elections", get(election_history))
}

/// Create permission routes
pub fn permission_routes() -> Router<AppState> {
    Router::new().route("/", get(list_permissions))
}

/// List all roles
#[utoipa::path(
    get,
    path = "/api/roles",
    tag = "Roles",
    responses(
        (status = 200, description = "List of all roles", body = Vec<Role>)
    )
)]
pub async fn list_roles(State(state): State<AppState>) -> AppResult<Json<Vec<Role>>> {
    let roles = state.services.roles().list().await?;
    Ok(Json(roles))
}

/// Get role by ID
#[utoipa::path(
    get,
    path = "/api/roles/{id}",
    tag = "Roles",
    params(
        ("id" = i64, Path, description = "Role ID")
    ),
    responses(
        (status = 200, description = "Role", body = Role),
        (status = 404, description = "Role not found")
    )
)]
pub async fn get_role(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Role>> {
    let role = state.services.roles().get(id).await?;
    Ok(Json(role))
}

/// Create a new role
#[utoipa::path(
    post,
    path = "/api/roles",
    tag = "Roles",
    request_body = NewRole,
    responses(
        (status = 201, description = "Role created", body = Role),
        (status = 400, description = "Validation error")
    )
)]
pub async fn create_role(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<NewRole>,
) -> AppResult<Created<Role>> {
    let role = state.services.roles().create(payload).await?;
    Ok(Created::at(format!("{}/roles/{}", API_PREFIX, role.id), role))
}

/// Replace a role
#[utoipa::path(
    put,
    path = "/api/roles/{id}",
    tag = "Roles",
    params(
        ("id" = i64, Path, description = "Role ID")
    ),
    request_body = NewRole,
    responses(
        (status = 204, description = "Role updated"),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Role not found")
    )
)]
pub async fn update_role(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    ValidatedJson(payload): ValidatedJson<NewRole>,
) -> AppResult<NoContent> {
    state.services.roles().update(id, payload).await?;
    Ok(NoContent)
}

/// Delete a role
#[utoipa::path(
    delete,
    path = "/api/roles/{id}",
    tag = "Roles",
    params(
        ("id" = i64, Path, description = "Role ID")
    ),
    responses(
        (status = 204, description = "Role deleted"),
        (status = 404, description = "Role not found")
    )
)]
pub async fn delete_role(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<NoContent> {
    state.services.roles().delete(id).await?;
    Ok(NoContent)
}

/// List the permissions attached to a role
#[utoipa::path(
    get,
    path = "/api/roles/{id}/permissions",
    tag = "Roles",
    params(
        ("id" = i64, Path, description = "Role ID")
    ),
    responses(
        (status = 200, description = "Attached permissions", body = Vec<Permission>),
        (status = 404, description = "Role not found")
    )
)]
pub async fn list_role_permissions(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Vec<Permission>>> {
    let permissions = state.services.roles().permissions(id).await?;
    Ok(Json(permissions))
}

/// Attach a permission to a role
#[utoipa::path(
    put,
    path = "/api/roles/{id}/permissions/{name}",
    tag = "Roles",
    params(
        ("id" = i64, Path, description = "Role ID"),
        ("name" = String, Path, description = "Permission name")
    ),
    responses(
        (status = 204, description = "Permission attached"),
        (status = 404, description = "Role or permission not found")
    )
)]
pub async fn attach_permission(
    State(state): State<AppState>,
    Path((id, name)): Path<(i64, String)>,
) -> AppResult<NoContent> {
    state.services.roles().attach_permission(id, name).await?;
    Ok(NoContent)
}

/// Detach a permission from a role
#[utoipa::path(
    delete,
    path = "/api/roles/{id}/permissions/{name}",
    tag = "Roles",
    params(
        ("id" = i64, Path, description = "Role ID"),
        ("name" = String, Path, description = "Permission name")
    ),
    responses(
        (status = 204, description = "Permission detached"),
        (status = 404, description = "Role or permission not found")
    )
)]
pub async fn detach_permission(
    State(state): State<AppState>,
    Path((id, name)): Path<(i64, String)>,
) -> AppResult<NoContent> {
    state.services.roles().detach_permission(id, name).await?;
    Ok(NoContent)
}

/// List every permission that can be attached to a role
#[utoipa::path(
    get,
    path = "/api/permissions",
    tag = "Roles",
    responses(
        (status = 200, description = "Available permissions", body = Vec<Permission>)
    )
)]
pub async fn list_permissions(State(state): State<AppState>) -> AppResult<Json<Vec<Permission>>> {
    let permissions = state.services.roles().available_permissions().await?;
    Ok(Json(permissions))
}

/// Elect a member to a role, ending the current term today
#[utoipa::path(
    post,
    path = "/api/roles/{id}/elect",
    tag = "Elections",
    params(
        ("id" = i64, Path, description = "Role ID")
    ),
    request_body = ElectRequest,
    responses(
        (status = 201, description = "Member elected", body = Election),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Role or member not found")
    )
)]
pub async fn elect(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    ValidatedJson(payload): ValidatedJson<ElectRequest>,
) -> AppResult<Created<Election>> {
    let election = state
        .services
        .elections()
        .elect(id, payload.member_id)
        .await?;

    Ok(Created::at(
        format!("{}/elections/{}", API_PREFIX, election.id),
        election,
    ))
}

/// End the current term of a role today
#[utoipa::path(
    post,
    path = "/api/roles/{id}/finish",
    tag = "Elections",
    params(
        ("id" = i64, Path, description = "Role ID")
    ),
    responses(
        (status = 204, description = "Term finished"),
        (status = 404, description = "Role not found or no open election")
    )
)]
pub async fn finish_term(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<NoContent> {
    state.services.elections().finish(id).await?;
    Ok(NoContent)
}

/// Get the current holder of a role
#[utoipa::path(
    get,
    path = "/api/roles/{id}/election",
    tag = "Elections",
    params(
        ("id" = i64, Path, description = "Role ID")
    ),
    responses(
        (status = 200, description = "Open election", body = Election),
        (status = 404, description = "Role not found or no open election")
    )
)]
pub async fn current_election(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Election>> {
    let election = state.services.elections().current(id).await?;
    Ok(Json(election))
}

/// List all elections of a role ordered by start date
#[utoipa::path(
    get,
    path = "/api/roles/{id}/elections",
    tag = "Elections",
    params(
        ("id" = i64, Path, description = "Role ID")
    ),
    responses(
        (status = 200, description = "Election history", body = Vec<Election>),
        (status = 404, description = "Role not found")
    )
)]
pub async fn election_history(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Vec<Election>>> {
    let elections = state.services.elections().history(id).await?;
    Ok(Json(elections))
}
