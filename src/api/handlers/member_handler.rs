//! Member handlers.

use axum::{
    extract::{Path, State},
    response::Json,
    routing::get,
    Router,
};

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::config::API_PREFIX;
use crate::domain::{Member, NewMember, Profile};
use crate::errors::AppResult;
use crate::types::{Created, NoContent};

/// Create member routes
pub fn member_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_members).post(create_member))
        .route("/:id", get(get_member).put(update_member).delete(delete_member))
        .route("/:id/profile", get(get_profile).put(update_profile))
}

/// List all members
#[utoipa::path(
    get,
    path = "/api/members",
    tag = "Members",
    responses(
        (status = 200, description = "List of all members", body = Vec<Member>)
    )
)]
pub async fn list_members(State(state): State<AppState>) -> AppResult<Json<Vec<Member>>> {
    let members = state.services.members().list().await?;
    Ok(Json(members))
}

/// Get member by ID
#[utoipa::path(
    get,
    path = "/api/members/{id}",
    tag = "Members",
    params(
        ("id" = i64, Path, description = "Member ID")
    ),
    responses(
        (status = 200, description = "Member", body = Member),
        (status = 404, description = "Member not found")
    )
)]
pub async fn get_member(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Member>> {
    let member = state.services.members().get(id).await?;
    Ok(Json(member))
}

/// Create a new member
///
/// When `username` is given, an identity provider account is created and
/// linked to the member.
#[utoipa::path(
    post,
    path = "/api/members",
    tag = "Members",
    request_body = NewMember,
    responses(
        (status = 201, description = "Member created", body = Member),
        (status = 400, description = "Validation error")
    )
)]
pub async fn create_member(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<NewMember>,
) -> AppResult<Created<Member>> {
    let member = state.services.members().create(payload).await?;
    Ok(Created::at(format!("{}/members/{}", API_PREFIX, member.id), member))
}

/// Replace a member
#[utoipa::path(
    put,
    path = "/api/members/{id}",
    tag = "Members",
    params(
        ("id" = i64, Path, description = "Member ID")
    ),
    request_body = NewMember,
    responses(
        (status = 204, description = "Member updated"),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Member not found")
    )
)]
pub async fn update_member(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    ValidatedJson(payload): ValidatedJson<NewMember>,
) -> AppResult<NoContent> {
    state.services.members().update(id, payload).await?;
    Ok(NoContent)
}

/// Delete a member
#[utoipa::path(
    delete,
    path = "/api/members/{id}",
    tag = "Members",
    params(
        ("id" = i64, Path, description = "Member ID")
    ),
    responses(
        (status = 204, description = "Member deleted"),
        (status = 404, description = "Member not found")
    )
)]
pub async fn delete_member(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<NoContent> {
    state.services.members().delete(id).await?;
    Ok(NoContent)
}

/// Get the self-service profile of a member
#[utoipa::path(
    get,
    path = "/api/members/{id}/profile",
    tag = "Members",
    params(
        ("id" = i64, Path, description = "Member ID")
    ),
    responses(
        (status = 200, description = "Member profile", body = Profile),
        (status = 404, description = "Member not found")
    )
)]
pub async fn get_profile(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Profile>> {
    let profile = state.services.members().profile(id).await?;
    Ok(Json(profile))
}

/// Update the self-service profile of a member
///
/// Only the fields present in the body are changed.
#[utoipa::path(
    put,
    path = "/api/members/{id}/profile",
    tag = "Members",
    params(
        ("id" = i64, Path, description = "Member ID")
    ),
    request_body = Profile,
    responses(
        (status = 204, description = "Profile updated"),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Member not found")
    )
)]
pub async fn update_profile(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    ValidatedJson(payload): ValidatedJson<Profile>,
) -> AppResult<NoContent> {
    state.services.members().update_profile(id, payload).await?;
    Ok(NoContent)
}
