//! Template handlers.

use axum::{
    extract::{Path, State},
    response::Json,
    routing::get,
    Router,
};

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::config::API_PREFIX;
use crate::domain::{NewTemplate, Template};
use crate::errors::AppResult;
use crate::types::{Created, NoContent};

/// Create template routes
pub fn template_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_templates).post(create_template))
        .route("/:id", get(get_template).put(update_template).delete(delete_template))
}

/// List all templates
#[utoipa::path(
    get,
    path = "/api/templates",
    tag = "Templates",
    responses(
        (status = 200, description = "List of all templates", body = Vec<Template>)
    )
)]
pub async fn list_templates(State(state): State<AppState>) -> AppResult<Json<Vec<Template>>> {
    let templates = state.services.templates().list().await?;
    Ok(Json(templates))
}

/// Get template by ID
#[utoipa::path(
    get,
    path = "/api/templates/{id}",
    tag = "Templates",
    params(
        ("id" = i64, Path, description = "Template ID")
    ),
    responses(
        (status = 200, description = "Template", body = Template),
        (status = 404, description = "Template not found")
    )
)]
pub async fn get_template(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Template>> {
    let template = state.services.templates().get(id).await?;
    Ok(Json(template))
}

/// Create a new template
#[utoipa::path(
    post,
    path = "/api/templates",
    tag = "Templates",
    request_body = NewTemplate,
    responses(
        (status = 201, description = "Template created", body = Template),
        (status = 400, description = "Validation error")
    )
)]
pub async fn create_template(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<NewTemplate>,
) -> AppResult<Created<Template>> {
    let template = state.services.templates().create(payload).await?;
    Ok(Created::at(format!("{}/templates/{}", API_PREFIX, template.id), template))
}

/// Replace a template
#[utoipa::path(
    put,
    path = "/api/templates/{id}",
    tag = "Templates",
    params(
        ("id" = i64, Path, description = "Template ID")
    ),
    request_body = NewTemplate,
    responses(
        (status = 204, description = "Template updated"),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Template not found")
    )
)]
pub async fn update_template(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    ValidatedJson(payload): ValidatedJson<NewTemplate>,
) -> AppResult<NoContent> {
    state.services.templates().update(id, payload).await?;
    Ok(NoContent)
}

/// Delete a template
#[utoipa::path(
    delete,
    path = "/api/templates/{id}",
    tag = "Templates",
    params(
        ("id" = i64, Path, description = "Template ID")
    ),
    responses(
        (status = 204, description = "Template deleted"),
        (status = 404, description = "Template not found")
    )
)]
pub async fn delete_template(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<NoContent> {
    state.services.templates().delete(id).await?;
    Ok(NoContent)
}
