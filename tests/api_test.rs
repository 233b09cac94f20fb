//! Integration tests for API endpoints.
//!
//! These tests drive the real router with an in-memory area service, so no
//! database or identity provider is needed.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;
use utoipa::OpenApi;

use club_api::api::{create_router, ApiDoc, AppState};
use club_api::domain::{Area, NewArea};
use club_api::errors::{AppError, AppResult, EntityKind};
use club_api::services::{
    AreaService, CreditorService, DonorService, ElectionService, MappingService, MemberService,
    PurposeService, ReceiptService, RoleService, ServiceContainer, TemplateService,
};

// =============================================================================
// In-memory Services for Testing
// =============================================================================

/// Area service keeping its records in a map
#[derive(Default)]
struct InMemoryAreas {
    records: Mutex<BTreeMap<i64, Area>>,
}

#[async_trait]
impl AreaService for InMemoryAreas {
    async fn get(&self, id: i64) -> AppResult<Area> {
        self.records
            .lock()
            .unwrap()
            .get(&id)
            .cloned()
            .ok_or(AppError::NotFound(EntityKind::Area))
    }

    async fn list(&self) -> AppResult<Vec<Area>> {
        Ok(self.records.lock().unwrap().values().cloned().collect())
    }

    async fn create(&self, new: NewArea) -> AppResult<Area> {
        let mut records = self.records.lock().unwrap();
        let id = records.keys().next_back().map_or(1, |last| last + 1);
        let area = Area {
            id,
            name: new.name,
            description: new.description,
        };
        records.insert(id, area.clone());
        Ok(area)
    }

    async fn update(&self, id: i64, new: NewArea) -> AppResult<Area> {
        let mut records = self.records.lock().unwrap();
        let area = records
            .get_mut(&id)
            .ok_or(AppError::NotFound(EntityKind::Area))?;
        area.name = new.name;
        area.description = new.description;
        Ok(area.clone())
    }

    async fn delete(&self, id: i64) -> AppResult<()> {
        self.records
            .lock()
            .unwrap()
            .remove(&id)
            .map(|_| ())
            .ok_or(AppError::NotFound(EntityKind::Area))
    }
}

/// Container exposing only the area service
struct AreasOnly {
    areas: Arc<InMemoryAreas>,
}

impl ServiceContainer for AreasOnly {
    fn areas(&self) -> Arc<dyn AreaService> {
        self.areas.clone()
    }

    fn purposes(&self) -> Arc<dyn PurposeService> {
        unimplemented!("purposes are not used by these tests")
    }

    fn creditors(&self) -> Arc<dyn CreditorService> {
        unimplemented!("creditors are not used by these tests")
    }

    fn donors(&self) -> Arc<dyn DonorService> {
        unimplemented!("donors are not used by these tests")
    }

    fn members(&self) -> Arc<dyn MemberService> {
        unimplemented!("members are not used by these tests")
    }

    fn roles(&self) -> Arc<dyn RoleService> {
        unimplemented!("roles are not used by these tests")
    }

    fn elections(&self) -> Arc<dyn ElectionService> {
        unimplemented!("elections are not used by these tests")
    }

    fn receipts(&self) -> Arc<dyn ReceiptService> {
        unimplemented!("receipts are not used by these tests")
    }

    fn templates(&self) -> Arc<dyn TemplateService> {
        unimplemented!("templates are not used by these tests")
    }

    fn mappings(&self) -> Arc<dyn MappingService> {
        unimplemented!("mappings are not used by these tests")
    }
}

// =============================================================================
// Test Helpers
// =============================================================================

fn app() -> Router {
    let container = AreasOnly {
        areas: Arc::new(InMemoryAreas::default()),
    };
    create_router(AppState::new(Arc::new(container)))
}

async fn call(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Option<String>, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string())),
        None => builder.body(Body::empty()),
    }
    .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let location = response
        .headers()
        .get(header::LOCATION)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, location, json)
}

// =============================================================================
// CRUD Lifecycle Tests
// =============================================================================

#[tokio::test]
async fn test_create_then_get_returns_same_fields() {
    let app = app();

    let (status, location, created) = call(
        &app,
        "POST",
        "/api/areas",
        Some(json!({ "name": "Youth", "description": "Under 18" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let location = location.expect("Location header");
    assert_eq!(location, format!("/api/areas/{}", created["id"]));

    let (status, _, fetched) = call(&app, "GET", &location, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);
    assert_eq!(fetched["name"], "Youth");
    assert_eq!(fetched["description"], "Under 18");
}

#[tokio::test]
async fn test_update_replaces_all_fields() {
    let app = app();
    call(
        &app,
        "POST",
        "/api/areas",
        Some(json!({ "name": "Youth", "description": "Under 18" })),
    )
    .await;

    let (status, _, _) = call(
        &app,
        "PUT",
        "/api/areas/1",
        Some(json!({ "name": "Juniors" })),
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, _, fetched) = call(&app, "GET", "/api/areas/1", None).await;
    assert_eq!(fetched, json!({ "id": 1, "name": "Juniors", "description": null }));
}

#[tokio::test]
async fn test_delete_then_get_is_not_found() {
    let app = app();
    call(&app, "POST", "/api/areas", Some(json!({ "name": "Youth" }))).await;

    let (status, _, _) = call(&app, "DELETE", "/api/areas/1", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _, body) = call(&app, "GET", "/api/areas/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "AREA_NOT_FOUND");

    let (status, _, _) = call(&app, "DELETE", "/api/areas/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_list_is_ordered_by_id() {
    let app = app();
    for name in ["Youth", "Seniors", "Board"] {
        call(&app, "POST", "/api/areas", Some(json!({ "name": name }))).await;
    }

    let (status, _, body) = call(&app, "GET", "/api/areas", None).await;
    assert_eq!(status, StatusCode::OK);

    let ids: Vec<i64> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|area| area["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![1, 2, 3]);
}

#[tokio::test]
async fn test_malformed_json_is_validation_error() {
    let app = app();
    let request = Request::builder()
        .method("POST")
        .uri("/api/areas")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{ not json"))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

// =============================================================================
// API Documentation Tests
// =============================================================================

#[tokio::test]
async fn test_openapi_document_is_served() {
    let (status, _, body) = call(&app(), "GET", "/api-docs/openapi.json", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["info"]["title"], "Club API");
    assert!(body["paths"]["/api/roles/{id}/elect"]["post"].is_object());
}

#[test]
fn test_openapi_lists_every_resource() {
    let doc = ApiDoc::openapi();
    let paths: Vec<&String> = doc.paths.paths.keys().collect();

    for resource in [
        "areas", "purposes", "creditors", "donors", "members", "roles", "elections", "receipts",
        "templates", "mappings",
    ] {
        let collection = format!("/api/{}", resource);
        let item = format!("/api/{}/{{id}}", resource);
        assert!(paths.iter().any(|p| **p == collection), "missing {}", collection);
        assert!(paths.iter().any(|p| **p == item), "missing {}", item);
    }

    assert!(paths.iter().any(|p| *p == "/api/members/{id}/profile"));
    assert!(paths.iter().any(|p| *p == "/api/permissions"));
}
