//! Router-level tests for the employee API, backed by the in-memory store.

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use roster_config::ServerConfig;
use roster_core::{HealthCheck, HealthStatus};
use roster_repository::InMemoryEmployeeRepository;
use roster_rest::{create_router, AppState};
use roster_service::EmployeeServiceImpl;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

fn app_state() -> AppState {
    let repository = Arc::new(InMemoryEmployeeRepository::new());
    AppState::new(Arc::new(EmployeeServiceImpl::new(repository)))
}

fn app() -> Router {
    create_router(app_state(), &ServerConfig::default())
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Vec<u8>) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, bytes.to_vec())
}

fn as_json(bytes: &[u8]) -> Value {
    serde_json::from_slice(bytes).unwrap()
}

// =============================================================================
// Create
// =============================================================================

#[tokio::test]
async fn test_create_then_duplicate_email() {
    let app = app();

    let (status, body) = send(
        &app,
        Method::POST,
        "/employees",
        Some(json!({"name": "Ann", "email": "a@x.com"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(as_json(&body), json!({"id": 1, "name": "Ann", "email": "a@x.com"}));

    let (status, body) = send(
        &app,
        Method::POST,
        "/employees",
        Some(json!({"name": "Bob", "email": "a@x.com"})),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert!(body.is_empty());

    let (_, body) = send(&app, Method::GET, "/employees", None).await;
    assert_eq!(as_json(&body).as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_create_ignores_client_id() {
    let app = app();

    let (status, body) = send(
        &app,
        Method::POST,
        "/employees",
        Some(json!({"id": 99, "name": "Ann", "email": "a@x.com"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(as_json(&body)["id"], 1);

    let (status, _) = send(&app, Method::GET, "/employees/99", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_create_missing_fields_is_bad_request() {
    let app = app();

    for payload in [
        json!({"email": "a@x.com"}),
        json!({"name": "Ann"}),
        json!({"name": null, "email": "a@x.com"}),
        json!({}),
    ] {
        let (status, body) = send(&app, Method::POST, "/employees", Some(payload)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.is_empty());
    }

    let (_, body) = send(&app, Method::GET, "/employees", None).await;
    assert_eq!(as_json(&body), json!([]));
}

#[tokio::test]
async fn test_create_malformed_json_is_bad_request() {
    let app = app();

    let request = Request::builder()
        .method(Method::POST)
        .uri("/employees")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{\"name\": "))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let (status, _) = send(
        &app,
        Method::POST,
        "/employees",
        Some(json!({"name": 42, "email": "a@x.com"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

// =============================================================================
// List / Get
// =============================================================================

#[tokio::test]
async fn test_list_returns_all_employees() {
    let app = app();
    let (status, body) = send(&app, Method::GET, "/employees", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(as_json(&body), json!([]));

    for (name, email) in [("Ann", "a@x.com"), ("Bob", "b@x.com")] {
        send(&app, Method::POST, "/employees", Some(json!({"name": name, "email": email}))).await;
    }

    let (_, body) = send(&app, Method::GET, "/employees", None).await;
    assert_eq!(
        as_json(&body),
        json!([
            {"id": 1, "name": "Ann", "email": "a@x.com"},
            {"id": 2, "name": "Bob", "email": "b@x.com"}
        ])
    );
}

#[tokio::test]
async fn test_get_employee() {
    let app = app();
    send(&app, Method::POST, "/employees", Some(json!({"name": "Ann", "email": "a@x.com"}))).await;

    let (status, body) = send(&app, Method::GET, "/employees/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(as_json(&body)["name"], "Ann");
}

#[tokio::test]
async fn test_get_unknown_employee_is_not_found() {
    let (status, body) = send(&app(), Method::GET, "/employees/12", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.is_empty());
}

#[tokio::test]
async fn test_non_numeric_id_is_bad_request() {
    let app = app();

    for method in [Method::GET, Method::DELETE] {
        let (status, body) = send(&app, method, "/employees/abc", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.is_empty());
    }
}

// =============================================================================
// Update
// =============================================================================

#[tokio::test]
async fn test_update_employee_is_idempotent() {
    let app = app();
    send(&app, Method::POST, "/employees", Some(json!({"name": "Ann", "email": "a@x.com"}))).await;

    let payload = json!({"id": 5, "name": "Annie", "email": "annie@x.com"});
    let (status, first) = send(&app, Method::PUT, "/employees/1", Some(payload.clone())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(as_json(&first), json!({"id": 1, "name": "Annie", "email": "annie@x.com"}));

    let (status, second) = send(&app, Method::PUT, "/employees/1", Some(payload)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(first, second);

    let (_, body) = send(&app, Method::GET, "/employees/1", None).await;
    assert_eq!(as_json(&body), as_json(&first));
}

#[tokio::test]
async fn test_update_unknown_employee_creates_nothing() {
    let app = app();

    let (status, _) = send(
        &app,
        Method::PUT,
        "/employees/3",
        Some(json!({"name": "Ann", "email": "a@x.com"})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, body) = send(&app, Method::GET, "/employees", None).await;
    assert_eq!(as_json(&body), json!([]));
}

#[tokio::test]
async fn test_update_to_taken_email_conflicts() {
    let app = app();
    send(&app, Method::POST, "/employees", Some(json!({"name": "Ann", "email": "a@x.com"}))).await;
    send(&app, Method::POST, "/employees", Some(json!({"name": "Bob", "email": "b@x.com"}))).await;

    let (status, _) = send(
        &app,
        Method::PUT,
        "/employees/2",
        Some(json!({"name": "Bob", "email": "a@x.com"})),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
}

// =============================================================================
// Delete
// =============================================================================

#[tokio::test]
async fn test_delete_employee() {
    let app = app();
    send(&app, Method::POST, "/employees", Some(json!({"name": "Ann", "email": "a@x.com"}))).await;

    let (status, body) = send(&app, Method::DELETE, "/employees/1", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(body.is_empty());

    let (status, _) = send(&app, Method::GET, "/employees/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, Method::DELETE, "/employees/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

// =============================================================================
// Health, docs, CORS
// =============================================================================

struct StaticCheck(HealthStatus);

#[async_trait]
impl HealthCheck for StaticCheck {
    fn name(&self) -> &str {
        "static"
    }

    async fn check(&self) -> HealthStatus {
        self.0.clone()
    }
}

#[tokio::test]
async fn test_health_endpoints() {
    let app = app();

    let (status, body) = send(&app, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(as_json(&body)["status"], "healthy");

    let (status, _) = send(&app, Method::GET, "/live", None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(&app, Method::GET, "/ready", None).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_readiness_reports_unhealthy_dependency() {
    let state = app_state()
        .with_health_check(Arc::new(StaticCheck(HealthStatus::Degraded("slow".to_string()))))
        .with_health_check(Arc::new(StaticCheck(HealthStatus::Unhealthy("down".to_string()))));
    let app = create_router(state, &ServerConfig::default());

    let (status, _) = send(&app, Method::GET, "/ready", None).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn test_openapi_document_is_served() {
    let (status, body) = send(&app(), Method::GET, "/api-docs/openapi.json", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(as_json(&body)["paths"]["/employees/{id}"].is_object());
}

#[tokio::test]
async fn test_cors_allows_any_origin() {
    let request = Request::builder()
        .method(Method::GET)
        .uri("/employees")
        .header(header::ORIGIN, "https://elsewhere.example")
        .body(Body::empty())
        .unwrap();

    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response
        .headers()
        .contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));
}

#[tokio::test]
async fn test_body_limit_rejects_oversized_payload() {
    let config = ServerConfig {
        max_body_size: 16,
        ..ServerConfig::default()
    };
    let app = create_router(app_state(), &config);

    let (status, _) = send(
        &app,
        Method::POST,
        "/employees",
        Some(json!({"name": "A very long name indeed", "email": "a@x.com"})),
    )
    .await;
    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);

    let (status, body) = send(&app, Method::GET, "/employees", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(as_json(&body), json!([]));
}
