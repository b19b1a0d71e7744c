//! Router tests against state resolved through the DI modules.

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use roster_config::{DatabaseConfig, ServerConfig, StorageBackend};
use roster_rest::create_router;
use roster_server::di;
use serde_json::{json, Value};
use tower::ServiceExt;

async fn memory_app() -> Router {
    let config = DatabaseConfig {
        backend: StorageBackend::Memory,
        ..DatabaseConfig::default()
    };
    let wiring = di::wire(&config).await.unwrap();
    create_router(wiring.state, &ServerConfig::default())
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

#[tokio::test]
async fn test_memory_backend_serves_employee_lifecycle() {
    let app = memory_app().await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/employees",
        Some(json!({"name": "Ann", "email": "a@x.com"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(
        serde_json::from_slice::<Value>(&body).unwrap(),
        json!({"id": 1, "name": "Ann", "email": "a@x.com"})
    );

    let (status, _) = send(
        &app,
        Method::POST,
        "/employees",
        Some(json!({"name": "Bob", "email": "a@x.com"})),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, _) = send(&app, Method::DELETE, "/employees/1", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = send(&app, Method::GET, "/employees/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_memory_backend_is_ready_without_database() {
    let app = memory_app().await;

    let (status, _) = send(&app, Method::GET, "/ready", None).await;
    assert_eq!(status, StatusCode::OK);
}
