//! End-to-end HTTP tests against the in-memory store

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use domain_products::{InMemoryDocumentStore, InMemoryProductRepository, ProductResponse, handlers};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use test_utils::assertions;
use tower::ServiceExt;

fn app() -> Router {
    handlers::router(InMemoryProductRepository::new(InMemoryDocumentStore::new()))
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Vec<u8>) {
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

fn products(bytes: &[u8]) -> Vec<ProductResponse> {
    serde_json::from_slice(bytes).unwrap()
}

#[tokio::test]
async fn test_widget_lifecycle() {
    let app = app();

    let (status, body) = send(
        &app,
        "POST",
        "/",
        Some(json!({"name": "Widget", "description": "A widget", "price": 9.99})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let created: ProductResponse = serde_json::from_slice(&body).unwrap();
    assertions::assert_object_id(&created.id, "created id");

    let (status, body) = send(&app, "GET", "/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(products(&body), vec![created.clone()]);

    let (status, body) = send(
        &app,
        "PUT",
        &format!("/{}", created.id),
        Some(json!({"name": "Widget Pro", "description": "A widget", "price": 19.99})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let updated: ProductResponse = serde_json::from_slice(&body).unwrap();
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.name, "Widget Pro");
    assert_eq!(updated.price, 19.99);

    let (status, body) = send(&app, "DELETE", &format!("/{}", created.id), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(body.is_empty());

    let (status, body) = send(&app, "GET", "/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(products(&body).is_empty());
}

#[tokio::test]
async fn test_put_unknown_id_is_not_found_and_changes_nothing() {
    let app = app();
    send(
        &app,
        "POST",
        "/",
        Some(json!({"name": "Widget", "description": "A widget", "price": 9.99})),
    )
    .await;
    let (_, before) = send(&app, "GET", "/", None).await;

    let (status, body) = send(
        &app,
        "PUT",
        "/aaaaaaaaaaaaaaaaaaaaaaaa",
        Some(json!({"name": "Ghost", "description": "none", "price": 0.0})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.is_empty());

    let (_, after) = send(&app, "GET", "/", None).await;
    assert_eq!(products(&before), products(&after));
}

#[tokio::test]
async fn test_delete_twice_is_not_found_the_second_time() {
    let app = app();
    let (_, body) = send(
        &app,
        "POST",
        "/",
        Some(json!({"name": "Widget", "description": "A widget", "price": 9.99})),
    )
    .await;
    let created: ProductResponse = serde_json::from_slice(&body).unwrap();
    let uri = format!("/{}", created.id);

    assert_eq!(send(&app, "DELETE", &uri, None).await.0, StatusCode::NO_CONTENT);
    assert_eq!(send(&app, "DELETE", &uri, None).await.0, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_malformed_ids_are_bad_request() {
    let app = app();

    let (status, body) = send(&app, "DELETE", "/not-an-id", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let error: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(error["code"], 1002);
    assert_eq!(error["error"], "INVALID_IDENTIFIER");

    let (status, _) = send(
        &app,
        "PUT",
        "/not-an-id",
        Some(json!({"name": "Widget", "description": "A widget", "price": 9.99})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_body_id_on_create_is_replaced() {
    let app = app();
    let supplied = "65f1c0ffee0ddba11ca7f00d";

    let (status, body) = send(
        &app,
        "POST",
        "/",
        Some(json!({"id": supplied, "name": "Widget", "description": "A widget", "price": 9.99})),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    let created: ProductResponse = serde_json::from_slice(&body).unwrap();
    assert_ne!(created.id, supplied);
}

#[tokio::test]
async fn test_non_string_body_id_on_create_is_ignored() {
    let app = app();

    for id in [json!(42), json!({"$oid": "65f1c0ffee0ddba11ca7f00d"})] {
        let (status, body) = send(
            &app,
            "POST",
            "/",
            Some(json!({"id": id, "name": "Widget", "description": "A widget", "price": 9.99})),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        let created: ProductResponse = serde_json::from_slice(&body).unwrap();
        assertions::assert_object_id(&created.id, "created id");
    }

    let (_, body) = send(&app, "GET", "/", None).await;
    assert_eq!(products(&body).len(), 2);
}

#[tokio::test]
async fn test_non_string_body_id_on_update_is_ignored() {
    let app = app();
    let (_, body) = send(
        &app,
        "POST",
        "/",
        Some(json!({"name": "Widget", "description": "A widget", "price": 9.99})),
    )
    .await;
    let created: ProductResponse = serde_json::from_slice(&body).unwrap();

    let (status, body) = send(
        &app,
        "PUT",
        &format!("/{}", created.id),
        Some(json!({"id": 7, "name": "Widget", "description": "A widget", "price": 12.5})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let updated: ProductResponse = serde_json::from_slice(&body).unwrap();
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.price, 12.5);
}
