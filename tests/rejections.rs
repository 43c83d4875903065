//! Malformed and invalid requests are answered with 400 before any storage
//! call. The pool here points at a closed port, so reaching the database would
//! surface as a 500 instead.

mod utils;

use axum::http::{header, Method, Request, StatusCode};
use serde_json::json;
use tower::ServiceExt;
use utils::{body_text, send, unconnected_pool};

fn app() -> axum::Router {
    wishlist::create_app(unconnected_pool())
}

#[tokio::test]
async fn get_with_malformed_id_is_400() {
    let response = send(&app(), Method::GET, "/wishes/not-a-uuid", None).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(body_text(response).await.starts_with("Malformed input"));
}

#[tokio::test]
async fn delete_with_malformed_id_is_400() {
    let response = send(&app(), Method::DELETE, "/wishes/1234", None).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn update_with_malformed_id_is_400() {
    let body = json!({ "name": "X", "description": "Y" }).to_string();
    let response = send(&app(), Method::PUT, "/wishes/abc", Some(body)).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn update_with_malformed_json_is_400() {
    let uri = format!("/wishes/{}", uuid::Uuid::now_v7());
    let response = send(&app(), Method::PUT, &uri, Some("{invalid json".to_string())).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn create_with_malformed_json_is_400() {
    let response = send(&app(), Method::POST, "/wishes", Some("{invalid json".to_string())).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn create_with_wrong_field_type_is_400() {
    let body = json!({ "name": 42, "description": "Red mountain bike" }).to_string();
    let response = send(&app(), Method::POST, "/wishes", Some(body)).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn create_without_content_type_is_400() {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/wishes")
        .body(axum::body::Body::from(
            json!({ "name": "Bike", "description": "Red" }).to_string(),
        ))
        .unwrap();
    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn create_with_empty_name_is_400() {
    let body = json!({ "name": "", "description": "Red mountain bike" }).to_string();
    let response = send(&app(), Method::POST, "/wishes", Some(body)).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_text(response).await, "name field is required");
}

#[tokio::test]
async fn create_with_empty_description_is_400() {
    let body = json!({ "name": "Bike", "description": "" }).to_string();
    let response = send(&app(), Method::POST, "/wishes", Some(body)).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_text(response).await, "description field is required");
}

#[tokio::test]
async fn create_with_missing_fields_is_400() {
    let body = json!({ "name": "Bike" }).to_string();
    let response = send(&app(), Method::POST, "/wishes", Some(body)).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_text(response).await, "description field is required");
}

#[tokio::test]
async fn unreachable_storage_is_500() {
    let response = send(&app(), Method::GET, "/wishes", None).await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn docs_are_served() {
    let response = send(&app(), Method::GET, "/docs", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response
        .headers()
        .get(header::CONTENT_TYPE)
        .unwrap()
        .to_str()
        .unwrap()
        .starts_with("text/html"));

    let response = send(&app(), Method::GET, "/openapi.json", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    let spec: serde_json::Value = utils::body_json(response).await;
    assert!(spec["paths"]["/wishes"].is_object());
    assert!(spec["paths"]["/wishes/{id}"]["put"].is_object());
}
