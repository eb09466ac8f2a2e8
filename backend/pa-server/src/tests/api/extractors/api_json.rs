use crate::ApiJson;

use axum::{Json, Router, body::Body, routing::post};
use http::{Request, StatusCode, header::CONTENT_TYPE};
use http_body_util::BodyExt;
use serde::{Deserialize, Serialize};
use tower::ServiceExt;

#[derive(Debug, Deserialize, Serialize)]
struct Named {
    name: String,
}

fn app() -> Router {
    Router::new().route(
        "/echo",
        post(|ApiJson(body): ApiJson<Named>| async move { Json(body) }),
    )
}

async fn send(request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = app().oneshot(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_valid_json_is_extracted() {
    let request = Request::builder()
        .method("POST")
        .uri("/echo")
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"name":"P1"}"#))
        .unwrap();

    let (status, json) = send(request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["name"], "P1");
}

#[tokio::test]
async fn test_malformed_json_returns_bad_request_body() {
    let request = Request::builder()
        .method("POST")
        .uri("/echo")
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();

    let (status, json) = send(request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "BAD_REQUEST");
    assert!(!json["message"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn test_missing_content_type_returns_bad_request_body() {
    let request = Request::builder()
        .method("POST")
        .uri("/echo")
        .body(Body::from(r#"{"name":"P1"}"#))
        .unwrap();

    let (status, json) = send(request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn test_wrong_field_type_returns_bad_request_body() {
    let request = Request::builder()
        .method("POST")
        .uri("/echo")
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"name":12}"#))
        .unwrap();

    let (status, json) = send(request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "BAD_REQUEST");
}
