use crate::{AppState, request_timeout};

use std::time::Duration;

use axum::{Router, body::Body, middleware, routing::get};
use http::{Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

async fn app(timeout: Duration) -> Router {
    let state = AppState {
        pool: pa_db::connect_in_memory().await.unwrap(),
        request_timeout: timeout,
        max_body_bytes: 1024 * 1024,
    };

    Router::new()
        .route(
            "/slow",
            get(|| async {
                tokio::time::sleep(Duration::from_secs(5)).await;
                "done"
            }),
        )
        .route("/fast", get(|| async { "done" }))
        .layer(middleware::from_fn_with_state(state, request_timeout))
}

#[tokio::test]
async fn test_slow_handler_times_out_with_504() {
    let app = app(Duration::from_millis(20)).await;
    let request = Request::builder().uri("/slow").body(Body::empty()).unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::GATEWAY_TIMEOUT);
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["code"], "TIMEOUT");
}

#[tokio::test]
async fn test_fast_handler_passes_through() {
    let app = app(Duration::from_secs(5)).await;
    let request = Request::builder().uri("/fast").body(Body::empty()).unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&body[..], b"done");
}
