use crate::ApiError;

use pa_core::CoreError;
use pa_db::DbError;

use std::panic::Location;

use axum::response::IntoResponse;
use error_location::ErrorLocation;
use http::StatusCode;
use http_body_util::BodyExt;

async fn body_json(error: ApiError) -> (StatusCode, serde_json::Value) {
    let response = error.into_response();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_not_found_returns_404_with_flat_json_body() {
    let error = ApiError::NotFound {
        message: "The project with this ID was not found".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["message"], "The project with this ID was not found");
    assert!(json.get("field").is_none());
}

#[tokio::test]
async fn test_validation_error_returns_400_with_field() {
    let error = ApiError::Validation {
        message: "Project name and description required".into(),
        field: Some("name".into()),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["field"], "name");
}

#[tokio::test]
async fn test_bad_request_returns_400() {
    let error = ApiError::BadRequest {
        message: "FOREIGN KEY constraint failed".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "BAD_REQUEST");
    assert_eq!(json["message"], "FOREIGN KEY constraint failed");
}

#[tokio::test]
async fn test_internal_error_returns_500_with_message() {
    let error = ApiError::Internal {
        message: "Database connection failed".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "INTERNAL_ERROR");
    assert_eq!(json["message"], "Database connection failed");
}

#[tokio::test]
async fn test_timeout_returns_504() {
    let error = ApiError::Timeout {
        message: "Request did not complete within 1s".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::GATEWAY_TIMEOUT);
    assert_eq!(json["code"], "TIMEOUT");
}

#[test]
fn test_missing_fields_keeps_custom_message() {
    let core_error = CoreError::MissingField {
        field: "description",
        location: ErrorLocation::from(Location::caller()),
    };

    let api_error = ApiError::missing_fields(core_error, "Notes and description required");

    match api_error {
        ApiError::Validation { field, message, .. } => {
            assert_eq!(message, "Notes and description required");
            assert_eq!(field.as_deref(), Some("description"));
        }
        _ => panic!("Expected Validation error"),
    }
}

#[test]
fn test_constraint_db_error_converts_to_bad_request() {
    let db_error = DbError::Constraint {
        message: "FOREIGN KEY constraint failed".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let api_error: ApiError = db_error.into();

    assert_eq!(api_error.status_code(), StatusCode::BAD_REQUEST);
}

#[test]
fn test_other_db_error_converts_to_internal_with_message() {
    let db_error = DbError::Initialization {
        message: "disk full".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let api_error: ApiError = db_error.into();

    match api_error {
        ApiError::Internal { message, .. } => assert_eq!(message, "disk full"),
        _ => panic!("Expected Internal error"),
    }
}

#[test]
fn test_rejected_insert_is_bad_request_for_any_db_error() {
    let db_error = DbError::Initialization {
        message: "no such table: actions".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let api_error = ApiError::rejected_insert(db_error);

    match api_error {
        ApiError::BadRequest { message, .. } => assert_eq!(message, "no such table: actions"),
        _ => panic!("Expected BadRequest error"),
    }
}
