//! Tests for `AppError` -> HTTP response mapping.
//!
//! These tests verify that each `AppError` variant produces the correct HTTP
//! status code, error code, and message. They do NOT need an HTTP server --
//! they call `IntoResponse` directly on `AppError` values.

use axum::response::IntoResponse;
use http_body_util::BodyExt;
use uuid::Uuid;

use autonamer_api::error::AppError;
use autonamer_core::error::CoreError;
use autonamer_core::mutation::BulkError;

/// Helper: convert an `AppError` into its status code and parsed JSON body.
async fn error_to_response(err: AppError) -> (axum::http::StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

#[tokio::test]
async fn not_found_error_returns_404() {
    let err = AppError::Core(CoreError::not_found("Group", "42"));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, axum::http::StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["error"], "Group with id 42 not found");
}

#[tokio::test]
async fn asset_not_in_group_returns_409() {
    let asset_id = Uuid::new_v4();
    let group_id = Uuid::new_v4();
    let err = AppError::Core(CoreError::AssetNotInGroup { asset_id, group_id });

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, axum::http::StatusCode::CONFLICT);
    assert_eq!(json["code"], "ASSET_NOT_IN_GROUP");
    assert!(json["error"].as_str().unwrap().contains(&asset_id.to_string()));
}

#[tokio::test]
async fn invalid_input_returns_400() {
    let err = AppError::Core(CoreError::InvalidInput("bad field".into()));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, axum::http::StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "INVALID_INPUT");
    assert_eq!(json["error"], "bad field");
}

#[tokio::test]
async fn analysis_failed_returns_422() {
    let err = AppError::Core(CoreError::AnalysisFailed("no assets found".into()));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, axum::http::StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(json["code"], "ANALYSIS_FAILED");
}

#[tokio::test]
async fn store_unavailable_returns_503() {
    let err = AppError::Core(CoreError::StoreUnavailable("no session".into()));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, axum::http::StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(json["code"], "STORE_UNAVAILABLE");
}

#[tokio::test]
async fn bulk_error_reports_applied_count() {
    let err = AppError::Bulk(BulkError {
        applied: 3,
        source: CoreError::not_found("Group", "dead-beef"),
    });

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, axum::http::StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["applied"], 3);
}

#[tokio::test]
async fn internal_error_returns_500_and_sanitizes_message() {
    let err = AppError::InternalError("secret store details leaked".into());

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, axum::http::StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "INTERNAL_ERROR");

    // The response body must NOT contain the original error details.
    assert!(
        !json.to_string().contains("secret"),
        "Internal error response must not leak details"
    );
    assert_eq!(json["error"], "An internal error occurred");
}
