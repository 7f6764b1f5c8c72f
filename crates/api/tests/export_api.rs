//! Integration tests for the CSV export endpoint.

mod common;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

use common::{build_test_app, install_session};

#[tokio::test]
async fn export_before_analysis_is_service_unavailable() {
    let (app, _store) = build_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method(Method::GET)
                .uri("/api/v1/export/csv")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn export_streams_csv_attachment() {
    let (app, store) = build_test_app();
    install_session(&store).await;

    let response = app
        .oneshot(
            Request::builder()
                .method(Method::GET)
                .uri("/api/v1/export/csv")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).unwrap(),
        "text/csv; charset=utf-8"
    );
    assert!(response
        .headers()
        .get(header::CONTENT_DISPOSITION)
        .unwrap()
        .to_str()
        .unwrap()
        .contains("attachment"));

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let csv = String::from_utf8(bytes.to_vec()).unwrap();
    let lines: Vec<&str> = csv.trim_end().lines().collect();

    // Header + one row per asset (3 assets seeded).
    assert_eq!(lines.len(), 4);
    assert!(lines[0].starts_with("file_id,old_name,new_name,group_name,"));

    // Exported names match the naming engine outputs shown in the table.
    assert!(csv.contains("001_IMG_feed.jpg"));
    assert!(csv.contains("001_VID_story.mp4"));
    assert!(csv.contains("002_VID_story.mov"));
    assert!(csv.contains("001_Q4Launch_VID_Jess"));
}
