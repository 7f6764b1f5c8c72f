//! Integration tests for the debug capture side-channel.

mod common;

use axum::http::{Method, StatusCode};
use serde_json::json;

use common::{build_test_app, install_session, send_json};

#[tokio::test]
async fn capture_starts_disabled_and_empty() {
    let (app, _store) = build_test_app();

    let (status, body) = send_json(&app, Method::GET, "/api/v1/debug/capture", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["enabled"], false);
    assert_eq!(body["data"]["entries"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn enabled_capture_traces_mutations() {
    let (app, store) = build_test_app();
    let snapshot = install_session(&store).await;

    let (status, _) = send_json(
        &app,
        Method::POST,
        "/api/v1/debug/capture",
        Some(json!({"enabled": true})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    // One successful mutation, one failing mutation.
    let group_id = snapshot.groups[0].id;
    send_json(
        &app,
        Method::PUT,
        &format!("/api/v1/groups/{group_id}"),
        Some(json!({"hook": "NewHook"})),
    )
    .await;
    send_json(
        &app,
        Method::PUT,
        "/api/v1/groups/regroup",
        Some(json!({"asset_id": uuid::Uuid::new_v4().to_string()})),
    )
    .await;

    let (_, body) = send_json(&app, Method::GET, "/api/v1/debug/capture", None).await;
    let entries = body["data"]["entries"].as_array().unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["operation"], "update_group");
    assert_eq!(entries[0]["outcome"], "ok");
    assert!(entries[0]["snapshot"].is_object());
    assert_eq!(entries[1]["operation"], "regroup");
    assert_ne!(entries[1]["outcome"], "ok");

    // Clearing empties the trace but keeps capture on.
    let (_, body) = send_json(&app, Method::DELETE, "/api/v1/debug/capture", None).await;
    assert_eq!(body["data"]["enabled"], true);
    assert_eq!(body["data"]["entries"].as_array().unwrap().len(), 0);
}
