//! Shared helpers for API integration tests.
//!
//! Builds the full application router with the same middleware stack that
//! production uses, plus a handle to the underlying session store so tests
//! can seed a session without going through the analyzer.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;
use uuid::Uuid;

use autonamer_api::config::ServerConfig;
use autonamer_api::router::build_app_router;
use autonamer_api::state::AppState;
use autonamer_core::models::{
    AdGroup, Asset, AssetType, GroupedAssets, Placement, ProcessedAsset, UserInputs,
};
use autonamer_store::SessionStore;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
    }
}

/// Build the full application router plus a handle to its session store.
pub fn build_test_app() -> (Router, Arc<SessionStore>) {
    let config = test_config();
    let store = Arc::new(SessionStore::new());
    let state = AppState {
        store: Arc::clone(&store),
        config: Arc::new(config.clone()),
    };
    (build_app_router(state, &config), store)
}

/// A processed asset with the given name, type, and dimensions.
pub fn processed_asset(
    name: &str,
    asset_type: AssetType,
    width: u32,
    height: u32,
) -> ProcessedAsset {
    let placement = if height > width {
        Placement::Story
    } else {
        Placement::Feed
    };
    ProcessedAsset {
        asset: Asset {
            id: Uuid::new_v4(),
            name: name.into(),
            path: format!("/tmp/{name}"),
            asset_type,
            width,
            height,
        },
        placement,
        aspect_ratio: if height > 0 {
            width as f64 / height as f64
        } else {
            0.0
        },
        thumbnail_url: None,
        headline: None,
        description: None,
    }
}

/// Two groups: a two-asset group ("promo") and a single-video group.
pub fn seeded_snapshot() -> GroupedAssets {
    let mut first = AdGroup::new(
        Uuid::new_v4(),
        1,
        vec![
            processed_asset("1_promo_feed.jpg", AssetType::Img, 1080, 1080),
            processed_asset("1_promo_story.mp4", AssetType::Vid, 1080, 1920),
        ],
        "Q4Launch".into(),
        String::new(),
    );
    first.creator = "Jess".into();

    let second = AdGroup::new(
        Uuid::new_v4(),
        2,
        vec![processed_asset("2_clip.mov", AssetType::Vid, 1080, 1920)],
        "Q4Launch".into(),
        String::new(),
    );

    GroupedAssets {
        groups: vec![first, second],
        ungrouped: vec![],
    }
}

/// Install the seeded snapshot as the current session.
pub async fn install_session(store: &SessionStore) -> GroupedAssets {
    let snapshot = seeded_snapshot();
    store.install(snapshot.clone(), UserInputs::default()).await;
    snapshot
}

/// Send a request with an optional JSON body; return status + parsed JSON.
pub async fn send_json(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<serde_json::Value>,
) -> (StatusCode, serde_json::Value) {
    let request = match body {
        Some(json) => Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        // Some responses (e.g. extractor rejections) carry a plain-text body;
        // fall back to Null rather than panicking so status-only assertions work.
        serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null)
    };
    (status, json)
}
