//! Handlers for the debug capture side-channel.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use autonamer_store::TraceEntry;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for toggling capture.
#[derive(Debug, Deserialize)]
pub struct CaptureRequest {
    pub enabled: bool,
}

/// Current capture state plus the recorded trace.
#[derive(Debug, Serialize)]
struct CaptureResponse {
    enabled: bool,
    entries: Vec<TraceEntry>,
}

/// GET /api/v1/debug/capture
pub async fn read_capture(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let recorder = state.store.recorder();
    Ok(Json(DataResponse {
        data: CaptureResponse {
            enabled: recorder.is_enabled(),
            entries: recorder.entries(),
        },
    }))
}

/// POST /api/v1/debug/capture
pub async fn toggle_capture(
    State(state): State<AppState>,
    Json(input): Json<CaptureRequest>,
) -> AppResult<impl IntoResponse> {
    state.store.recorder().set_enabled(input.enabled);
    tracing::info!(enabled = input.enabled, "Debug capture toggled");

    Ok(Json(DataResponse {
        data: CaptureResponse {
            enabled: input.enabled,
            entries: state.store.recorder().entries(),
        },
    }))
}

/// DELETE /api/v1/debug/capture
pub async fn clear_capture(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    state.store.recorder().clear();
    Ok(Json(DataResponse {
        data: CaptureResponse {
            enabled: state.store.recorder().is_enabled(),
            entries: Vec::new(),
        },
    }))
}
