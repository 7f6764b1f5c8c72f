//! Handlers for bulk field operations.
//!
//! Bulk operations are sequential loops over single-group updates and fail
//! fast: a mid-loop failure aborts the remainder, and the error response
//! carries the count of groups updated before the abort so the caller can
//! decide whether to retry.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use autonamer_core::models::GroupedAssets;
use autonamer_core::mutation::GroupField;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for applying one value to all groups.
#[derive(Debug, Deserialize)]
pub struct BulkApplyRequest {
    pub field: GroupField,
    pub value: String,
}

/// Request body for find/replace on one field across all groups.
#[derive(Debug, Deserialize)]
pub struct BulkReplaceRequest {
    pub field: GroupField,
    pub find: String,
    pub replace: String,
}

/// Response for a completed bulk operation.
#[derive(Debug, Serialize)]
struct BulkResponse {
    applied: usize,
    snapshot: GroupedAssets,
}

/// POST /api/v1/bulk/apply
pub async fn bulk_apply(
    State(state): State<AppState>,
    Json(input): Json<BulkApplyRequest>,
) -> AppResult<impl IntoResponse> {
    let outcome = state.store.bulk_apply(input.field, &input.value).await?;
    let snapshot = state.store.read_snapshot().await?;

    tracing::info!(
        field = ?input.field,
        applied = outcome.applied,
        "Bulk apply complete",
    );

    Ok(Json(DataResponse {
        data: BulkResponse {
            applied: outcome.applied,
            snapshot,
        },
    }))
}

/// POST /api/v1/bulk/replace
pub async fn bulk_replace(
    State(state): State<AppState>,
    Json(input): Json<BulkReplaceRequest>,
) -> AppResult<impl IntoResponse> {
    let outcome = state
        .store
        .bulk_replace(input.field, &input.find, &input.replace)
        .await?;
    let snapshot = state.store.read_snapshot().await?;

    tracing::info!(
        field = ?input.field,
        applied = outcome.applied,
        "Bulk replace complete",
    );

    Ok(Json(DataResponse {
        data: BulkResponse {
            applied: outcome.applied,
            snapshot,
        },
    }))
}
