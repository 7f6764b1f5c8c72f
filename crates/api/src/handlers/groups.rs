//! Handlers for the review-stage group operations.
//!
//! Every mutation follows the same contract: apply through the store, then
//! return a fresh full-snapshot read. Derived fields (names, sort order,
//! row projection) are recomputed from that confirmed state, never merged
//! client-side.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use autonamer_core::mutation::{AssetPatch, GroupPatch};
use autonamer_core::projection::project_rows;
use autonamer_core::sorting::sort_groups;
use autonamer_core::types::{AssetId, GroupId};

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for renumbering groups.
#[derive(Debug, Deserialize)]
pub struct RenumberRequest {
    #[serde(default = "default_start_number")]
    pub start_number: i64,
}

fn default_start_number() -> i64 {
    1
}

/// Request body for regrouping an asset. A missing `target_group_id` means
/// "create a new group containing only this asset".
#[derive(Debug, Deserialize)]
pub struct RegroupRequest {
    pub asset_id: AssetId,
    pub target_group_id: Option<GroupId>,
}

/// GET /api/v1/groups
///
/// The current authoritative snapshot.
pub async fn get_groups(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let snapshot = state.store.read_snapshot().await?;
    Ok(Json(DataResponse { data: snapshot }))
}

/// PUT /api/v1/groups/renumber
///
/// Reassign ad numbers contiguously in display sort order.
pub async fn renumber_groups(
    State(state): State<AppState>,
    Json(input): Json<RenumberRequest>,
) -> AppResult<impl IntoResponse> {
    let snapshot = state.store.renumber(input.start_number).await?;

    tracing::info!(
        start_number = input.start_number,
        groups = snapshot.groups.len(),
        "Groups renumbered",
    );

    Ok(Json(DataResponse { data: snapshot }))
}

/// PUT /api/v1/groups/regroup
///
/// Move an asset between groups, or into a fresh group.
pub async fn regroup_asset(
    State(state): State<AppState>,
    Json(input): Json<RegroupRequest>,
) -> AppResult<impl IntoResponse> {
    let snapshot = state
        .store
        .regroup(input.asset_id, input.target_group_id)
        .await?;

    tracing::info!(
        asset_id = %input.asset_id,
        target_group_id = ?input.target_group_id,
        groups = snapshot.groups.len(),
        "Asset regrouped",
    );

    Ok(Json(DataResponse { data: snapshot }))
}

/// PUT /api/v1/groups/{id}
///
/// Merge-patch a group's editable fields.
pub async fn update_group(
    State(state): State<AppState>,
    Path(id): Path<GroupId>,
    Json(patch): Json<GroupPatch>,
) -> AppResult<impl IntoResponse> {
    state.store.apply_group_patch(id, &patch).await?;
    tracing::info!(group_id = %id, "Group updated");

    // Mandatory reconciliation read: derived names always come from
    // store-confirmed state.
    let snapshot = state.store.read_snapshot().await?;
    Ok(Json(DataResponse { data: snapshot }))
}

/// PUT /api/v1/groups/{id}/assets/{asset_id}
///
/// Merge-patch one asset's carousel card fields.
pub async fn update_asset(
    State(state): State<AppState>,
    Path((id, asset_id)): Path<(GroupId, AssetId)>,
    Json(patch): Json<AssetPatch>,
) -> AppResult<impl IntoResponse> {
    state.store.apply_asset_patch(id, asset_id, &patch).await?;
    tracing::info!(group_id = %id, asset_id = %asset_id, "Asset card updated");

    let snapshot = state.store.read_snapshot().await?;
    Ok(Json(DataResponse { data: snapshot }))
}

/// GET /api/v1/table
///
/// The row-per-asset projection of the current snapshot, in display order.
pub async fn table_rows(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let mut snapshot = state.store.read_snapshot().await?;
    sort_groups(&mut snapshot.groups);
    let rows = project_rows(&snapshot.groups);
    Ok(Json(DataResponse { data: rows }))
}
