//! Handler for the CSV export artifact.

use axum::extract::State;
use axum::http::header;
use axum::response::IntoResponse;

use autonamer_core::export;
use autonamer_core::sorting::sort_groups;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /api/v1/export/csv
///
/// One row per asset in display order. Names are computed by the same
/// naming engine the table projection uses, so the exported names always
/// match what the review view showed.
pub async fn export_csv(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let mut snapshot = state.store.read_snapshot().await?;
    sort_groups(&mut snapshot.groups);

    let csv = export::export_csv(&snapshot.groups);
    tracing::info!(groups = snapshot.groups.len(), "CSV export generated");

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"renamed_assets.csv\"",
            ),
        ],
        csv,
    ))
}
