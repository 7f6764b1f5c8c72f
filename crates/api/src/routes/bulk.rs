//! Route definitions for bulk field operations.

use axum::routing::post;
use axum::Router;

use crate::handlers::bulk;
use crate::state::AppState;

/// Bulk routes.
///
/// ```text
/// POST /bulk/apply   -> bulk_apply
/// POST /bulk/replace -> bulk_replace
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/bulk/apply", post(bulk::bulk_apply))
        .route("/bulk/replace", post(bulk::bulk_replace))
}
