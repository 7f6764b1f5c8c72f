//! Route definitions for the review-stage group operations.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::groups;
use crate::state::AppState;

/// Group routes.
///
/// ```text
/// GET /groups                        -> get_groups
/// PUT /groups/renumber               -> renumber_groups
/// PUT /groups/regroup                -> regroup_asset
/// PUT /groups/{id}                   -> update_group
/// PUT /groups/{id}/assets/{asset_id} -> update_asset
/// GET /table                         -> table_rows
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/groups", get(groups::get_groups))
        .route("/groups/renumber", put(groups::renumber_groups))
        .route("/groups/regroup", put(groups::regroup_asset))
        .route("/groups/{id}", put(groups::update_group))
        .route("/groups/{id}/assets/{asset_id}", put(groups::update_asset))
        .route("/table", get(groups::table_rows))
}
