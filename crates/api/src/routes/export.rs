//! Route definition for the CSV export artifact.

use axum::routing::get;
use axum::Router;

use crate::handlers::export;
use crate::state::AppState;

/// Export routes.
///
/// ```text
/// GET /export/csv -> export_csv
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/export/csv", get(export::export_csv))
}
