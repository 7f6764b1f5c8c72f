//! Route definitions for analysis and form defaults.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::pipeline;
use crate::state::AppState;

/// Analysis routes.
///
/// ```text
/// POST /pipeline/analyze -> analyze
/// GET  /config           -> config_defaults
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/pipeline/analyze", post(pipeline::analyze))
        .route("/config", get(pipeline::config_defaults))
}
