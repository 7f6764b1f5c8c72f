//! Route definitions for the debug capture side-channel.

use axum::routing::get;
use axum::Router;

use crate::handlers::debug;
use crate::state::AppState;

/// Debug capture routes.
///
/// ```text
/// GET    /debug/capture -> read_capture
/// POST   /debug/capture -> toggle_capture
/// DELETE /debug/capture -> clear_capture
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/debug/capture",
        get(debug::read_capture)
            .post(debug::toggle_capture)
            .delete(debug::clear_capture),
    )
}
