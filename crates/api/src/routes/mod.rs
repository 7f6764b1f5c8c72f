//! Route registration, split by surface area. Handlers live in
//! `crate::handlers`; each module here only wires paths to them.

pub mod bulk;
pub mod debug;
pub mod export;
pub mod groups;
pub mod health;
pub mod pipeline;

use axum::Router;

use crate::state::AppState;

/// All routes mounted under `/api/v1`.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(pipeline::router())
        .merge(groups::router())
        .merge(bulk::router())
        .merge(export::router())
        .merge(debug::router())
}
