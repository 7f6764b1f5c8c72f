use std::sync::Arc;

use autonamer_store::SessionStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// The authoritative session store.
    pub store: Arc<SessionStore>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
