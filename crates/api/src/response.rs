//! Shared response envelope for API handlers.
//!
//! Every JSON endpoint wraps its payload in `{ "data": ... }`. Using
//! [`DataResponse`] instead of ad-hoc `serde_json::json!` keeps the envelope
//! typed and uniform across handlers.

use serde::Serialize;

/// The `{ "data": T }` response envelope.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}
