use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use autonamer_core::error::CoreError;
use autonamer_core::mutation::BulkError;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `autonamer-core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A bulk operation aborted part-way; carries the applied count.
    #[error(transparent)]
    Bulk(#[from] BulkError),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => core_error_parts(core),

            // --- Bulk failures: same mapping as the underlying error, but
            // the body additionally reports how many groups were updated
            // before the abort. ---
            AppError::Bulk(bulk) => {
                let (status, code, message) = core_error_parts(&bulk.source);
                let body = json!({
                    "error": message,
                    "code": code,
                    "applied": bulk.applied,
                });
                return (status, axum::Json(body)).into_response();
            }

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Map a domain error to status, machine code, and client message.
fn core_error_parts(core: &CoreError) -> (StatusCode, &'static str, String) {
    match core {
        CoreError::NotFound { entity, id } => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            format!("{entity} with id {id} not found"),
        ),
        CoreError::AssetNotInGroup { asset_id, group_id } => (
            StatusCode::CONFLICT,
            "ASSET_NOT_IN_GROUP",
            format!("Asset {asset_id} does not belong to group {group_id}"),
        ),
        CoreError::InvalidInput(msg) => {
            (StatusCode::BAD_REQUEST, "INVALID_INPUT", msg.clone())
        }
        CoreError::AnalysisFailed(msg) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            "ANALYSIS_FAILED",
            msg.clone(),
        ),
        CoreError::StoreUnavailable(msg) => (
            StatusCode::SERVICE_UNAVAILABLE,
            "STORE_UNAVAILABLE",
            msg.clone(),
        ),
    }
}
