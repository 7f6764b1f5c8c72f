//! Handlers for folder analysis and analyze-form defaults.

use std::path::Path;

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use chrono::{Datelike, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use autonamer_core::models::UserInputs;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Campaign token for each calendar month, used as the campaign default.
const MONTH_CAMPAIGNS: [&str; 12] = [
    "JanAds", "FebAds", "MarAds", "AprAds", "MayAds", "JunAds", "JulAds", "AugAds", "SepAds",
    "OctAds", "NovAds", "DecAds",
];

/// Angle options offered by the review UI's dropdown.
const ANGLE_OPTIONS: [&str; 9] = [
    "ProductFocus",
    "Offer",
    "Price",
    "SocialProof",
    "Education",
    "BehindTheScenes",
    "Founder",
    "Brand",
    "Newness",
];

/// Request body for the analyze endpoint.
#[derive(Debug, Deserialize, Validate)]
pub struct AnalyzeRequest {
    #[validate(length(min = 1, message = "folder_path must not be empty"))]
    pub folder_path: String,
    #[serde(default = "default_client")]
    pub client: String,
    /// Defaults to the current month's campaign token when absent.
    pub campaign: Option<String>,
    #[serde(default = "default_start_number")]
    pub start_number: u32,
    /// Defaults to today (`YYYY.MM.DD`) when absent.
    pub date: Option<String>,
}

fn default_client() -> String {
    "Client".to_string()
}

fn default_start_number() -> u32 {
    1
}

/// Response for the config defaults endpoint.
#[derive(Debug, Serialize)]
struct ConfigDefaults {
    default_campaign: &'static str,
    default_date: String,
    default_start_number: u32,
    angle_options: [&'static str; 9],
}

fn campaign_token_for_current_month() -> &'static str {
    MONTH_CAMPAIGNS[(Utc::now().month0()) as usize]
}

fn today() -> String {
    Utc::now().format("%Y.%m.%d").to_string()
}

/// POST /api/v1/pipeline/analyze
///
/// Run the Analyzer over a local folder and install the resulting snapshot
/// as the current session, replacing any prior one.
pub async fn analyze(
    State(state): State<AppState>,
    Json(input): Json<AnalyzeRequest>,
) -> AppResult<impl IntoResponse> {
    input
        .validate()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    let inputs = UserInputs {
        client: input.client,
        campaign: input
            .campaign
            .unwrap_or_else(|| campaign_token_for_current_month().to_string()),
        start_number: input.start_number,
        date: input.date.unwrap_or_else(today),
        folder_path: input.folder_path.clone(),
    };

    let snapshot = autonamer_analyzer::analyze(Path::new(&input.folder_path), &inputs).await?;
    state.store.install(snapshot, inputs).await;

    let snapshot = state.store.read_snapshot().await?;
    tracing::info!(
        folder = %input.folder_path,
        groups = snapshot.groups.len(),
        assets = snapshot.asset_count(),
        "Analysis complete",
    );

    Ok(Json(DataResponse { data: snapshot }))
}

/// GET /api/v1/config
///
/// Defaults for the analyze form.
pub async fn config_defaults() -> AppResult<impl IntoResponse> {
    Ok(Json(DataResponse {
        data: ConfigDefaults {
            default_campaign: campaign_token_for_current_month(),
            default_date: today(),
            default_start_number: default_start_number(),
            angle_options: ANGLE_OPTIONS,
        },
    }))
}
