//! The Analyzer: turns a local folder of creative files into the initial
//! grouped-assets snapshot.
//!
//! Pipeline: list source files, probe dimensions (image headers / ffprobe),
//! classify placement from aspect ratio, then bucket aspect-ratio variants
//! of the same creative into ad groups. Everything downstream of the
//! returned snapshot (editing, regrouping, renumbering) is the store's job.

pub mod classify;
pub mod grouping;
pub mod probe;
pub mod source;

use std::path::Path;

use autonamer_core::error::CoreError;
use autonamer_core::models::{Asset, AssetType, GroupedAssets, ProcessedAsset, UserInputs};
use autonamer_core::types::AssetId;

/// Analyze a folder and build the initial snapshot.
///
/// Fails with [`CoreError::AnalysisFailed`] when the folder is unreadable or
/// contains no usable assets. Per-file probe failures degrade (unknown
/// placement for images, portrait defaults for videos) instead of failing
/// the whole run.
pub async fn analyze(folder: &Path, inputs: &UserInputs) -> Result<GroupedAssets, CoreError> {
    let files = source::list_source_files(folder)?;
    if files.is_empty() {
        return Err(CoreError::AnalysisFailed(format!(
            "no image or video assets found in {}",
            folder.display()
        )));
    }

    let mut processed = Vec::with_capacity(files.len());
    for file in files {
        let dimensions = match file.asset_type {
            AssetType::Img => probe::image_dimensions(&file.path),
            AssetType::Vid => probe::video_dimensions(&file.path).await,
        };
        let (width, height) = dimensions.map(|d| (d.width, d.height)).unwrap_or((0, 0));

        let asset = Asset {
            id: AssetId::new_v4(),
            name: file.name.clone(),
            path: file.path.to_string_lossy().to_string(),
            asset_type: file.asset_type,
            width,
            height,
        };

        processed.push(ProcessedAsset {
            placement: classify::placement_for(width, height),
            aspect_ratio: classify::aspect_ratio(width, height),
            thumbnail_url: None,
            headline: None,
            description: None,
            asset,
        });
    }

    tracing::info!(
        folder = %folder.display(),
        assets = processed.len(),
        "Analyzed source folder"
    );

    Ok(grouping::group_variants(processed, inputs))
}
