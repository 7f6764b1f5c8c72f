//! Asset models: the raw source file and its processed wrapper.

use serde::{Deserialize, Serialize};

use crate::types::AssetId;

/// Classification of a source file: still image or video.
///
/// Serialized in uppercase (`IMG` / `VID`) because the same token appears
/// verbatim in generated asset file names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AssetType {
    Img,
    Vid,
}

impl AssetType {
    /// The token used in generated file names.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Img => "IMG",
            Self::Vid => "VID",
        }
    }
}

/// The ad surface an asset variant targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Placement {
    Story,
    Feed,
    Unknown,
}

impl Placement {
    /// The token used in generated file names.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Story => "story",
            Self::Feed => "feed",
            Self::Unknown => "unknown",
        }
    }
}

/// An immutable reference to one source file, created by the Analyzer.
///
/// Nothing here changes after creation; only the asset's group membership
/// moves, and that lives in the snapshot, not on the asset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Asset {
    pub id: AssetId,
    /// Original file name, including extension.
    pub name: String,
    /// Source locator (path within the analyzed folder).
    pub path: String,
    pub asset_type: AssetType,
    /// Pixel width; 0 when dimensions could not be determined.
    pub width: u32,
    /// Pixel height; 0 when dimensions could not be determined.
    pub height: u32,
}

/// An [`Asset`] enriched with classification and per-asset editable copy.
///
/// `headline` / `description` are the carousel-card fields; they are the only
/// mutable pieces of a processed asset and change solely through the
/// asset-patch operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessedAsset {
    pub asset: Asset,
    pub placement: Placement,
    /// Width / height; 0.0 when dimensions are unknown.
    pub aspect_ratio: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headline: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ProcessedAsset {
    /// Whether the asset is square within the carousel tolerance band.
    pub fn is_square(&self) -> bool {
        (0.95..=1.05).contains(&self.aspect_ratio)
    }
}
