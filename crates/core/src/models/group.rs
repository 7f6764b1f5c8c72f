//! Ad group model and structural classification.

use serde::{Deserialize, Serialize};

use crate::models::asset::{AssetType, ProcessedAsset};
use crate::types::GroupId;

/// Structural classification of a group, derived from its asset composition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupType {
    /// One asset.
    Single,
    /// Two or more assets that do not form a carousel.
    Standard,
    /// Three or more square assets (carousel cards).
    Carousel,
}

/// A named bucket of processed assets sharing one naming identity.
///
/// `assets` is ordered and non-empty while the group is live; a group emptied
/// by a regroup is removed from the snapshot rather than kept around.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdGroup {
    pub id: GroupId,
    /// Display ordinal used in generated names. Renumbering restores
    /// uniqueness; in between it is best-effort and never a lookup key.
    pub ad_number: u32,
    pub group_type: GroupType,
    /// Required creative-format classifier (`IMG`, `VID`, or `CAR`).
    pub format_token: String,
    pub assets: Vec<ProcessedAsset>,

    // Naming fields. Empty string means "not set"; empty segments are
    // omitted from generated names.
    pub campaign: String,
    pub product: String,
    pub angle: String,
    pub hook: String,
    pub creator: String,
    pub offer: bool,
    /// Date segment in `YYYY.MM.DD` form, or empty.
    pub date: String,

    // Ad copy fields. Not part of the generated name.
    pub primary_text: String,
    pub headline: String,
    pub description: String,
    pub cta: String,
    pub url: String,
    pub comment_media_buyer: String,
    pub comment_client: String,
}

impl AdGroup {
    /// Create a group around an initial set of assets, with naming and copy
    /// fields empty except for the seeded campaign/date.
    pub fn new(
        id: GroupId,
        ad_number: u32,
        assets: Vec<ProcessedAsset>,
        campaign: String,
        date: String,
    ) -> Self {
        let mut group = Self {
            id,
            ad_number,
            group_type: GroupType::Single,
            format_token: String::new(),
            assets,
            campaign,
            product: String::new(),
            angle: String::new(),
            hook: String::new(),
            creator: String::new(),
            offer: false,
            date,
            primary_text: String::new(),
            headline: String::new(),
            description: String::new(),
            cta: String::new(),
            url: String::new(),
            comment_media_buyer: String::new(),
            comment_client: String::new(),
        };
        group.reclassify();
        group
    }

    /// File name of the first asset, or `""` for an assetless group.
    ///
    /// This is the group's sort key; the empty-string fallback makes the
    /// sorter total rather than failing on a group mid-deletion.
    pub fn first_asset_name(&self) -> &str {
        self.assets.first().map(|a| a.asset.name.as_str()).unwrap_or("")
    }

    /// Recompute `group_type` and `format_token` from the current assets.
    ///
    /// Called after any mutation that changes the group's composition:
    /// three or more square assets form a carousel, two or more assets are
    /// standard, one is single. The format token follows: any video makes
    /// the group `VID`, a carousel is `CAR`, everything else is `IMG`.
    pub fn reclassify(&mut self) {
        self.group_type = match self.assets.len() {
            0 | 1 => GroupType::Single,
            2 => GroupType::Standard,
            _ => {
                if self.assets.iter().all(ProcessedAsset::is_square) {
                    GroupType::Carousel
                } else {
                    GroupType::Standard
                }
            }
        };

        let has_video = self
            .assets
            .iter()
            .any(|a| a.asset.asset_type == AssetType::Vid);
        self.format_token = if has_video {
            "VID".to_string()
        } else if self.group_type == GroupType::Carousel {
            "CAR".to_string()
        } else {
            "IMG".to_string()
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::asset::{Asset, Placement};
    use crate::types::AssetId;

    fn processed(name: &str, asset_type: AssetType, width: u32, height: u32) -> ProcessedAsset {
        ProcessedAsset {
            asset: Asset {
                id: AssetId::new_v4(),
                name: name.into(),
                path: format!("/tmp/{name}"),
                asset_type,
                width,
                height,
            },
            placement: Placement::Feed,
            aspect_ratio: if height > 0 {
                width as f64 / height as f64
            } else {
                0.0
            },
            thumbnail_url: None,
            headline: None,
            description: None,
        }
    }

    fn group_of(assets: Vec<ProcessedAsset>) -> AdGroup {
        AdGroup::new(
            GroupId::new_v4(),
            1,
            assets,
            "Campaign".into(),
            String::new(),
        )
    }

    #[test]
    fn single_image_classifies_as_single_img() {
        let group = group_of(vec![processed("a.jpg", AssetType::Img, 1080, 1920)]);
        assert_eq!(group.group_type, GroupType::Single);
        assert_eq!(group.format_token, "IMG");
    }

    #[test]
    fn two_assets_classify_as_standard() {
        let group = group_of(vec![
            processed("a.jpg", AssetType::Img, 1080, 1080),
            processed("b.jpg", AssetType::Img, 1080, 1080),
        ]);
        assert_eq!(group.group_type, GroupType::Standard);
    }

    #[test]
    fn three_square_images_classify_as_carousel() {
        let group = group_of(vec![
            processed("a.jpg", AssetType::Img, 1080, 1080),
            processed("b.jpg", AssetType::Img, 1000, 1020),
            processed("c.jpg", AssetType::Img, 1080, 1080),
        ]);
        assert_eq!(group.group_type, GroupType::Carousel);
        assert_eq!(group.format_token, "CAR");
    }

    #[test]
    fn three_mixed_ratio_images_stay_standard() {
        let group = group_of(vec![
            processed("a.jpg", AssetType::Img, 1080, 1080),
            processed("b.jpg", AssetType::Img, 1080, 1920),
            processed("c.jpg", AssetType::Img, 1080, 1080),
        ]);
        assert_eq!(group.group_type, GroupType::Standard);
        assert_eq!(group.format_token, "IMG");
    }

    #[test]
    fn any_video_forces_vid_token() {
        let group = group_of(vec![
            processed("a.jpg", AssetType::Img, 1080, 1080),
            processed("b.mp4", AssetType::Vid, 1080, 1920),
        ]);
        assert_eq!(group.format_token, "VID");
    }

    #[test]
    fn first_asset_name_falls_back_to_empty() {
        let group = group_of(vec![]);
        assert_eq!(group.first_asset_name(), "");
    }
}
