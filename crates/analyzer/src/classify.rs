//! Placement classification from pixel dimensions.

use autonamer_core::models::Placement;

/// Aspect ratios below this are treated as vertical story creatives.
/// 9:16 is 0.5625; 4:5 feed portraits are 0.8.
const STORY_RATIO_CEILING: f64 = 0.8;

/// Width / height, or 0.0 when either dimension is unknown.
pub fn aspect_ratio(width: u32, height: u32) -> f64 {
    if width == 0 || height == 0 {
        0.0
    } else {
        width as f64 / height as f64
    }
}

/// Classify the ad surface an asset targets from its dimensions.
///
/// Vertical creatives (narrower than 4:5) are story placements; everything
/// else, square and landscape included, is feed. Unknown dimensions stay
/// unknown rather than guessing.
pub fn placement_for(width: u32, height: u32) -> Placement {
    if width == 0 || height == 0 {
        return Placement::Unknown;
    }
    if aspect_ratio(width, height) < STORY_RATIO_CEILING {
        Placement::Story
    } else {
        Placement::Feed
    }
}
