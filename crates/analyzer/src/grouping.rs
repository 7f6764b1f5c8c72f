//! Variant grouping: bucket aspect-ratio and placement variants of one
//! creative into a single ad group.
//!
//! Grouping is stem-based: file names that differ only by a placement or
//! ratio suffix (`_story`, `_9x16`, ...) or a trailing variant counter
//! (`_1`, `_2`) are treated as variants of the same creative.

use std::sync::LazyLock;

use regex::Regex;

use autonamer_core::models::{AdGroup, GroupedAssets, ProcessedAsset, UserInputs};
use autonamer_core::mutation::renumber_groups;
use autonamer_core::types::GroupId;

/// Suffixes that mark a placement/ratio variant of the same creative.
static VARIANT_SUFFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:_(?:story|feed|reel|sq|square|9x16|4x5|1x1|16x9)|_\d{1,2})+$")
        .expect("valid regex")
});

/// Normalize a file name to its grouping key: lowercase stem with variant
/// suffixes stripped.
pub fn normalize_stem(file_name: &str) -> String {
    let stem = file_name
        .rsplit_once('.')
        .map(|(stem, _)| stem)
        .unwrap_or(file_name);
    let stem = stem.to_lowercase();
    VARIANT_SUFFIX.replace(&stem, "").to_string()
}

/// Bucket processed assets into ad groups by normalized stem.
///
/// Buckets keep first-appearance order of the incoming asset list (which the
/// source lister sorts by file name); every asset lands in a group, so the
/// ungrouped pool starts empty. Ad numbers are seeded from
/// `inputs.start_number` in display sort order, and campaign/date come from
/// the analyze-time inputs.
pub fn group_variants(assets: Vec<ProcessedAsset>, inputs: &UserInputs) -> GroupedAssets {
    let mut stems: Vec<String> = Vec::new();
    let mut buckets: Vec<Vec<ProcessedAsset>> = Vec::new();

    for asset in assets {
        let stem = normalize_stem(&asset.asset.name);
        match stems.iter().position(|s| *s == stem) {
            Some(i) => buckets[i].push(asset),
            None => {
                stems.push(stem);
                buckets.push(vec![asset]);
            }
        }
    }

    let groups = buckets
        .into_iter()
        .map(|assets| {
            AdGroup::new(
                GroupId::new_v4(),
                0,
                assets,
                inputs.campaign.clone(),
                inputs.date.clone(),
            )
        })
        .collect();

    let mut snapshot = GroupedAssets {
        groups,
        ungrouped: vec![],
    };
    renumber_groups(&mut snapshot, i64::from(inputs.start_number));
    snapshot
}
