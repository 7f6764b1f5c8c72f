//! The grouped-assets snapshot: the unit of authoritative read/refresh.

use serde::{Deserialize, Serialize};

use crate::models::asset::ProcessedAsset;
use crate::models::group::AdGroup;
use crate::types::{AssetId, GroupId};

/// Where an asset currently lives within a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetOwner {
    /// Position of the owning group and of the asset within it.
    Group { group: usize, asset: usize },
    /// Index into the ungrouped pool.
    Ungrouped(usize),
}

/// The full authoritative read: all groups plus the ungrouped pool.
///
/// Clients hold this read-only between mutations; every mutation is followed
/// by a fresh snapshot read, never a local merge.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GroupedAssets {
    pub groups: Vec<AdGroup>,
    pub ungrouped: Vec<ProcessedAsset>,
}

impl GroupedAssets {
    pub fn find_group(&self, id: GroupId) -> Option<&AdGroup> {
        self.groups.iter().find(|g| g.id == id)
    }

    pub fn find_group_mut(&mut self, id: GroupId) -> Option<&mut AdGroup> {
        self.groups.iter_mut().find(|g| g.id == id)
    }

    /// Locate the current owner of an asset, if it exists anywhere in the
    /// snapshot. Exclusive ownership is an invariant: the first match is the
    /// only match.
    pub fn owner_of(&self, asset_id: AssetId) -> Option<AssetOwner> {
        for (gi, group) in self.groups.iter().enumerate() {
            if let Some(ai) = group.assets.iter().position(|a| a.asset.id == asset_id) {
                return Some(AssetOwner::Group {
                    group: gi,
                    asset: ai,
                });
            }
        }
        self.ungrouped
            .iter()
            .position(|a| a.asset.id == asset_id)
            .map(AssetOwner::Ungrouped)
    }

    /// Highest ad_number currently assigned, or 0 when there are no groups.
    pub fn max_ad_number(&self) -> u32 {
        self.groups.iter().map(|g| g.ad_number).max().unwrap_or(0)
    }

    /// Total assets across groups and the ungrouped pool.
    pub fn asset_count(&self) -> usize {
        self.groups.iter().map(|g| g.assets.len()).sum::<usize>() + self.ungrouped.len()
    }
}

/// Analyze-time inputs retained for the life of a session.
///
/// Used to seed campaign/date on groups the store creates after analysis
/// (e.g. the fresh group from a regroup-to-new).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserInputs {
    pub client: String,
    pub campaign: String,
    pub start_number: u32,
    pub date: String,
    pub folder_path: String,
}

impl Default for UserInputs {
    fn default() -> Self {
        Self {
            client: "Client".to_string(),
            campaign: String::new(),
            start_number: 1,
            date: String::new(),
            folder_path: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::asset::{Asset, AssetType, Placement};

    fn processed(name: &str) -> ProcessedAsset {
        ProcessedAsset {
            asset: Asset {
                id: AssetId::new_v4(),
                name: name.into(),
                path: format!("/tmp/{name}"),
                asset_type: AssetType::Img,
                width: 1080,
                height: 1080,
            },
            placement: Placement::Feed,
            aspect_ratio: 1.0,
            thumbnail_url: None,
            headline: None,
            description: None,
        }
    }

    #[test]
    fn owner_of_finds_grouped_and_ungrouped_assets() {
        let grouped = processed("a.jpg");
        let grouped_id = grouped.asset.id;
        let loose = processed("b.jpg");
        let loose_id = loose.asset.id;

        let snapshot = GroupedAssets {
            groups: vec![AdGroup::new(
                GroupId::new_v4(),
                1,
                vec![grouped],
                String::new(),
                String::new(),
            )],
            ungrouped: vec![loose],
        };

        assert_eq!(
            snapshot.owner_of(grouped_id),
            Some(AssetOwner::Group { group: 0, asset: 0 })
        );
        assert_eq!(snapshot.owner_of(loose_id), Some(AssetOwner::Ungrouped(0)));
        assert_eq!(snapshot.owner_of(AssetId::new_v4()), None);
    }

    #[test]
    fn max_ad_number_of_empty_snapshot_is_zero() {
        assert_eq!(GroupedAssets::default().max_ad_number(), 0);
    }
}
