//! Row-per-asset projection of a sorted group sequence.
//!
//! Flattens groups into display rows. Group-level fields logically span all
//! of a group's rows; the projection exposes that as `is_first_in_group` +
//! `row_span` flags instead of baking any rendering decision in. Stateless:
//! recomputed from the snapshot on every refresh.

use serde::Serialize;

use crate::models::asset::{AssetType, Placement};
use crate::models::group::AdGroup;
use crate::naming;
use crate::types::{AssetId, GroupId};

/// One (group, asset) pair in display order.
#[derive(Debug, Clone, Serialize)]
pub struct TableRow {
    pub group_id: GroupId,
    pub asset_id: AssetId,
    pub ad_number: u32,
    /// True on the first row of each group; a renderer attributes the
    /// group-level fields to this row and spans them over `row_span` rows.
    pub is_first_in_group: bool,
    /// Total number of rows (assets) in this row's group.
    pub row_span: usize,
    /// Canonical group name, identical on every row of the group.
    pub group_name: String,
    /// Generated per-asset output file name.
    pub file_name: String,
    /// The asset's original file name.
    pub original_name: String,
    pub asset_type: AssetType,
    pub placement: Placement,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
}

/// Flatten sorted groups into one row per asset.
///
/// Group order and each group's internal asset order are preserved; callers
/// sort the groups first (the projection itself never reorders).
pub fn project_rows(groups: &[AdGroup]) -> Vec<TableRow> {
    let mut rows = Vec::with_capacity(groups.iter().map(|g| g.assets.len()).sum());

    for group in groups {
        let group_name = naming::group_name(group);
        let row_span = group.assets.len();

        for (index, asset) in group.assets.iter().enumerate() {
            rows.push(TableRow {
                group_id: group.id,
                asset_id: asset.asset.id,
                ad_number: group.ad_number,
                is_first_in_group: index == 0,
                row_span,
                group_name: group_name.clone(),
                file_name: naming::asset_file_name(group, asset),
                original_name: asset.asset.name.clone(),
                asset_type: asset.asset.asset_type,
                placement: asset.placement,
                thumbnail_url: asset.thumbnail_url.clone(),
            });
        }
    }

    rows
}
