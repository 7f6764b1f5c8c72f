//! Group/asset mutation protocol.
//!
//! Patch DTOs plus the pure application functions that the session store
//! wraps. Every operation validates before it mutates, so a returned error
//! means the snapshot is unchanged -- the fail-closed contract callers rely
//! on when they re-read after a failure.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::models::asset::ProcessedAsset;
use crate::models::group::AdGroup;
use crate::models::snapshot::{AssetOwner, GroupedAssets, UserInputs};
use crate::sorting::sorted_indices;
use crate::types::{AssetId, GroupId};

// ---------------------------------------------------------------------------
// Patch DTOs
// ---------------------------------------------------------------------------

/// Merge-patch for an ad group's editable fields.
///
/// Absent fields are left unchanged; present fields overwrite, including
/// overwriting with an empty string to clear a segment.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GroupPatch {
    pub campaign: Option<String>,
    pub product: Option<String>,
    pub angle: Option<String>,
    pub hook: Option<String>,
    pub creator: Option<String>,
    pub offer: Option<bool>,
    pub primary_text: Option<String>,
    pub headline: Option<String>,
    pub description: Option<String>,
    pub cta: Option<String>,
    pub url: Option<String>,
    pub comment_media_buyer: Option<String>,
    pub comment_client: Option<String>,
}

impl GroupPatch {
    fn apply(&self, group: &mut AdGroup) {
        if let Some(v) = &self.campaign {
            group.campaign = v.clone();
        }
        if let Some(v) = &self.product {
            group.product = v.clone();
        }
        if let Some(v) = &self.angle {
            group.angle = v.clone();
        }
        if let Some(v) = &self.hook {
            group.hook = v.clone();
        }
        if let Some(v) = &self.creator {
            group.creator = v.clone();
        }
        if let Some(v) = self.offer {
            group.offer = v;
        }
        if let Some(v) = &self.primary_text {
            group.primary_text = v.clone();
        }
        if let Some(v) = &self.headline {
            group.headline = v.clone();
        }
        if let Some(v) = &self.description {
            group.description = v.clone();
        }
        if let Some(v) = &self.cta {
            group.cta = v.clone();
        }
        if let Some(v) = &self.url {
            group.url = v.clone();
        }
        if let Some(v) = &self.comment_media_buyer {
            group.comment_media_buyer = v.clone();
        }
        if let Some(v) = &self.comment_client {
            group.comment_client = v.clone();
        }
    }
}

/// Merge-patch for the per-asset carousel card fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AssetPatch {
    pub headline: Option<String>,
    pub description: Option<String>,
}

impl AssetPatch {
    fn apply(&self, asset: &mut ProcessedAsset) {
        if let Some(v) = &self.headline {
            asset.headline = Some(v.clone());
        }
        if let Some(v) = &self.description {
            asset.description = Some(v.clone());
        }
    }
}

// ---------------------------------------------------------------------------
// Bulk-editable field selector
// ---------------------------------------------------------------------------

/// The group fields addressable by bulk operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupField {
    Campaign,
    Product,
    Angle,
    Hook,
    Creator,
    Offer,
}

impl GroupField {
    /// Build a single-field patch from the field's string form.
    ///
    /// `Offer` parses spreadsheet-style booleans (`yes`/`true`/`1`).
    pub fn patch_with(self, value: &str) -> GroupPatch {
        let mut patch = GroupPatch::default();
        match self {
            Self::Campaign => patch.campaign = Some(value.to_string()),
            Self::Product => patch.product = Some(value.to_string()),
            Self::Angle => patch.angle = Some(value.to_string()),
            Self::Hook => patch.hook = Some(value.to_string()),
            Self::Creator => patch.creator = Some(value.to_string()),
            Self::Offer => patch.offer = Some(parse_offer(value)),
        }
        patch
    }

    /// Whether the group's current value of this field equals `find`.
    pub fn matches(self, group: &AdGroup, find: &str) -> bool {
        match self {
            Self::Campaign => group.campaign == find,
            Self::Product => group.product == find,
            Self::Angle => group.angle == find,
            Self::Hook => group.hook == find,
            Self::Creator => group.creator == find,
            Self::Offer => group.offer == parse_offer(find),
        }
    }
}

fn parse_offer(value: &str) -> bool {
    matches!(value.to_ascii_lowercase().as_str(), "yes" | "true" | "1")
}

// ---------------------------------------------------------------------------
// Single-entity operations
// ---------------------------------------------------------------------------

/// Merge-patch one group's editable fields.
pub fn apply_group_patch(
    snapshot: &mut GroupedAssets,
    group_id: GroupId,
    patch: &GroupPatch,
) -> Result<AdGroup, CoreError> {
    let group = snapshot
        .find_group_mut(group_id)
        .ok_or_else(|| CoreError::not_found("Group", group_id))?;
    patch.apply(group);
    Ok(group.clone())
}

/// Merge-patch one asset's carousel card fields within a named group.
pub fn apply_asset_patch(
    snapshot: &mut GroupedAssets,
    group_id: GroupId,
    asset_id: AssetId,
    patch: &AssetPatch,
) -> Result<ProcessedAsset, CoreError> {
    let group_index = snapshot
        .groups
        .iter()
        .position(|g| g.id == group_id)
        .ok_or_else(|| CoreError::not_found("Group", group_id))?;

    let asset_index = snapshot.groups[group_index]
        .assets
        .iter()
        .position(|a| a.asset.id == asset_id);

    match asset_index {
        Some(ai) => {
            let asset = &mut snapshot.groups[group_index].assets[ai];
            patch.apply(asset);
            Ok(asset.clone())
        }
        // The asset is real but lives elsewhere: that is an id mismatch,
        // not a missing entity.
        None if snapshot.owner_of(asset_id).is_some() => {
            Err(CoreError::AssetNotInGroup { asset_id, group_id })
        }
        None => Err(CoreError::not_found("Asset", asset_id)),
    }
}

// ---------------------------------------------------------------------------
// Regrouping
// ---------------------------------------------------------------------------

/// Move an asset to another group, or to a brand-new group when `target`
/// is `None`. Returns the id of the asset's new owning group.
///
/// The source is the asset's current owner: a group or the ungrouped pool.
/// Moving the last asset out of a group deletes that group. Moving an asset
/// into the group that already owns it is a no-op. Both affected groups are
/// reclassified afterwards. All lookups happen before the first mutation, so
/// an error leaves the snapshot untouched.
pub fn regroup_asset(
    snapshot: &mut GroupedAssets,
    asset_id: AssetId,
    target: Option<GroupId>,
    inputs: &UserInputs,
) -> Result<GroupId, CoreError> {
    let owner = snapshot
        .owner_of(asset_id)
        .ok_or_else(|| CoreError::not_found("Asset", asset_id))?;

    match target {
        Some(target_id) => {
            let target_index = snapshot
                .groups
                .iter()
                .position(|g| g.id == target_id)
                .ok_or_else(|| CoreError::not_found("Group", target_id))?;

            if let AssetOwner::Group { group: gi, .. } = owner {
                if snapshot.groups[gi].id == target_id {
                    return Ok(target_id);
                }
            }

            let asset = take_asset(snapshot, owner);
            snapshot.groups[target_index].assets.push(asset);
            snapshot.groups[target_index].reclassify();
            cleanup_source(snapshot, owner);
            Ok(target_id)
        }
        None => {
            let asset = take_asset(snapshot, owner);
            cleanup_source(snapshot, owner);

            let ad_number = if snapshot.groups.is_empty() {
                inputs.start_number.max(1)
            } else {
                snapshot.max_ad_number() + 1
            };
            let group = AdGroup::new(
                GroupId::new_v4(),
                ad_number,
                vec![asset],
                inputs.campaign.clone(),
                inputs.date.clone(),
            );
            let id = group.id;
            snapshot.groups.push(group);
            Ok(id)
        }
    }
}

/// Remove the asset from its owner and return it. The owning group, if any,
/// is left in place (possibly empty) for [`cleanup_source`].
fn take_asset(snapshot: &mut GroupedAssets, owner: AssetOwner) -> ProcessedAsset {
    match owner {
        AssetOwner::Group { group, asset } => snapshot.groups[group].assets.remove(asset),
        AssetOwner::Ungrouped(i) => snapshot.ungrouped.remove(i),
    }
}

/// Drop the source group if the move emptied it, otherwise reclassify it.
fn cleanup_source(snapshot: &mut GroupedAssets, owner: AssetOwner) {
    if let AssetOwner::Group { group, .. } = owner {
        if snapshot.groups[group].assets.is_empty() {
            snapshot.groups.remove(group);
        } else {
            snapshot.groups[group].reclassify();
        }
    }
}

// ---------------------------------------------------------------------------
// Renumbering
// ---------------------------------------------------------------------------

/// Reassign `ad_number` contiguously from `start_number` across all groups
/// in display sort order. A non-positive start is coerced to 1.
pub fn renumber_groups(snapshot: &mut GroupedAssets, start_number: i64) {
    let start = start_number.clamp(1, i64::from(u32::MAX)) as u32;

    for (offset, group_index) in sorted_indices(&snapshot.groups).into_iter().enumerate() {
        snapshot.groups[group_index].ad_number = start + offset as u32;
    }
}

// ---------------------------------------------------------------------------
// Bulk operations
// ---------------------------------------------------------------------------

/// Result of a completed bulk operation.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct BulkOutcome {
    /// Number of groups updated.
    pub applied: usize,
}

/// A bulk operation aborted part-way: `applied` groups were updated before
/// the failing one, and the loop did not continue past it.
#[derive(Debug, thiserror::Error)]
#[error("bulk update aborted after {applied} group(s): {source}")]
pub struct BulkError {
    pub applied: usize,
    #[source]
    pub source: CoreError,
}

/// Apply one field value to every group, sequentially, failing fast.
pub fn bulk_apply(
    snapshot: &mut GroupedAssets,
    field: GroupField,
    value: &str,
) -> Result<BulkOutcome, BulkError> {
    let ids: Vec<GroupId> = snapshot.groups.iter().map(|g| g.id).collect();
    let patch = field.patch_with(value);

    let mut applied = 0;
    for id in ids {
        apply_group_patch(snapshot, id, &patch)
            .map_err(|source| BulkError { applied, source })?;
        applied += 1;
    }
    Ok(BulkOutcome { applied })
}

/// Set `field` to `replace` on every group whose current value equals
/// `find`. Sequential and fail-fast like [`bulk_apply`]; `applied` counts
/// only the groups that matched and were rewritten.
pub fn bulk_replace(
    snapshot: &mut GroupedAssets,
    field: GroupField,
    find: &str,
    replace: &str,
) -> Result<BulkOutcome, BulkError> {
    let matching: Vec<GroupId> = snapshot
        .groups
        .iter()
        .filter(|g| field.matches(g, find))
        .map(|g| g.id)
        .collect();
    let patch = field.patch_with(replace);

    let mut applied = 0;
    for id in matching {
        apply_group_patch(snapshot, id, &patch)
            .map_err(|source| BulkError { applied, source })?;
        applied += 1;
    }
    Ok(BulkOutcome { applied })
}
