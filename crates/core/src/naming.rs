//! Ad group and asset naming convention engine.
//!
//! Generates deterministic names from group metadata and asset identity.
//! Both functions are total: they degrade (skip empty segments, keep a bare
//! trailing dot) rather than fail.

use crate::models::asset::ProcessedAsset;
use crate::models::group::AdGroup;

/// Generate the canonical display name for an ad group.
///
/// Segments are appended in fixed order, each only when non-empty:
/// zero-padded ad number, campaign, product, format token (always present),
/// angle, hook, creator, the literal `Offer` when the offer flag is set, and
/// the date. Segments are joined with `_`, then any run of two or more
/// underscores is collapsed to one, so stray underscores inside field values
/// can never produce a double separator.
///
/// # Examples
///
/// ```
/// use autonamer_core::models::AdGroup;
/// use autonamer_core::naming::group_name;
/// use autonamer_core::types::GroupId;
///
/// let mut group = AdGroup::new(GroupId::new_v4(), 3, vec![], "Q4Launch".into(), String::new());
/// group.format_token = "VID".into();
/// group.angle = "Hook1".into();
/// group.creator = "Jess".into();
/// group.offer = true;
/// assert_eq!(group_name(&group), "003_Q4Launch_VID_Hook1_Jess_Offer");
/// ```
pub fn group_name(group: &AdGroup) -> String {
    let number = format!("{:03}", group.ad_number);

    let mut parts: Vec<&str> = vec![&number];
    if !group.campaign.is_empty() {
        parts.push(&group.campaign);
    }
    if !group.product.is_empty() {
        parts.push(&group.product);
    }
    // The format token is a required classifier and is always included;
    // if upstream ever leaves it empty, the collapse below absorbs the gap.
    parts.push(&group.format_token);
    if !group.angle.is_empty() {
        parts.push(&group.angle);
    }
    if !group.hook.is_empty() {
        parts.push(&group.hook);
    }
    if !group.creator.is_empty() {
        parts.push(&group.creator);
    }
    if group.offer {
        parts.push("Offer");
    }
    if !group.date.is_empty() {
        parts.push(&group.date);
    }

    collapse_underscores(&parts.join("_"))
}

/// Generate the output file name for one asset within a group.
///
/// Convention: `{ad_number:03}_{asset_type}_{placement}.{ext}` where `ext`
/// is everything after the final `.` of the original file name. A name with
/// no dot yields an empty extension and a trailing bare `.` -- a deliberate
/// degenerate case, not an error.
///
/// The asset's own `IMG`/`VID` classification is used, not the group's
/// format token: a group may mix a feed image with a story video variant,
/// and each asset's own type must appear in its own name.
pub fn asset_file_name(group: &AdGroup, asset: &ProcessedAsset) -> String {
    let ext = asset
        .asset
        .name
        .rsplit_once('.')
        .map(|(_, ext)| ext)
        .unwrap_or("");

    format!(
        "{:03}_{}_{}.{}",
        group.ad_number,
        asset.asset.asset_type.as_str(),
        asset.placement.as_str(),
        ext
    )
}

/// Collapse every run of two or more underscores to a single underscore.
fn collapse_underscores(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut prev_underscore = false;
    for ch in name.chars() {
        if ch == '_' {
            if !prev_underscore {
                out.push('_');
            }
            prev_underscore = true;
        } else {
            out.push(ch);
            prev_underscore = false;
        }
    }
    out
}
