//! Export rows and CSV building.
//!
//! One row per asset: original name, both generated names, and the full set
//! of group metadata fields. The rows are computed with the same naming
//! functions as the table projection, so exported names always match what
//! the review view displayed.

use serde::Serialize;

use crate::models::group::{AdGroup, GroupType};
use crate::naming;
use crate::types::{AssetId, GroupId};

/// One exported line, pre-flattened for tabular serialization.
#[derive(Debug, Clone, Serialize)]
pub struct ExportRow {
    pub file_id: AssetId,
    pub old_name: String,
    /// Generated per-asset file name.
    pub new_name: String,
    /// Canonical group name shared by all assets of the group.
    pub group_name: String,
    pub group_id: GroupId,
    pub ad_number: u32,
    pub group_type: GroupType,
    pub placement: String,
    pub campaign: String,
    pub product: String,
    pub angle: String,
    pub hook: String,
    pub creator: String,
    pub offer: bool,
    pub date: String,
    pub primary_text: String,
    pub headline: String,
    pub description: String,
    pub cta: String,
    pub url: String,
    pub comment_media_buyer: String,
    pub comment_client: String,
}

/// Build export rows for all groups, preserving group and asset order.
pub fn build_export_rows(groups: &[AdGroup]) -> Vec<ExportRow> {
    let mut rows = Vec::with_capacity(groups.iter().map(|g| g.assets.len()).sum());

    for group in groups {
        let group_name = naming::group_name(group);

        for asset in &group.assets {
            rows.push(ExportRow {
                file_id: asset.asset.id,
                old_name: asset.asset.name.clone(),
                new_name: naming::asset_file_name(group, asset),
                group_name: group_name.clone(),
                group_id: group.id,
                ad_number: group.ad_number,
                group_type: group.group_type,
                placement: asset.placement.as_str().to_string(),
                campaign: group.campaign.clone(),
                product: group.product.clone(),
                angle: group.angle.clone(),
                hook: group.hook.clone(),
                creator: group.creator.clone(),
                offer: group.offer,
                date: group.date.clone(),
                primary_text: group.primary_text.clone(),
                headline: group.headline.clone(),
                description: group.description.clone(),
                cta: group.cta.clone(),
                url: group.url.clone(),
                comment_media_buyer: group.comment_media_buyer.clone(),
                comment_client: group.comment_client.clone(),
            });
        }
    }

    rows
}

/// Column order of the CSV artifact.
const CSV_HEADER: &[&str] = &[
    "file_id",
    "old_name",
    "new_name",
    "group_name",
    "group_id",
    "ad_number",
    "group_type",
    "placement",
    "campaign",
    "product",
    "angle",
    "hook",
    "creator",
    "offer",
    "date",
    "primary_text",
    "headline",
    "description",
    "cta",
    "url",
    "comment_media_buyer",
    "comment_client",
];

/// Serialize all groups to a CSV string, header row included.
pub fn export_csv(groups: &[AdGroup]) -> String {
    let mut out = String::new();
    out.push_str(&CSV_HEADER.join(","));
    out.push('\n');

    for row in build_export_rows(groups) {
        let group_type = match row.group_type {
            GroupType::Single => "single",
            GroupType::Standard => "standard",
            GroupType::Carousel => "carousel",
        };
        let fields = [
            row.file_id.to_string(),
            row.old_name,
            row.new_name,
            row.group_name,
            row.group_id.to_string(),
            row.ad_number.to_string(),
            group_type.to_string(),
            row.placement,
            row.campaign,
            row.product,
            row.angle,
            row.hook,
            row.creator,
            (if row.offer { "yes" } else { "no" }).to_string(),
            row.date,
            row.primary_text,
            row.headline,
            row.description,
            row.cta,
            row.url,
            row.comment_media_buyer,
            row.comment_client,
        ];
        let line: Vec<String> = fields.iter().map(|f| csv_escape(f)).collect();
        out.push_str(&line.join(","));
        out.push('\n');
    }

    out
}

/// Escape a value for CSV: wrap in quotes if it contains a comma, quote, or
/// newline, doubling any embedded quotes.
fn csv_escape(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::asset::{Asset, AssetType, Placement, ProcessedAsset};

    fn group_with_asset() -> AdGroup {
        let asset = ProcessedAsset {
            asset: Asset {
                id: AssetId::new_v4(),
                name: "raw_clip.mov".into(),
                path: "/tmp/raw_clip.mov".into(),
                asset_type: AssetType::Vid,
                width: 1080,
                height: 1920,
            },
            placement: Placement::Story,
            aspect_ratio: 1080.0 / 1920.0,
            thumbnail_url: None,
            headline: None,
            description: None,
        };
        let mut group = AdGroup::new(
            GroupId::new_v4(),
            12,
            vec![asset],
            "Q4Launch".into(),
            String::new(),
        );
        group.creator = "Jess".into();
        group
    }

    #[test]
    fn export_names_match_naming_engine() {
        let group = group_with_asset();
        let rows = build_export_rows(std::slice::from_ref(&group));

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].new_name, "012_VID_story.mov");
        assert_eq!(rows[0].new_name, naming::asset_file_name(&group, &group.assets[0]));
        assert_eq!(rows[0].group_name, naming::group_name(&group));
        assert_eq!(rows[0].old_name, "raw_clip.mov");
    }

    #[test]
    fn csv_has_header_and_one_line_per_asset() {
        let group = group_with_asset();
        let csv = export_csv(std::slice::from_ref(&group));
        let lines: Vec<&str> = csv.trim_end().lines().collect();

        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("file_id,old_name,new_name,"));
        assert!(lines[1].contains("012_VID_story.mov"));
    }

    #[test]
    fn csv_escapes_commas_and_quotes() {
        let mut group = group_with_asset();
        group.primary_text = "Buy now, save 20%".into();
        group.headline = "The \"best\" offer".into();

        let csv = export_csv(std::slice::from_ref(&group));
        assert!(csv.contains("\"Buy now, save 20%\""));
        assert!(csv.contains("\"The \"\"best\"\" offer\""));
    }

    #[test]
    fn offer_serializes_as_yes_no() {
        let mut group = group_with_asset();
        group.offer = true;
        let csv = export_csv(std::slice::from_ref(&group));
        assert!(csv.contains(",yes,"));
    }
}
