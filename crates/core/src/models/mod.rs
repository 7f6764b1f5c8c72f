//! Domain models: assets, ad groups, and the grouped-assets snapshot.

pub mod asset;
pub mod group;
pub mod snapshot;

pub use asset::{Asset, AssetType, Placement, ProcessedAsset};
pub use group::{AdGroup, GroupType};
pub use snapshot::{AssetOwner, GroupedAssets, UserInputs};
