/// Assets are identified by a UUID assigned when the Analyzer first sees the file.
pub type AssetId = uuid::Uuid;

/// Ad groups are identified by a UUID assigned at group creation.
///
/// The group's `ad_number` is a display/naming attribute only and must never
/// be used as a lookup key.
pub type GroupId = uuid::Uuid;
