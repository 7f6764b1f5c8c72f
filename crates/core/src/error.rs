use crate::types::{AssetId, GroupId};

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },

    #[error("Asset {asset_id} does not belong to group {group_id}")]
    AssetNotInGroup {
        asset_id: AssetId,
        group_id: GroupId,
    },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("Analysis failed: {0}")]
    AnalysisFailed(String),
}

impl CoreError {
    /// Shorthand for a [`CoreError::NotFound`] from any displayable id.
    pub fn not_found(entity: &'static str, id: impl ToString) -> Self {
        CoreError::NotFound {
            entity,
            id: id.to_string(),
        }
    }
}
