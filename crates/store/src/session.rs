//! The session store: single writer, full-snapshot reads.

use tokio::sync::RwLock;

use autonamer_core::error::CoreError;
use autonamer_core::models::{AdGroup, GroupedAssets, ProcessedAsset, UserInputs};
use autonamer_core::mutation::{
    self, AssetPatch, BulkError, BulkOutcome, GroupField, GroupPatch,
};
use autonamer_core::types::{AssetId, GroupId};

use crate::recorder::Recorder;

/// Everything a review session holds between mutations.
#[derive(Debug)]
struct SessionState {
    snapshot: GroupedAssets,
    inputs: UserInputs,
}

/// Authoritative holder of the current review session.
///
/// All mutations run under one write-lock acquisition, which is what makes
/// the protocol's atomicity contract hold: a concurrent reader sees the
/// snapshot strictly before or strictly after a mutation, never mid-move.
/// There is no client-side lock beyond this; the last snapshot read wins
/// for display purposes.
#[derive(Debug, Default)]
pub struct SessionStore {
    state: RwLock<Option<SessionState>>,
    recorder: Recorder,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The debug capture recorder attached to this store.
    pub fn recorder(&self) -> &Recorder {
        &self.recorder
    }

    /// Install a freshly analyzed snapshot, replacing any prior session.
    pub async fn install(&self, snapshot: GroupedAssets, inputs: UserInputs) {
        let mut guard = self.state.write().await;
        self.recorder.record("analyze", "ok", Some(&snapshot));
        tracing::info!(
            groups = snapshot.groups.len(),
            ungrouped = snapshot.ungrouped.len(),
            "Installed analysis snapshot"
        );
        *guard = Some(SessionState { snapshot, inputs });
    }

    /// Read the full authoritative snapshot.
    pub async fn read_snapshot(&self) -> Result<GroupedAssets, CoreError> {
        let guard = self.state.read().await;
        guard
            .as_ref()
            .map(|s| s.snapshot.clone())
            .ok_or_else(no_session)
    }

    /// Merge-patch one group's editable fields, returning the updated group.
    pub async fn apply_group_patch(
        &self,
        group_id: GroupId,
        patch: &GroupPatch,
    ) -> Result<AdGroup, CoreError> {
        self.mutate("update_group", |state| {
            mutation::apply_group_patch(&mut state.snapshot, group_id, patch)
        })
        .await
    }

    /// Merge-patch one asset's card fields, returning the updated asset.
    pub async fn apply_asset_patch(
        &self,
        group_id: GroupId,
        asset_id: AssetId,
        patch: &AssetPatch,
    ) -> Result<ProcessedAsset, CoreError> {
        self.mutate("update_asset", |state| {
            mutation::apply_asset_patch(&mut state.snapshot, group_id, asset_id, patch)
        })
        .await
    }

    /// Move an asset between groups (or into a fresh group for `None`),
    /// returning the resulting snapshot.
    pub async fn regroup(
        &self,
        asset_id: AssetId,
        target: Option<GroupId>,
    ) -> Result<GroupedAssets, CoreError> {
        self.mutate("regroup", |state| {
            let inputs = state.inputs.clone();
            mutation::regroup_asset(&mut state.snapshot, asset_id, target, &inputs)?;
            Ok(state.snapshot.clone())
        })
        .await
    }

    /// Renumber all groups in display sort order, returning the resulting
    /// snapshot.
    pub async fn renumber(&self, start_number: i64) -> Result<GroupedAssets, CoreError> {
        self.mutate("renumber", |state| {
            mutation::renumber_groups(&mut state.snapshot, start_number);
            Ok(state.snapshot.clone())
        })
        .await
    }

    /// Apply one field value to every group, sequentially and fail-fast.
    pub async fn bulk_apply(
        &self,
        field: GroupField,
        value: &str,
    ) -> Result<BulkOutcome, BulkError> {
        self.mutate_bulk("bulk_apply", |state| {
            mutation::bulk_apply(&mut state.snapshot, field, value)
        })
        .await
    }

    /// Replace matching field values across groups, sequentially and
    /// fail-fast.
    pub async fn bulk_replace(
        &self,
        field: GroupField,
        find: &str,
        replace: &str,
    ) -> Result<BulkOutcome, BulkError> {
        self.mutate_bulk("bulk_replace", |state| {
            mutation::bulk_replace(&mut state.snapshot, field, find, replace)
        })
        .await
    }

    /// Run one mutation under the write lock and trace it.
    async fn mutate<T>(
        &self,
        operation: &str,
        apply: impl FnOnce(&mut SessionState) -> Result<T, CoreError>,
    ) -> Result<T, CoreError> {
        let mut guard = self.state.write().await;
        let state = guard.as_mut().ok_or_else(no_session)?;

        match apply(state) {
            Ok(value) => {
                self.recorder.record(operation, "ok", Some(&state.snapshot));
                Ok(value)
            }
            Err(e) => {
                self.recorder.record(operation, &e.to_string(), None);
                Err(e)
            }
        }
    }

    /// Bulk variant of [`Self::mutate`]: the error type carries the applied
    /// count, and a missing session surfaces as zero-applied.
    async fn mutate_bulk(
        &self,
        operation: &str,
        apply: impl FnOnce(&mut SessionState) -> Result<BulkOutcome, BulkError>,
    ) -> Result<BulkOutcome, BulkError> {
        let mut guard = self.state.write().await;
        let state = guard.as_mut().ok_or_else(|| BulkError {
            applied: 0,
            source: no_session(),
        })?;

        match apply(state) {
            Ok(outcome) => {
                self.recorder.record(operation, "ok", Some(&state.snapshot));
                Ok(outcome)
            }
            Err(e) => {
                self.recorder.record(operation, &e.to_string(), None);
                Err(e)
            }
        }
    }
}

fn no_session() -> CoreError {
    CoreError::StoreUnavailable("no analysis session; run analyze first".to_string())
}
