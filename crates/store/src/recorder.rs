//! Debug capture: an optional trace of mutations and snapshot states.
//!
//! Disabled by default. While enabled, every store mutation appends one
//! entry with the operation label, its outcome, and the post-mutation
//! snapshot (successful mutations only). This is a side-channel for
//! inspection; nothing in the naming/grouping contract depends on it.

use std::sync::Mutex;

use chrono::{DateTime, Utc};
use serde::Serialize;

use autonamer_core::models::GroupedAssets;

/// One recorded mutation.
#[derive(Debug, Clone, Serialize)]
pub struct TraceEntry {
    pub at: DateTime<Utc>,
    /// Operation label, e.g. `regroup` or `bulk_apply`.
    pub operation: String,
    /// `"ok"`, or the error message for failed mutations.
    pub outcome: String,
    /// Snapshot after a successful mutation; absent for failures.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snapshot: Option<GroupedAssets>,
}

#[derive(Debug, Default)]
struct RecorderState {
    enabled: bool,
    entries: Vec<TraceEntry>,
}

/// Mutation trace recorder. Cheap when disabled: `record` is a flag check.
#[derive(Debug, Default)]
pub struct Recorder {
    state: Mutex<RecorderState>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Turn capture on or off. Turning it off keeps recorded entries.
    pub fn set_enabled(&self, enabled: bool) {
        self.lock().enabled = enabled;
    }

    pub fn is_enabled(&self) -> bool {
        self.lock().enabled
    }

    /// Append an entry if capture is active.
    pub fn record(&self, operation: &str, outcome: &str, snapshot: Option<&GroupedAssets>) {
        let mut state = self.lock();
        if !state.enabled {
            return;
        }
        state.entries.push(TraceEntry {
            at: Utc::now(),
            operation: operation.to_string(),
            outcome: outcome.to_string(),
            snapshot: snapshot.cloned(),
        });
    }

    /// All entries recorded so far.
    pub fn entries(&self) -> Vec<TraceEntry> {
        self.lock().entries.clone()
    }

    pub fn clear(&self) {
        self.lock().entries.clear();
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, RecorderState> {
        // A poisoned recorder mutex only ever means a panic mid-trace;
        // the trace itself is best-effort debug data, so keep going.
        match self.state.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_recorder_drops_entries() {
        let recorder = Recorder::new();
        recorder.record("regroup", "ok", None);
        assert!(recorder.entries().is_empty());
    }

    #[test]
    fn enabled_recorder_captures_in_order() {
        let recorder = Recorder::new();
        recorder.set_enabled(true);
        recorder.record("update_group", "ok", Some(&GroupedAssets::default()));
        recorder.record("regroup", "Asset not found: x", None);

        let entries = recorder.entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].operation, "update_group");
        assert!(entries[0].snapshot.is_some());
        assert_eq!(entries[1].outcome, "Asset not found: x");
        assert!(entries[1].snapshot.is_none());
    }

    #[test]
    fn disabling_keeps_existing_entries() {
        let recorder = Recorder::new();
        recorder.set_enabled(true);
        recorder.record("renumber", "ok", None);
        recorder.set_enabled(false);
        recorder.record("renumber", "ok", None);

        assert_eq!(recorder.entries().len(), 1);
    }

    #[test]
    fn clear_empties_the_trace() {
        let recorder = Recorder::new();
        recorder.set_enabled(true);
        recorder.record("renumber", "ok", None);
        recorder.clear();
        assert!(recorder.entries().is_empty());
    }
}
