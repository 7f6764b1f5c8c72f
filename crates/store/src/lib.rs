//! Authoritative session store for the auto-namer.
//!
//! Holds the single grouped-assets snapshot behind an async lock and applies
//! the mutation protocol from `autonamer-core` atomically: every mutation
//! takes the write lock for its whole application, so readers never observe
//! an asset with zero or two owners. Also hosts the optional debug recorder
//! that traces mutations and post-mutation snapshots.

pub mod recorder;
pub mod session;

pub use recorder::{Recorder, TraceEntry};
pub use session::SessionStore;
