//! Domain logic for the creative auto-namer.
//!
//! Everything in this crate is pure and synchronous: models for assets,
//! ad groups, and snapshots, plus the naming engine, group sorter, mutation
//! protocol, table projection, and CSV export rows. I/O (folder scanning,
//! session storage, HTTP) lives in the sibling crates.

pub mod error;
pub mod export;
pub mod models;
pub mod mutation;
pub mod naming;
pub mod projection;
pub mod sorting;
pub mod types;
