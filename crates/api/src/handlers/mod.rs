//! Request handlers, split by surface area.

pub mod bulk;
pub mod debug;
pub mod export;
pub mod groups;
pub mod pipeline;
