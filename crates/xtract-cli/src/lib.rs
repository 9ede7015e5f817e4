//! CLI library components for xtract.

pub mod logging;
pub mod pipeline;
