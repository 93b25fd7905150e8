//! CLI library components for listmatch.

pub mod commands;
pub mod logging;
pub mod summary;
