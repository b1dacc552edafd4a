//! CLI command implementations.

pub mod analyze;
pub mod compensate;
pub mod info;
