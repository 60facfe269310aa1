//! odonto-cli library root.
//!
//! Re-exports internal modules so that integration tests can exercise them
//! directly without going through the command layer.

pub mod aws;
pub mod chart;
pub mod config;
