//! odonto-core
//!
//! Survey records, the in-progress survey form, and object key layout.
//! Shared by the store, the exporter and the CLI; does no I/O.

pub mod error;
pub mod form;
pub mod models;
pub mod store_keys;
