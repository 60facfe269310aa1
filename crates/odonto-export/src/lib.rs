//! odonto-export
//!
//! Spreadsheet export of survey records and the textual survey detail view.

pub mod error;
pub mod render;
pub mod rows;
pub mod xlsx;
