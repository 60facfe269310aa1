//! odonto-chart
//!
//! Odontogram definitions and the survey index engine: the tooth topology,
//! the two condition code alphabets, and the def-t / DMF-T rules. Static
//! data and side-effect-free functions only.

pub mod catalog;
pub mod codes;
pub mod engine;
pub mod error;
pub mod indices;
pub mod statuses;
pub mod topology;

pub use codes::{DeciduousCode, PermanentCode, StatusCode};
pub use engine::{compute_indices, initial_statuses, reclassify, set_status};
pub use error::ChartError;
pub use indices::{DeftIndex, DmftIndex, SurveyIndices};
pub use statuses::ToothStatuses;
pub use topology::{Dentition, ToothNumber};
