use thiserror::Error;

use crate::topology::Dentition;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChartError {
    #[error("unknown tooth number: {0}")]
    UnknownTooth(u8),

    #[error("code '{code}' is not a valid {dentition} status for tooth {tooth}")]
    InvalidCode {
        tooth: u8,
        code: String,
        dentition: Dentition,
    },

    #[error("invalid tooth topology: {0}")]
    Topology(String),
}
