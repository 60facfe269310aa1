use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("missing required field: {0}")]
    MissingField(String),

    #[error("invalid value for {field}: {value}")]
    InvalidField { field: String, value: String },

    #[error(transparent)]
    Chart(#[from] odonto_chart::ChartError),
}
