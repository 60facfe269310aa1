use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("object not found: {key}")]
    NotFound { key: String },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("S3 GetObject error: {0}")]
    GetObject(String),

    #[error("S3 PutObject error: {0}")]
    PutObject(String),

    #[error("S3 HeadObject error: {0}")]
    HeadObject(String),

    #[error("S3 DeleteObject error: {0}")]
    DeleteObject(String),

    #[error("S3 ListObjects error: {0}")]
    ListObjects(String),
}
