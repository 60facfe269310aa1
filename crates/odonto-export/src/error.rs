use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("no survey records to export")]
    NoRecords,

    #[error("spreadsheet generation failed: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    #[error("template rendering failed: {0}")]
    TemplateRender(String),

    #[error("template parse error: {0}")]
    TemplateParse(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<tera::Error> for ExportError {
    fn from(e: tera::Error) -> Self {
        ExportError::TemplateRender(e.to_string())
    }
}
