use thiserror::Error;

#[derive(Debug, Error)]
pub enum SiteError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to access clipboard: {0}")]
    Clipboard(String),

    #[error("Translation table has no entry for language '{0}'")]
    MissingLanguage(String),

    #[error("Translation field '{field}' is blank for language '{language}'")]
    BlankTranslation { language: String, field: String },

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, SiteError>;
