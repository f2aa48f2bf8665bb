use serde_json::Value;
use shared::ValidationError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LavaError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Ответ без поля `data`: API вернул описание ошибки.
    #[error("API error (status {status:?}): {error}")]
    Api { status: Option<i64>, error: Value },

    /// Тело ответа пришло не в JSON, текст сохранён как есть.
    #[error("Unexpected non-JSON response: {0}")]
    NonJsonResponse(String),
}

impl LavaError {
    pub fn is_validation(&self) -> bool {
        matches!(self, LavaError::Validation(_))
    }
}

pub type Result<T> = std::result::Result<T, LavaError>;
