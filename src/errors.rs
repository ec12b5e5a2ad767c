use axum::http::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    /// Missing environment value or an unusable credential payload.
    #[error("{0}")]
    Configuration(String),
    /// The fetched sheet does not carry the required header row.
    #[error("{0}")]
    Schema(String),
    #[error("{0}")]
    ExternalService(String),
    #[error("{0}")]
    Io(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Configuration(_)
            | AppError::Schema(_)
            | AppError::ExternalService(_)
            | AppError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Stable name of the error kind, reported in debug error bodies.
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::Configuration(_) => "Configuration",
            AppError::Schema(_) => "Schema",
            AppError::ExternalService(_) => "ExternalService",
            AppError::Io(_) => "Io",
        }
    }
}
