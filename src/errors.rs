use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("NOT_FOUND: {0}")]
    NotFound(String),
    #[error("INVALID_JSON: {0}")]
    Validation(String),
    #[error("ALREADY_EXISTS: {0}")]
    AlreadyExists(String),
    #[error("ALREADY_MEMBER: {0}")]
    AlreadyMember(String),
    #[error("NOT_MEMBER: {0}")]
    NotMember(String),
    #[error("IO_FAILURE: {0}")]
    Io(String),
    #[error("INTERNAL: {0}")]
    Internal(String),
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
