use crate::error::AppError;

#[derive(Debug, thiserror::Error)]
pub enum ActivityServiceError {
    #[error("dependency error: {0}")]
    Dependency(String),
    #[error("invalid input: {0}")]
    Invalid(String),
    #[error("user not found")]
    UserNotFound,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<AppError> for ActivityServiceError {
    fn from(err: AppError) -> Self {
        match err {
            AppError::BadRequest(msg) => ActivityServiceError::Invalid(msg),
            AppError::NotFound(_) => ActivityServiceError::UserNotFound,
            _ => ActivityServiceError::Dependency(err.to_string()),
        }
    }
}

impl From<ActivityServiceError> for AppError {
    fn from(err: ActivityServiceError) -> Self {
        match err {
            ActivityServiceError::Invalid(msg) => AppError::BadRequest(msg),
            ActivityServiceError::UserNotFound => AppError::NotFound("User not found".to_string()),
            ActivityServiceError::Dependency(msg) => AppError::Internal(msg),
            ActivityServiceError::Other(e) => AppError::Internal(e.to_string()),
        }
    }
}
