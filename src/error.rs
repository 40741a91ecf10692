//! Application error type and its HTTP status mapping.

use axum::http::StatusCode;
use thiserror::Error;

use crate::auth::AuthError;
use crate::repository::RepositoryError;

/// Errors surfaced by request handlers.
#[derive(Error, Debug)]
pub enum AppError {
    /// Session provider failure.
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// Collection storage failure.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl AppError {
    /// HTTP status for this error.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Auth(AuthError::UnknownAccount(_)) => StatusCode::UNAUTHORIZED,
            Self::Auth(AuthError::AccountExists(_)) | Self::Repository(RepositoryError::DuplicateId(_)) => {
                StatusCode::CONFLICT
            }
            Self::Auth(AuthError::Unavailable(_)) => StatusCode::SERVICE_UNAVAILABLE,
            Self::Repository(RepositoryError::NotFound(_)) => StatusCode::NOT_FOUND,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_status_codes() {
        let err = AppError::from(AuthError::UnknownAccount("a@b.c".to_string()));
        assert_eq!(err.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(err.to_string(), "no account found for a@b.c");

        let err = AppError::from(RepositoryError::NotFound("7".to_string()));
        assert_eq!(err.status(), StatusCode::NOT_FOUND);

        let err = AppError::from(AuthError::AccountExists("a@b.c".to_string()));
        assert_eq!(err.status(), StatusCode::CONFLICT);
    }
}
