use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use thiserror::Error;

use crate::types::ErrorResponse;

/// Failures surfaced by the `/key` handlers. The store itself never fails.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("API key not set")]
    NotSet,

    #[error("Invalid request body")]
    InvalidBody,

    #[error("API key cannot be empty")]
    EmptyKey,
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match *self {
            ApiError::NotSet => StatusCode::NOT_FOUND,
            ApiError::InvalidBody | ApiError::EmptyKey => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes() {
        assert_eq!(ApiError::NotSet.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(ApiError::InvalidBody.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::EmptyKey.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn messages() {
        assert_eq!(ApiError::NotSet.to_string(), "API key not set");
        assert_eq!(ApiError::InvalidBody.to_string(), "Invalid request body");
        assert_eq!(ApiError::EmptyKey.to_string(), "API key cannot be empty");
    }
}
