use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum Error {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("invalid status: {0}")]
    InvalidStatus(String),

    #[error("application {0} not found")]
    NotFound(i32),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("dotenv error: {0}")]
    DotEnv(#[from] dotenv::Error),
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    message: String,
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        match self {
            Error::Validation(_) | Error::InvalidStatus(_) => StatusCode::BAD_REQUEST,
            Error::NotFound(_) => StatusCode::NOT_FOUND,
            Error::Database(_) | Error::DotEnv(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorBody { message: self.to_string() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes() {
        assert_eq!(Error::Validation("name is required".into()).status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(Error::InvalidStatus("Maybe".into()).status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(Error::NotFound(1).status_code(), StatusCode::NOT_FOUND);
        assert_eq!(Error::Database(sqlx::Error::PoolClosed).status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn response_body_carries_message() {
        let resp = Error::NotFound(42).error_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
