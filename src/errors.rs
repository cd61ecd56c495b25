use axum::{extract::rejection::JsonRejection, http::StatusCode, response::IntoResponse, Json};
use thiserror::Error;
use tracing::error;

use crate::models::response::ApiResponse;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Sqlx Error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("Io Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Axum Error: {0}")]
    Axum(#[from] axum::Error),

    #[error("Json Rejection Error: {0}")]
    AxumJsonRejection(#[from] JsonRejection),

    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("{0}")]
    Validation(String),
}

impl IntoResponse for Error {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            Error::Sqlx(err) => {
                error!("Sqlx Error: {err:#?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
            Error::Io(err) => {
                error!("Io Error: {err:#?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
            Error::Axum(err) => {
                error!("Axum Error: {err:#?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
            Error::Config(err) => {
                error!("Configuration Error: {err}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
            Error::AxumJsonRejection(err) => (StatusCode::BAD_REQUEST, err.body_text()),
            Error::Validation(message) => (StatusCode::BAD_REQUEST, message),
        };
        (status, Json(ApiResponse::error(message))).into_response()
    }
}
