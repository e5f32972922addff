use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

use crate::validation::ValidationFailure;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("config error: {0}")]
    Config(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Database(#[from] sqlx::Error),
    #[error("{0}")]
    Validation(ValidationFailure),
    #[error("could not find any rides")]
    RidesNotFound,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error_code: &'static str,
    pub message: String,
}

impl IntoResponse for AppError {
    // Domain errors ride on HTTP 200; clients dispatch on `error_code`.
    // Store faults keep their detail in the log and go out as "Unknown error".
    fn into_response(self) -> Response {
        let body = match &self {
            AppError::Validation(failure) => {
                error!("VALIDATION_ERROR: {failure}");
                ErrorBody {
                    error_code: "VALIDATION_ERROR",
                    message: failure.to_string(),
                }
            }
            AppError::RidesNotFound => {
                error!("RIDES_NOT_FOUND_ERROR: Could not find any rides");
                ErrorBody {
                    error_code: "RIDES_NOT_FOUND_ERROR",
                    message: "Could not find any rides".into(),
                }
            }
            other => {
                error!("request failed: {other:?}");
                ErrorBody {
                    error_code: "SERVER_ERROR",
                    message: "Unknown error".into(),
                }
            }
        };

        (StatusCode::OK, Json(body)).into_response()
    }
}
