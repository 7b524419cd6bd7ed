use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Application-level errors
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("Upstream transport error: {0}")]
    UpstreamTransport(String),

    #[error("Upstream call timed out")]
    UpstreamTimeout,

    #[error("Upstream returned invalid JSON: {0}")]
    MalformedUpstreamOutput(String),

    #[error("Upstream response missing 'movies' array: {0}")]
    UnexpectedResponseShape(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::UpstreamTransport(_) => (StatusCode::BAD_GATEWAY, self.to_string()),
            AppError::UpstreamTimeout => (StatusCode::GATEWAY_TIMEOUT, self.to_string()),
            AppError::MalformedUpstreamOutput(_) | AppError::UnexpectedResponseShape(_) => {
                (StatusCode::BAD_GATEWAY, self.to_string())
            }
            AppError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()),
        };

        let body = Json(json!({
            "error": message
        }));

        (status, body).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
