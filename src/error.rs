use axum::{http::StatusCode, response::Json};
use serde_json::json;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Restaurant not found")]
    RestaurantNotFound,
    #[error("validation errors")]
    Validation,
    #[error("Invalid restaurant or pizza ID")]
    InvalidReference,
    #[error("Database error: {0}")]
    Database(String),
    #[error("Connection pool error: {0}")]
    Pool(String),
}

impl From<diesel::result::Error> for ApiError {
    fn from(e: diesel::result::Error) -> Self {
        ApiError::Database(e.to_string())
    }
}

impl From<diesel::r2d2::PoolError> for ApiError {
    fn from(e: diesel::r2d2::PoolError) -> Self {
        ApiError::Pool(e.to_string())
    }
}

impl axum::response::IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, body) = match &self {
            ApiError::RestaurantNotFound => (
                StatusCode::NOT_FOUND,
                json!({"error": "Restaurant not found"}),
            ),
            ApiError::Validation => (
                StatusCode::BAD_REQUEST,
                json!({"errors": ["validation errors"]}),
            ),
            ApiError::InvalidReference => (
                StatusCode::BAD_REQUEST,
                json!({"errors": ["Invalid restaurant or pizza ID"]}),
            ),
            ApiError::Database(msg) => (StatusCode::BAD_REQUEST, json!({"error": msg})),
            ApiError::Pool(msg) => (StatusCode::INTERNAL_SERVER_ERROR, json!({"error": msg})),
        };

        (status, Json(body)).into_response()
    }
}
