// API errors rendered as JSON bodies
use axum::{
    extract::rejection::QueryRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("invalid query: {0}")]
    InvalidQuery(String),

    #[error("invalid year: {0}")]
    InvalidYear(String),

    #[error("no years configured in the catalog")]
    EmptyCatalog,
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::InvalidQuery(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::InvalidQuery(_) | ApiError::InvalidYear(_) => StatusCode::BAD_REQUEST,
            ApiError::EmptyCatalog => StatusCode::UNPROCESSABLE_ENTITY,
        };
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
