use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use store::StoreError;
use validation::FieldError;

pub type ServerResult<T> = Result<T, ServerError>;

/// Server error types
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// The submitted document failed the schema gate. Carries the full
    /// error list so clients can render field-level feedback.
    #[error("Contract validation failed")]
    Validation(Vec<FieldError>),

    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("{0}")]
    Forbidden(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal server error: {0}")]
    Internal(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl ServerError {
    /// Get HTTP status code for this error
    fn status_code(&self) -> StatusCode {
        match self {
            ServerError::Validation(_) | ServerError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ServerError::NotFound(_) => StatusCode::NOT_FOUND,
            ServerError::Forbidden(_) => StatusCode::FORBIDDEN,
            ServerError::Internal(_) | ServerError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.to_string();
        let timestamp = chrono::Utc::now().to_rfc3339();

        let body = match self {
            ServerError::Validation(errors) => Json(json!({
                "status": "validation_failed",
                "message": message,
                "errors": errors,
                "timestamp": timestamp,
            })),
            _ => Json(json!({
                "status": "error",
                "message": message,
                "timestamp": timestamp,
            })),
        };

        (status, body).into_response()
    }
}

impl From<StoreError> for ServerError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::ContractNotFound => ServerError::NotFound("Contract"),
            StoreError::TemplateNotFound => ServerError::NotFound("Template"),
            StoreError::DefaultTemplateImmutable => ServerError::Forbidden(err.to_string()),
        }
    }
}

impl From<std::net::AddrParseError> for ServerError {
    fn from(err: std::net::AddrParseError) -> Self {
        ServerError::Config(format!("Invalid address: {err}"))
    }
}

impl From<std::io::Error> for ServerError {
    fn from(err: std::io::Error) -> Self {
        ServerError::Internal(format!("IO error: {err}"))
    }
}

impl From<serde_json::Error> for ServerError {
    fn from(err: serde_json::Error) -> Self {
        ServerError::BadRequest(format!("JSON parse error: {err}"))
    }
}

impl From<anyhow::Error> for ServerError {
    fn from(err: anyhow::Error) -> Self {
        ServerError::Internal(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_errors_map_to_http_semantics() {
        assert_eq!(
            ServerError::from(StoreError::ContractNotFound).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ServerError::from(StoreError::TemplateNotFound).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ServerError::from(StoreError::DefaultTemplateImmutable).status_code(),
            StatusCode::FORBIDDEN
        );
    }

    #[test]
    fn validation_failure_is_a_bad_request() {
        let err = ServerError::Validation(vec![]);
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }
}
