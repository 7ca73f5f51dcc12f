use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use configs::ErrorStatus;
use service::errors::ServiceError;
use thiserror::Error;
use tracing::{error, warn};

/// JSON error body `{"error": <title>, "message": <detail>}` with a chosen status.
#[derive(Debug)]
pub struct JsonApiError {
    pub status: StatusCode,
    pub error: &'static str,
    pub message: Option<String>,
}

impl JsonApiError {
    pub fn new(status: StatusCode, error: &'static str, message: Option<String>) -> Self {
        Self { status, error, message }
    }

    /// Map a service failure under the configured policy.
    /// `Legacy` answers 200 whatever happened; callers must look at the body.
    pub fn from_service(policy: ErrorStatus, title: &'static str, e: ServiceError) -> Self {
        let status = match policy {
            ErrorStatus::Legacy => StatusCode::OK,
            ErrorStatus::Strict if e.is_validation() => StatusCode::BAD_REQUEST,
            ErrorStatus::Strict => StatusCode::INTERNAL_SERVER_ERROR,
        };
        Self::new(status, title, Some(e.to_string()))
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        let detail = self.message.as_deref().unwrap_or_default();
        if self.status.is_server_error() {
            error!(status = self.status.as_u16(), error = self.error, detail, "request failed");
        } else {
            warn!(status = self.status.as_u16(), error = self.error, detail, "request rejected");
        }
        let body = serde_json::json!({"error": self.error, "message": self.message});
        (self.status, Json(body)).into_response()
    }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("runtime check failed: {0}")]
    Runtime(String),
    #[error(transparent)]
    Any(#[from] anyhow::Error),
}
