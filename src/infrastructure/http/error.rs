//! Error responses - `GenerationError` as the uniform error envelope

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::application::dto::ErrorEnvelope;
use crate::application::services::GenerationError;

pub const GENERIC_ERROR_MESSAGE: &str = "An error occurred during your request.";
pub const CONFIGURATION_ERROR_MESSAGE: &str =
    "API key not configured, please set OPENAI_API_KEY and restart the server.";
pub const INVALID_RESPONSE_MESSAGE: &str =
    "The generated creature could not be read. Please try again.";

/// Error returned by every API handler
#[derive(Debug)]
pub struct ApiError(pub GenerationError);

impl From<GenerationError> for ApiError {
    fn from(err: GenerationError) -> Self {
        Self(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!("Rejected request body: {}", rejection.body_text());
        Self(GenerationError::Validation(
            "Request body must be a JSON object".to_string(),
        ))
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            GenerationError::Validation(_) => StatusCode::BAD_REQUEST,
            GenerationError::Configuration(_) | GenerationError::InvalidResponse(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            GenerationError::Provider { status, .. } => status
                .and_then(|s| StatusCode::from_u16(s).ok())
                .filter(|s| s.is_client_error() || s.is_server_error())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
        }
    }

    /// Client-facing message; internal details stay in the logs
    pub fn message(&self) -> String {
        match &self.0 {
            GenerationError::Validation(message) => message.clone(),
            GenerationError::Configuration(_) => CONFIGURATION_ERROR_MESSAGE.to_string(),
            GenerationError::InvalidResponse(_) => INVALID_RESPONSE_MESSAGE.to_string(),
            GenerationError::Provider {
                status: Some(_),
                message,
            } => message.clone(),
            GenerationError::Provider { status: None, .. } => GENERIC_ERROR_MESSAGE.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(ErrorEnvelope::new(self.message()))).into_response()
    }
}
