use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::{debug, error};

use camgrid_application::error::AppError;

use super::dto::responses::ApiResponse;

pub struct HttpError(pub AppError);

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let app_error = &self.0;

        match app_error {
            AppError::DecodeFailure { .. } => {
                debug!("Client error response generated: {}", app_error);
            }
            _ => {
                error!("Server error response generated: {}", app_error);
            }
        }

        let (status_code, message) = match app_error {
            AppError::DecodeFailure { .. } => (
                StatusCode::BAD_REQUEST,
                "Failed to process image: unreadable image payload".to_string(),
            ),

            AppError::EncodeFailure { .. } | AppError::Domain(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to process image".to_string(),
            ),

            AppError::ProcessingTimeout { .. } => (
                StatusCode::SERVICE_UNAVAILABLE,
                "Image processing timed out".to_string(),
            ),

            AppError::ConfigError { .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Configuration error".to_string(),
            ),

            AppError::TaskError { .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            ),
        };

        let body = ApiResponse::<()>::failure(message, status_code.as_u16());

        (status_code, Json(body)).into_response()
    }
}

impl From<AppError> for HttpError {
    fn from(app_error: AppError) -> Self {
        HttpError(app_error)
    }
}
