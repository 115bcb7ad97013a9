use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

pub type AppResult<T> = Result<T, AppError>;

/// Request errors are client-correctable and map to HTTP 400 with a short
/// `{"error": ...}` body. `ExtractionFailed` is a business-level failure:
/// handlers intercept it and report it inside an HTTP 200 payload, so it only
/// reaches `IntoResponse` (as a 500) if something unexpected lets it escape.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("No file provided")]
    MissingFile,

    #[error("File must be a PDF")]
    NotAPdf,

    #[error("No PDF data provided")]
    MissingPayload,

    #[error("Invalid base64 data")]
    InvalidBase64,

    #[error("URL parameter is required")]
    MissingUrl,

    #[error("URL must be an Instagram link")]
    NotInstagram,

    #[error("Invalid Instagram URL format")]
    InvalidInstagramUrl,

    #[error("Invalid upload: {message}")]
    InvalidUpload { message: String },

    #[error("Failed to extract text from PDF: {message}")]
    ExtractionFailed { message: String },

    #[error("Internal server error: {message}")]
    Internal { message: String },
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::MissingFile
            | AppError::NotAPdf
            | AppError::MissingPayload
            | AppError::InvalidBase64
            | AppError::MissingUrl
            | AppError::NotInstagram
            | AppError::InvalidInstagramUrl
            | AppError::InvalidUpload { .. } => StatusCode::BAD_REQUEST,
            AppError::ExtractionFailed { .. } | AppError::Internal { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    pub fn invalid_upload(message: impl Into<String>) -> Self {
        AppError::InvalidUpload {
            message: message.into(),
        }
    }

    pub fn extraction(message: impl Into<String>) -> Self {
        AppError::ExtractionFailed {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        AppError::Internal {
            message: message.into(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.to_string();

        tracing::error!(
            status_code = %status,
            error_message = %message,
            "Request failed"
        );

        // 400s carry a bare reason; 500s keep the success envelope.
        let body = if status.is_client_error() {
            json!({ "error": message })
        } else {
            json!({ "success": false, "error": message })
        };

        (status, Json(body)).into_response()
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal {
            message: err.to_string(),
        }
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Internal {
            message: format!("IO error: {}", err),
        }
    }
}
