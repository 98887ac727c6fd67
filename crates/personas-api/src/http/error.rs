//! Application error type mapping to HTTP status codes.
//!
//! Error bodies are `{"error": "<message>", "code": "<CODE>"}`.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use personas_types::error::{CompanyError, MessageError, PersonaError, ValidationError};

/// Application-level error that maps to HTTP responses.
#[derive(Debug)]
pub enum AppError {
    /// Company-related errors.
    Company(CompanyError),
    /// Persona-related errors.
    Persona(PersonaError),
    /// Message-related errors.
    Message(MessageError),
    /// Request body could not be decoded.
    Validation(String),
}

impl From<CompanyError> for AppError {
    fn from(e: CompanyError) -> Self {
        AppError::Company(e)
    }
}

impl From<PersonaError> for AppError {
    fn from(e: PersonaError) -> Self {
        AppError::Persona(e)
    }
}

impl From<MessageError> for AppError {
    fn from(e: MessageError) -> Self {
        AppError::Message(e)
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Validation(ValidationError::Malformed(rejection.body_text()).to_string())
    }
}

const STORAGE_MESSAGE: &str = "Internal storage error";

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Company(CompanyError::NotFound) => (
                StatusCode::NOT_FOUND,
                "COMPANY_NOT_FOUND",
                "Company not found".to_string(),
            ),
            AppError::Persona(PersonaError::NotFound) => (
                StatusCode::NOT_FOUND,
                "PERSONA_NOT_FOUND",
                "Persona not found".to_string(),
            ),
            AppError::Company(CompanyError::Validation(e))
            | AppError::Persona(PersonaError::Validation(e))
            | AppError::Message(MessageError::Validation(e)) => {
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", e.to_string())
            }
            AppError::Validation(msg) => {
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
            }
            AppError::Company(CompanyError::StorageError(detail))
            | AppError::Persona(PersonaError::StorageError(detail))
            | AppError::Message(MessageError::StorageError(detail)) => {
                tracing::error!(error = %detail, "storage failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "STORAGE_ERROR",
                    STORAGE_MESSAGE.to_string(),
                )
            }
        };

        (status, axum::Json(json!({ "error": message, "code": code }))).into_response()
    }
}
