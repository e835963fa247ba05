//! # Error Handling Middleware
//!
//! This module provides a standardized way to handle errors in the tabletime
//! API. It maps domain-specific errors to appropriate HTTP status codes and
//! JSON error responses, keeping the `{"success": false, "error": ...}`
//! envelope the client expects on every failure.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tabletime_core::errors::TimeError;

/// Application error wrapper that provides HTTP status code mapping
///
/// `AppError` wraps domain-specific `TimeError` instances and implements
/// `IntoResponse` to convert them into HTTP responses with appropriate
/// status codes and JSON payloads.
#[derive(Debug)]
pub struct AppError(pub TimeError);

/// Converts application errors to HTTP responses
///
/// This implementation maps each error type to the appropriate HTTP status
/// code and formats the error message into the `success` envelope.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Map error types to HTTP status codes
        let status = match &self.0 {
            TimeError::NotFound(_) => StatusCode::NOT_FOUND,
            TimeError::Validation(_) => StatusCode::BAD_REQUEST,
            TimeError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            TimeError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        // Get the error message and format as JSON
        let message = self.0.to_string();
        let body = Json(json!({ "success": false, "error": message }));

        // Combine status code and JSON body into a response
        (status, body).into_response()
    }
}

/// Automatic conversion from TimeError to AppError
///
/// This implementation allows using `?` operator with functions that return
/// `Result<T, TimeError>` in handler functions that return `Result<T, AppError>`.
impl From<TimeError> for AppError {
    fn from(err: TimeError) -> Self {
        AppError(err)
    }
}

/// Automatic conversion from eyre::Report to AppError
///
/// This implementation allows using `?` operator with functions that return
/// `Result<T, eyre::Report>` in handler functions that return `Result<T, AppError>`.
/// It wraps the eyre error in a TimeError::Database variant.
impl From<eyre::Report> for AppError {
    fn from(err: eyre::Report) -> Self {
        AppError(TimeError::Database(err))
    }
}
